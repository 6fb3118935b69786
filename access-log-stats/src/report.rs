// Copyright 2024 Wladimir Palant
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The reports this tool can print

use common_log_reader::{CleanError, LogRecord, ReadError, RejectedLine};
use log_analysis::{
    success_req_percentage, top10_hosts, top10_requests, top10_unsuccess_requests,
    top5_reqs_of_top_hosts, unsuccess_req_percentage, AnalysisError, Ranked,
};
use serde::Deserialize;
use std::io::Write;
use thiserror::Error;

use crate::table::Table;

/// Errors aborting report generation
#[derive(Debug, Error)]
pub(crate) enum ReportError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Clean(#[from] CleanError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("failed writing report: {0}")]
    Output(#[from] std::io::Error),
}

/// A single report, numbered 1 to 6 on the command line and in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub(crate) enum Report {
    TopRequests,
    SuccessRate,
    FailureRate,
    TopUnsuccessfulRequests,
    TopHosts,
    TopRequestsOfTopHosts,
}

impl TryFrom<u8> for Report {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::TopRequests),
            2 => Ok(Self::SuccessRate),
            3 => Ok(Self::FailureRate),
            4 => Ok(Self::TopUnsuccessfulRequests),
            5 => Ok(Self::TopHosts),
            6 => Ok(Self::TopRequestsOfTopHosts),
            other => Err(format!("Invalid option {other}, expected a number from 1 to 6")),
        }
    }
}

fn ranking_table(column: &'static str, ranking: Vec<Ranked>) -> Table {
    let mut table = Table::new(vec![column, "count"]);
    for Ranked { key, count } in ranking {
        table.push(vec![key, count.to_string()]);
    }
    table
}

impl Report {
    /// All reports in the order they are printed by default
    pub(crate) const ALL: [Report; 6] = [
        Self::TopRequests,
        Self::SuccessRate,
        Self::FailureRate,
        Self::TopUnsuccessfulRequests,
        Self::TopHosts,
        Self::TopRequestsOfTopHosts,
    ];

    /// Writes the report for the given records.
    pub(crate) fn write(
        self,
        records: &[LogRecord],
        out: &mut impl Write,
    ) -> Result<(), ReportError> {
        writeln!(out)?;
        match self {
            Self::TopRequests => {
                writeln!(out, "Top 10 requested pages")?;
                write!(out, "{}", ranking_table("request", top10_requests(records)))?;
            }
            Self::SuccessRate => {
                let percentage = success_req_percentage(records)?;
                writeln!(out, "Successful requests: {percentage:.2} %")?;
            }
            Self::FailureRate => {
                let percentage = unsuccess_req_percentage(records)?;
                writeln!(out, "Unsuccessful requests: {percentage:.2} %")?;
            }
            Self::TopUnsuccessfulRequests => {
                writeln!(out, "Top 10 unsuccessful requests")?;
                let ranking = top10_unsuccess_requests(records);
                write!(out, "{}", ranking_table("request", ranking))?;
            }
            Self::TopHosts => {
                writeln!(out, "Top 10 hosts")?;
                write!(out, "{}", ranking_table("host", top10_hosts(records)))?;
            }
            Self::TopRequestsOfTopHosts => {
                writeln!(out, "Top 5 requests of top 10 hosts")?;
                let mut table = Table::without_index(vec!["host", "request", "count"]);
                for entry in top5_reqs_of_top_hosts(records) {
                    let mut host = Some(entry.host);
                    for Ranked { key, count } in entry.requests {
                        table.push(vec![host.take().unwrap_or_default(), key, count.to_string()]);
                    }
                }
                write!(out, "{table}")?;
            }
        }
        Ok(())
    }
}

/// Lists the lines skipped while reading the log.
pub(crate) fn write_rejected(
    rejected: &[RejectedLine],
    out: &mut impl Write,
) -> Result<(), ReportError> {
    writeln!(out)?;
    writeln!(out, "Rejected lines: {}", rejected.len())?;
    for line in rejected {
        writeln!(out, "{}: {} ({})", line.line, line.text, line.reason)?;
    }
    Ok(())
}
