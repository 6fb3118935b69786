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

//! Success and failure rates

use common_log_reader::LogRecord;
use log::debug;
use thiserror::Error;

/// Errors produced by the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A percentage was requested for an empty record list
    #[error("no records to analyze")]
    EmptyDataset,
}

/// Checks whether a record has a status code in the 200 to 399 range.
pub fn is_successful(record: &LogRecord) -> bool {
    (200..=399).contains(&record.status)
}

/// Checks whether a record has a status code of 400 or above.
pub fn is_unsuccessful(record: &LogRecord) -> bool {
    record.status >= 400
}

/// Returns the records with an unsuccessful status code.
pub fn unsuccessful_requests(records: &[LogRecord]) -> impl Iterator<Item = &LogRecord> {
    records.iter().filter(|record| is_unsuccessful(record))
}

fn percentage(part: usize, total: usize) -> Result<f64, AnalysisError> {
    if total == 0 {
        debug!("Cannot calculate a percentage without records");
        return Err(AnalysisError::EmptyDataset);
    }

    let percentage = part as f64 * 100.0 / total as f64;
    Ok((percentage * 100.0).round() / 100.0)
}

/// Percentage of successful requests, rounded to two decimal places
pub fn success_req_percentage(records: &[LogRecord]) -> Result<f64, AnalysisError> {
    let successful = records.iter().filter(|record| is_successful(record)).count();
    percentage(successful, records.len())
}

/// Percentage of unsuccessful requests, rounded to two decimal places
pub fn unsuccess_req_percentage(records: &[LogRecord]) -> Result<f64, AnalysisError> {
    percentage(unsuccessful_requests(records).count(), records.len())
}
