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

#![doc = include_str!("../README.md")]

mod configuration;
mod report;
mod table;

use clap::Parser;
use common_log_reader::{clean, LogReader};
use log::{error, warn};
use std::io::{stdout, Write};
use std::process::ExitCode;

use configuration::{Conf, FromYaml, Opt};
use report::{write_rejected, Report, ReportError};

/// Reads the configured log file and writes the selected reports.
fn run(conf: &Conf, out: &mut impl Write) -> Result<(), ReportError> {
    let outcome = LogReader::from(conf.reader.clone()).read()?;
    if !outcome.rejected.is_empty() {
        warn!(
            "Skipped {} malformed lines in {}",
            outcome.rejected.len(),
            conf.reader.log_file.display()
        );
    }

    let records = clean(outcome.records)?;

    let reports = match conf.report {
        Some(report) => vec![report],
        None => Report::ALL.to_vec(),
    };
    for report in reports {
        report.write(&records, out)?;
    }

    if conf.show_rejected {
        write_rejected(&outcome.rejected, out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let opt = Opt::parse();

    let mut conf = match Conf::load_from_files(opt.conf.as_deref().unwrap_or(&[])) {
        Ok(conf) => conf,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    conf.merge_with_opt(opt);

    match run(&conf, &mut stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
