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

//! Command line options and configuration files

use clap::Parser;
use common_log_reader::{ReaderConf, ReaderOpt};
use log::trace;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fmt::Debug;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::report::Report;

/// Errors produced when loading configuration files
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed opening configuration file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed reading configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("configuration file {} doesn’t contain a map", .path.display())]
    NotAMap { path: PathBuf },
    #[error("invalid configuration: {0}")]
    Invalid(#[from] serde_yaml::Error),
}

/// Trait for configuration structures that can be loaded from YAML files. This trait has a blanket
/// implementation for any structure implementing [`serde::Deserialize`].
pub(crate) trait FromYaml {
    /// Loads configuration from a list of YAML files. Top-level settings in later files replace
    /// the ones from earlier files.
    fn load_from_files<P>(files: &[P]) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
        Self: Sized;
}

impl<D> FromYaml for D
where
    D: DeserializeOwned + Debug,
{
    fn load_from_files<P>(files: &[P]) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let mut merged = Mapping::new();
        for path in files {
            let path = path.as_ref();
            let file = File::open(path).map_err(|source| ConfigError::Open {
                path: path.to_owned(),
                source,
            })?;
            let value: Value = serde_yaml::from_reader(BufReader::new(file)).map_err(|source| {
                ConfigError::Read {
                    path: path.to_owned(),
                    source,
                }
            })?;

            match value {
                Value::Mapping(map) => merged.extend(map),
                Value::Null => {}
                _ => {
                    return Err(ConfigError::NotAMap {
                        path: path.to_owned(),
                    })
                }
            }
        }

        let conf = serde_yaml::from_value(Value::Mapping(merged))?;
        trace!("Loaded configuration: {conf:#?}");
        Ok(conf)
    }
}

fn parse_report(value: &str) -> Result<Report, String> {
    let number: u8 = value
        .parse()
        .map_err(|_| format!("{value} is not a number"))?;
    Report::try_from(number)
}

/// Print statistics about a web server access log in the Common Log Format
#[derive(Debug, Parser)]
#[command(version)]
pub(crate) struct Opt {
    /// Number of the report to print (1 to 6). All reports are printed if omitted.
    #[arg(short, long = "option", value_parser = parse_report)]
    pub(crate) option: Option<Report>,
    /// The path to the configuration file. This command line flag can be specified multiple times.
    #[arg(short, long)]
    pub(crate) conf: Option<Vec<PathBuf>>,
    /// List the log lines that could not be parsed.
    #[arg(long)]
    pub(crate) show_rejected: bool,
    #[command(flatten)]
    pub(crate) reader: ReaderOpt,
}

/// The configuration of the tool
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Conf {
    #[serde(flatten)]
    pub(crate) reader: ReaderConf,
    /// Single report to print, all reports if missing
    pub(crate) report: Option<Report>,
    /// List the rejected log lines after the reports
    pub(crate) show_rejected: bool,
}

impl Conf {
    /// Merges the command line options into the current configuration. Any command line options
    /// present overwrite existing settings.
    pub(crate) fn merge_with_opt(&mut self, opt: Opt) {
        if let Some(report) = opt.option {
            self.report = Some(report);
        }
        if opt.show_rejected {
            self.show_rejected = true;
        }
        self.reader.merge_with_opt(opt.reader);
    }
}
