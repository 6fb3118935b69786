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

//! Structures handling command line options and YAML deserialization for the log reader

use clap::Args;
use serde::Deserialize;
use std::path::PathBuf;

/// Log file read if nothing else is configured
pub const DEFAULT_LOG_FILE: &str = "access_log_Aug95";

/// Command line options of the log reader
#[derive(Debug, Default, Args)]
pub struct ReaderOpt {
    /// Access log file to analyze
    #[arg(short = 'f', long)]
    pub log_file: Option<PathBuf>,
}

/// Configuration settings of the log reader
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderConf {
    /// Access log file path
    pub log_file: PathBuf,
}

impl Default for ReaderConf {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl ReaderConf {
    /// Merges the command line options into the current configuration. Any command line options
    /// present overwrite existing settings.
    pub fn merge_with_opt(&mut self, opt: ReaderOpt) {
        if let Some(log_file) = opt.log_file {
            self.log_file = log_file;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn defaults() {
        let conf: ReaderConf = serde_yaml::from_str("{}").unwrap();
        assert_eq!(conf, ReaderConf::default());
        assert_eq!(conf.log_file, PathBuf::from("access_log_Aug95"));
    }

    #[test]
    fn merging() {
        let mut conf: ReaderConf = serde_yaml::from_str("log_file: /var/log/access.log").unwrap();
        assert_eq!(conf.log_file, PathBuf::from("/var/log/access.log"));

        conf.merge_with_opt(ReaderOpt::default());
        assert_eq!(conf.log_file, PathBuf::from("/var/log/access.log"));

        conf.merge_with_opt(ReaderOpt {
            log_file: Some("other.log".into()),
        });
        assert_eq!(conf.log_file, PathBuf::from("other.log"));
    }
}
