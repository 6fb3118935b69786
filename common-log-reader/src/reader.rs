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

//! Reads log files into raw records

use log::{debug, info, trace};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::configuration::ReaderConf;
use crate::record::RawRecord;
use crate::tokenizer::{tokenize_line, RejectReason};

/// Errors produced when reading a log file
#[derive(Debug, Error)]
pub enum ReadError {
    /// The log file could not be opened
    #[error("failed opening log file {}: {source}", .path.display())]
    Open {
        /// Path of the log file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Reading from the log file failed
    #[error("failed reading log file {}: {source}", .path.display())]
    Read {
        /// Path of the log file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// A log line that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// Line number in the input, starting with 1
    pub line: usize,
    /// The line as read
    pub text: String,
    /// Why the line was rejected
    pub reason: RejectReason,
}

/// Result of reading a log: parsed records and the lines that had to be rejected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOutcome {
    /// Records in the order of the input
    pub records: Vec<RawRecord>,
    /// Lines that could not be parsed, in the order of the input
    pub rejected: Vec<RejectedLine>,
}

fn value(token: String) -> Option<String> {
    if token.is_empty() || token == "-" {
        None
    } else {
        Some(token)
    }
}

/// Parses a single log line into a raw record. The line number of the result is set to `0`.
pub fn parse_line(line: &str) -> Result<RawRecord, RejectReason> {
    let tokens = tokenize_line(line)?;
    let [host, rfc_id, user_id, time, request, status, content_size]: [String; 7] = tokens
        .try_into()
        .map_err(|tokens: Vec<String>| RejectReason::FieldCount {
            found: tokens.len(),
        })?;

    Ok(RawRecord {
        line: 0,
        host: value(host),
        rfc_id: value(rfc_id),
        user_id: value(user_id),
        time: value(time),
        request: value(request),
        status: value(status),
        content_size: value(content_size),
    })
}

/// Reader producing raw records from a log file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogReader {
    conf: ReaderConf,
}

impl From<ReaderConf> for LogReader {
    fn from(conf: ReaderConf) -> Self {
        Self { conf }
    }
}

impl LogReader {
    /// Path of the log file this reader will process
    pub fn log_file(&self) -> &Path {
        &self.conf.log_file
    }

    /// Reads the entire configured log file.
    pub fn read(&self) -> Result<ReadOutcome, ReadError> {
        let path = self.log_file();
        info!("Reading logs from {}", path.display());

        let file = File::open(path).map_err(|source| ReadError::Open {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(BufReader::new(file)).map_err(|source| ReadError::Read {
            path: path.to_owned(),
            source,
        })
    }

    /// Parses log lines from a reader until its end.
    ///
    /// Lines that aren’t valid UTF-8 are decoded lossily, blank lines are skipped.
    pub fn parse(mut reader: impl BufRead) -> Result<ReadOutcome, std::io::Error> {
        let mut outcome = ReadOutcome::default();
        let mut buf = Vec::with_capacity(256);
        let mut line = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line += 1;

            let text = String::from_utf8_lossy(&buf);
            let text = text.trim_end_matches(['\n', '\r']);
            if text.trim().is_empty() {
                continue;
            }

            match parse_line(text) {
                Ok(record) => outcome.records.push(RawRecord { line, ..record }),
                Err(reason) => {
                    trace!("Rejecting line {line}: {reason}");
                    outcome.rejected.push(RejectedLine {
                        line,
                        text: text.to_owned(),
                        reason,
                    });
                }
            }
        }

        debug!(
            "Read {} records, rejected {} lines",
            outcome.records.len(),
            outcome.rejected.len()
        );
        Ok(outcome)
    }
}
