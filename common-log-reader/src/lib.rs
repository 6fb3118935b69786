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

mod cleaner;
pub mod configuration;
mod reader;
mod record;
mod tokenizer;

pub use cleaner::{clean, parse_request, CleanError};
pub use configuration::{ReaderConf, ReaderOpt};
pub use reader::{parse_line, LogReader, ReadError, ReadOutcome, RejectedLine};
pub use record::{LogField, LogRecord, RawRecord};
pub use tokenizer::{tokenize_line, RejectReason};
