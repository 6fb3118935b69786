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

//! Rankings of requested paths

use common_log_reader::LogRecord;

use crate::ranking::{top_n, Ranked};
use crate::status::unsuccessful_requests;

/// Number of entries in request rankings
pub const TOP_REQUESTS: usize = 10;

/// Returns the ten most requested paths and their request counts.
pub fn top10_requests(records: &[LogRecord]) -> Vec<Ranked> {
    top_n(records, |record| record.request.as_str(), TOP_REQUESTS)
}

/// Returns the ten paths with the most unsuccessful requests and their counts.
pub fn top10_unsuccess_requests(records: &[LogRecord]) -> Vec<Ranked> {
    top_n(
        unsuccessful_requests(records),
        |record| record.request.as_str(),
        TOP_REQUESTS,
    )
}
