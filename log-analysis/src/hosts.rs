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

//! Rankings of requesting hosts

use common_log_reader::LogRecord;

use crate::ranking::{top_n, Ranked};

/// Number of entries in the host ranking
pub const TOP_HOSTS: usize = 10;

/// Number of requests listed per top host
pub const TOP_HOST_REQUESTS: usize = 5;

/// The most requested paths of a single host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRequests {
    /// Host name or address
    pub host: String,
    /// Total number of requests by this host
    pub count: usize,
    /// Most requested paths of this host with their counts
    pub requests: Vec<Ranked>,
}

/// Returns the ten hosts making the most requests, with their request counts.
pub fn top10_hosts(records: &[LogRecord]) -> Vec<Ranked> {
    top_n(records, |record| record.host.as_str(), TOP_HOSTS)
}

/// For each of the hosts returned by [`top10_hosts`], returns the five paths this host requested
/// most often. The result is in the order of the host ranking.
pub fn top5_reqs_of_top_hosts(records: &[LogRecord]) -> Vec<HostRequests> {
    top10_hosts(records)
        .into_iter()
        .map(|Ranked { key: host, count }| {
            let requests = top_n(
                records.iter().filter(|record| record.host == host),
                |record| record.request.as_str(),
                TOP_HOST_REQUESTS,
            );
            HostRequests {
                host,
                count,
                requests,
            }
        })
        .collect()
}
