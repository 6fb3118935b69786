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

//! Counting and ranking of record keys

use common_log_reader::LogRecord;
use log::debug;
use std::collections::HashMap;

/// A key with the number of records it occurs in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ranked {
    /// Request path or host name
    pub key: String,
    /// Number of records
    pub count: usize,
}

impl Ranked {
    /// Creates a new entry.
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Groups records by the key returned by `key`, counts them and returns the `n` most frequent
/// keys.
///
/// The result is sorted by count in descending order, keys with identical counts are sorted in
/// ascending byte order.
pub fn top_n<'a, I, F>(records: I, key: F, n: usize) -> Vec<Ranked>
where
    I: IntoIterator<Item = &'a LogRecord>,
    F: Fn(&'a LogRecord) -> &'a str,
{
    let mut counts = HashMap::<&str, usize>::new();
    let mut total = 0usize;
    for record in records {
        *counts.entry(key(record)).or_default() += 1;
        total += 1;
    }
    debug!("Ranking {total} records with {} distinct keys", counts.len());

    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_unstable_by(|(key_a, count_a), (key_b, count_b)| {
        count_b.cmp(count_a).then_with(|| key_a.cmp(key_b))
    });
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|(key, count)| Ranked::new(key, count))
        .collect()
}
