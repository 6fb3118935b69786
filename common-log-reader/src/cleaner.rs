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

//! Turns raw records into records fit for analysis

use log::{debug, info, trace};
use thiserror::Error;

use crate::record::{LogRecord, RawRecord};

/// Error produced if a status code cannot be converted to an integer. This indicates a parsing
/// issue serious enough to abort processing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: status {value:?} is not an integer")]
pub struct CleanError {
    /// Line number of the offending record
    pub line: usize,
    /// The status value found
    pub value: String,
}

/// Extracts the path from a request line like `GET /index.html HTTP/1.0`. If the request line has
/// no second component, it is returned unchanged.
pub fn parse_request(request: &str) -> &str {
    request.split_whitespace().nth(1).unwrap_or(request)
}

/// Cleans raw records:
///
/// * `rfc_id` and `user_id` fields are dropped.
/// * A missing `content_size` is replaced by `0`.
/// * Records missing any other field are dropped.
/// * `status` is converted to an integer, failing the entire operation if not possible. This
///   check happens before `content_size` is validated.
/// * Records with a non-numeric `content_size` are dropped.
/// * `request` is reduced to the path.
pub fn clean(records: Vec<RawRecord>) -> Result<Vec<LogRecord>, CleanError> {
    info!("Processing the logs...");

    let total = records.len();
    let mut cleaned = Vec::with_capacity(total);
    for record in records {
        if let Some(field) = record.missing_field() {
            trace!("Dropping record on line {}: {field} missing", record.line);
            continue;
        }

        let RawRecord {
            line,
            host: Some(host),
            time: Some(time),
            request: Some(request),
            status: Some(status),
            content_size,
            ..
        } = record
        else {
            continue;
        };

        let status = status
            .parse::<i64>()
            .map_err(|_| CleanError { line, value: status })?;

        let content_size = match content_size.as_deref().map(str::parse::<u64>) {
            None => 0,
            Some(Ok(content_size)) => content_size,
            Some(Err(err)) => {
                trace!("Dropping record on line {line}: invalid content_size ({err})");
                continue;
            }
        };

        cleaned.push(LogRecord {
            host,
            time,
            request: parse_request(&request).to_owned(),
            status,
            content_size,
        });
    }

    debug!(
        "Kept {} records, dropped {} incomplete records",
        cleaned.len(),
        total - cleaned.len()
    );
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn raw(line: usize, request: &str, status: &str, content_size: Option<&str>) -> RawRecord {
        RawRecord {
            line,
            host: Some("uplherc.upl.com".into()),
            rfc_id: None,
            user_id: None,
            time: Some("[01/Aug/1995:00:00:07 -0400]".into()),
            request: Some(request.into()),
            status: Some(status.into()),
            content_size: content_size.map(Into::into),
        }
    }

    #[test]
    fn request_parsing() {
        assert_eq!(
            parse_request("GET /images/ksclogo-medium.gif HTTP/1.0"),
            "/images/ksclogo-medium.gif"
        );
        assert_eq!(parse_request("GET /a/b HTTP/1.0"), "/a/b");
        assert_eq!(parse_request("GET /a/b"), "/a/b");
        assert_eq!(
            parse_request("GET/images/ksclogo-medium.gifHTTP/1.0"),
            "GET/images/ksclogo-medium.gifHTTP/1.0"
        );
        assert_eq!(parse_request("malformed-no-space"), "malformed-no-space");
        assert_eq!(parse_request(""), "");
    }

    #[test]
    fn cleaning() {
        let cleaned = clean(vec![
            raw(1, "GET / HTTP/1.0", "200", Some("6245")),
            raw(2, "GET /images/NASA-logosmall.gif HTTP/1.0", "304", None),
            raw(3, "/bare-path", "404", Some("0")),
        ])
        .unwrap();

        assert_eq!(
            cleaned,
            vec![
                LogRecord {
                    host: "uplherc.upl.com".into(),
                    time: "[01/Aug/1995:00:00:07 -0400]".into(),
                    request: "/".into(),
                    status: 200,
                    content_size: 6245,
                },
                LogRecord {
                    host: "uplherc.upl.com".into(),
                    time: "[01/Aug/1995:00:00:07 -0400]".into(),
                    request: "/images/NASA-logosmall.gif".into(),
                    status: 304,
                    content_size: 0,
                },
                LogRecord {
                    host: "uplherc.upl.com".into(),
                    time: "[01/Aug/1995:00:00:07 -0400]".into(),
                    request: "/bare-path".into(),
                    status: 404,
                    content_size: 0,
                },
            ]
        );
    }

    #[test]
    fn dropping_incomplete() {
        let mut no_host = raw(1, "GET / HTTP/1.0", "200", None);
        no_host.host = None;
        let mut no_time = raw(2, "GET / HTTP/1.0", "200", None);
        no_time.time = None;
        let mut no_request = raw(3, "GET / HTTP/1.0", "200", None);
        no_request.request = None;
        let mut no_status = raw(4, "GET / HTTP/1.0", "invalid", None);
        no_status.status = None;
        let bad_size = raw(5, "GET / HTTP/1.0", "200", Some("lots"));
        let negative_size = raw(6, "GET / HTTP/1.0", "200", Some("-5"));
        let mut with_identity = raw(7, "GET /kept HTTP/1.0", "200", Some("1"));
        with_identity.rfc_id = Some("ident".into());
        with_identity.user_id = Some("user".into());

        let raw_records = vec![
            no_host,
            no_time,
            no_request,
            no_status,
            bad_size,
            negative_size,
            with_identity,
        ];
        let raw_count = raw_records.len();
        let cleaned = clean(raw_records).unwrap();
        assert!(cleaned.len() <= raw_count);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].request, "/kept");
        assert_eq!(cleaned[0].content_size, 1);
    }

    #[test]
    fn invalid_status() {
        let result = clean(vec![
            raw(1, "GET / HTTP/1.0", "200", None),
            raw(2, "GET / HTTP/1.0", "OK", None),
            raw(3, "GET / HTTP/1.0", "2.5", None),
        ]);
        assert_eq!(
            result,
            Err(CleanError {
                line: 2,
                value: "OK".into()
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "line 2: status \"OK\" is not an integer"
        );
    }

    #[test]
    fn out_of_range_status() {
        let cleaned = clean(vec![
            raw(1, "GET /big HTTP/1.0", "70000", None),
            raw(2, "GET /negative HTTP/1.0", "-1", Some("12")),
            raw(3, "GET /zero HTTP/1.0", "0", None),
        ])
        .unwrap();
        let statuses: Vec<_> = cleaned.iter().map(|record| record.status).collect();
        assert_eq!(statuses, vec![70000, -1, 0]);
        assert_eq!(cleaned[1].content_size, 12);
    }

    #[test]
    fn invalid_status_checked_before_size() {
        let result = clean(vec![
            raw(1, "GET / HTTP/1.0", "200", Some("lots")),
            raw(2, "GET / HTTP/1.0", "OK", Some("lots")),
        ]);
        assert_eq!(
            result,
            Err(CleanError {
                line: 2,
                value: "OK".into()
            })
        );
    }

    #[test]
    fn invalid_status_in_dropped_record() {
        let mut incomplete = raw(1, "GET / HTTP/1.0", "OK", None);
        incomplete.host = None;
        let cleaned = clean(vec![incomplete, raw(2, "GET / HTTP/1.0", "200", None)]).unwrap();
        assert_eq!(cleaned.len(), 1);
    }

    #[test]
    fn empty() {
        assert_eq!(clean(Vec::new()), Ok(Vec::new()));
    }
}
