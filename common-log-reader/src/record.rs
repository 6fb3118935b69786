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

//! Record types produced by reading and cleaning

use std::fmt;

/// A field of a Common Log Format line, in the order the fields appear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogField {
    /// Client identifier, usually an IP address or host name
    Host,
    /// RFC 1413 identity of the client, practically always `-`
    RfcId,
    /// User name from HTTP authentication, practically always `-`
    UserId,
    /// Bracketed timestamp like `[01/Aug/1995:00:00:01 -0400]`
    Time,
    /// Request line like `GET / HTTP/1.0`
    Request,
    /// Numeric response status code
    Status,
    /// Number of bytes sent as response
    ContentSize,
}

impl LogField {
    /// All fields in log line order
    pub const ALL: [LogField; 7] = [
        Self::Host,
        Self::RfcId,
        Self::UserId,
        Self::Time,
        Self::Request,
        Self::Status,
        Self::ContentSize,
    ];

    /// Field name as used in reports and messages
    pub fn name(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::RfcId => "rfc_id",
            Self::UserId => "user_id",
            Self::Time => "time",
            Self::Request => "request",
            Self::Status => "status",
            Self::ContentSize => "content_size",
        }
    }

    /// Checks whether records missing this field are unusable for analysis.
    ///
    /// `rfc_id` and `user_id` are never used, a missing `content_size` can be substituted.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::RfcId | Self::UserId | Self::ContentSize)
    }
}

impl fmt::Display for LogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A log line split up into its fields, `None` meaning that the value is missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Line number in the input, starting with 1
    pub line: usize,
    /// Client identifier
    pub host: Option<String>,
    /// RFC 1413 identity
    pub rfc_id: Option<String>,
    /// Authenticated user
    pub user_id: Option<String>,
    /// Timestamp including the brackets
    pub time: Option<String>,
    /// Full request line
    pub request: Option<String>,
    /// Status code, not validated yet
    pub status: Option<String>,
    /// Response size, not validated yet
    pub content_size: Option<String>,
}

impl RawRecord {
    /// Returns the value of a field if present.
    pub fn get(&self, field: LogField) -> Option<&str> {
        match field {
            LogField::Host => self.host.as_deref(),
            LogField::RfcId => self.rfc_id.as_deref(),
            LogField::UserId => self.user_id.as_deref(),
            LogField::Time => self.time.as_deref(),
            LogField::Request => self.request.as_deref(),
            LogField::Status => self.status.as_deref(),
            LogField::ContentSize => self.content_size.as_deref(),
        }
    }

    /// Returns the first required field (see [`LogField::is_required`]) that is missing in this
    /// record.
    pub fn missing_field(&self) -> Option<LogField> {
        LogField::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .find(|field| self.get(*field).is_none())
    }
}

/// A cleaned log record, all fields are guaranteed to be present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Client identifier
    pub host: String,
    /// Timestamp including the brackets, kept as is
    pub time: String,
    /// Requested path
    pub request: String,
    /// HTTP status code, any integer value is accepted
    pub status: i64,
    /// Number of bytes sent, `0` if unknown
    pub content_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn field_names() {
        let names: Vec<_> = LogField::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec!["host", "rfc_id", "user_id", "time", "request", "status", "content_size"]
        );
    }

    #[test]
    fn missing_fields() {
        let mut record = RawRecord {
            line: 1,
            host: Some("localhost".into()),
            time: Some("[01/Aug/1995:00:00:01 -0400]".into()),
            request: Some("GET / HTTP/1.0".into()),
            status: Some("200".into()),
            ..Default::default()
        };
        assert_eq!(record.missing_field(), None);

        record.request = None;
        assert_eq!(record.missing_field(), Some(LogField::Request));

        record.host = None;
        assert_eq!(record.missing_field(), Some(LogField::Host));
    }

    #[test]
    fn optional_fields() {
        let record = RawRecord {
            line: 1,
            host: Some("localhost".into()),
            time: Some("[01/Aug/1995:00:00:01 -0400]".into()),
            request: Some("GET / HTTP/1.0".into()),
            status: Some("200".into()),
            ..Default::default()
        };
        assert_eq!(record.get(LogField::Status), Some("200"));
        assert_eq!(record.get(LogField::ContentSize), None);
        assert_eq!(record.missing_field(), None);

        let required: Vec<_> = LogField::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .collect();
        assert_eq!(
            required,
            vec![
                LogField::Host,
                LogField::Time,
                LogField::Request,
                LogField::Status
            ]
        );
    }
}
