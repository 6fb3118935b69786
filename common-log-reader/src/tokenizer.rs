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

//! Splits log lines into fields

use std::mem::take;
use thiserror::Error;

/// Reason for a log line to be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The line doesn’t consist of the expected number of fields
    #[error("expected 7 fields, found {found}")]
    FieldCount {
        /// Number of fields found
        found: usize,
    },
    /// A quoted or bracketed field isn’t closed before the end of the line
    #[error("missing closing {delimiter} character")]
    Unterminated {
        /// The closing character expected
        delimiter: char,
    },
}

/// Splits a log line into whitespace-separated tokens.
///
/// Whitespace inside double quotes or square brackets doesn’t separate tokens. Double quotes are
/// removed from the token, brackets are kept.
pub fn tokenize_line(line: &str) -> Result<Vec<String>, RejectReason> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut closing = None;

    for c in line.chars() {
        if let Some(delimiter) = closing {
            if c == delimiter {
                closing = None;
                if delimiter == ']' {
                    current.push(c);
                }
            } else {
                current.push(c);
            }
        } else if c.is_whitespace() {
            if in_token {
                tokens.push(take(&mut current));
                in_token = false;
            }
        } else {
            in_token = true;
            match c {
                '"' => closing = Some('"'),
                '[' => {
                    closing = Some(']');
                    current.push(c);
                }
                _ => current.push(c),
            }
        }
    }

    if let Some(delimiter) = closing {
        return Err(RejectReason::Unterminated { delimiter });
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn plain_tokens() {
        assert_eq!(
            tokenize_line("a bb  ccc\t d ").unwrap(),
            vec!["a", "bb", "ccc", "d"]
        );
        assert!(tokenize_line("").unwrap().is_empty());
        assert!(tokenize_line("   ").unwrap().is_empty());
    }

    #[test]
    fn common_log_line() {
        let tokens = tokenize_line(
            r#"199.72.81.55 - - [01/Jul/1995:00:00:01 -0400] "GET /history/apollo/ HTTP/1.0" 200 6245"#,
        )
        .unwrap();
        assert_eq!(
            tokens,
            vec![
                "199.72.81.55",
                "-",
                "-",
                "[01/Jul/1995:00:00:01 -0400]",
                "GET /history/apollo/ HTTP/1.0",
                "200",
                "6245",
            ]
        );
    }

    #[test]
    fn quotes_within_brackets() {
        assert_eq!(
            tokenize_line(r#"[a "b] "c [d" e"#).unwrap(),
            vec![r#"[a "b]"#, "c [d", "e"]
        );
        assert_eq!(tokenize_line(r#""" x"#).unwrap(), vec!["", "x"]);
    }

    #[test]
    fn unterminated() {
        assert_eq!(
            tokenize_line(r#"host - - [time] "GET / HTTP/1.0 200 12"#),
            Err(RejectReason::Unterminated { delimiter: '"' })
        );
        assert_eq!(
            tokenize_line("host - - [01/Jul/1995:00:00:01"),
            Err(RejectReason::Unterminated { delimiter: ']' })
        );
    }

    #[test]
    fn reasons() {
        assert_eq!(
            RejectReason::FieldCount { found: 3 }.to_string(),
            "expected 7 fields, found 3"
        );
        assert_eq!(
            RejectReason::Unterminated { delimiter: ']' }.to_string(),
            "missing closing ] character"
        );
    }
}
