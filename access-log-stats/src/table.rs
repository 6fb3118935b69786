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

//! Plain text tables

use std::fmt;

/// A table rendered with right-aligned columns, similar to how data frames are usually printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Table {
    columns: Vec<&'static str>,
    rows: Vec<Vec<String>>,
    index: bool,
}

impl Table {
    /// Creates an empty table with a row index column.
    pub(crate) fn new(columns: Vec<&'static str>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            index: true,
        }
    }

    /// Creates an empty table without a row index column.
    pub(crate) fn without_index(columns: Vec<&'static str>) -> Self {
        Self {
            index: false,
            ..Self::new(columns)
        }
    }

    /// Adds a row, missing cells are left empty.
    pub(crate) fn push(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain([column.chars().count()])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "Empty table")?;
            return writeln!(f, "Columns: [{}]", self.columns.join(", "));
        }

        let index_width = if self.index {
            (self.rows.len() - 1).to_string().len()
        } else {
            0
        };
        let widths = self.widths();

        let write_row = |f: &mut fmt::Formatter<'_>, index: &str, cells: &[&str]| {
            let mut line = String::new();
            if self.index {
                line.push_str(&format!("{index:<index_width$}"));
            }
            for (cell, width) in cells.iter().zip(widths.iter().copied()) {
                if !line.is_empty() {
                    line.push_str("  ");
                }
                line.push_str(&format!("{cell:>width$}"));
            }
            writeln!(f, "{}", line.trim_end())
        };

        write_row(f, "", self.columns.as_slice())?;
        for (i, row) in self.rows.iter().enumerate() {
            let cells: Vec<_> = row.iter().map(String::as_str).collect();
            write_row(f, &i.to_string(), &cells)?;
        }
        Ok(())
    }
}
