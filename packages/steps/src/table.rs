//! Step data tables
//!
//! A step's tabular argument block: a header row naming the columns,
//! followed by data rows. Rows are processed in insertion order; each row
//! knows its own index so missing-column errors can point at the exact
//! offender.

use std::collections::HashMap;

use crate::error::{Result, StepError};

/// One record of a step's data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Zero-based position of this row in the table
    index: usize,
    values: HashMap<String, String>,
}

impl TableRow {
    /// Look up a column value, if present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Look up a column value the pattern requires.
    ///
    /// # Errors
    /// `StepError::MissingField` naming this row and the column.
    pub fn require(&self, column: &str) -> Result<&str> {
        self.get(column).ok_or_else(|| StepError::MissingField {
            row: self.index,
            column: column.to_string(),
        })
    }

    /// Zero-based row index within the table.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// An ordered table of step arguments.
///
/// The first raw row is the header; remaining rows supply one record
/// each. Cells are trimmed. Short rows simply lack the trailing columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepTable {
    headers: Vec<String>,
    rows: Vec<TableRow>,
}

impl StepTable {
    /// Build a table from raw rows, first row being the header.
    pub fn from_rows(raw: &[Vec<String>]) -> Self {
        let Some((header, data)) = raw.split_first() else {
            return Self::default();
        };

        let headers: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();

        let rows = data
            .iter()
            .enumerate()
            .map(|(index, cells)| {
                let values = headers
                    .iter()
                    .zip(cells.iter())
                    .map(|(h, c)| (h.clone(), c.trim().to_string()))
                    .collect();
                TableRow { index, values }
            })
            .collect();

        Self { headers, rows }
    }

    /// Column names, in declaration order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, in insertion order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
