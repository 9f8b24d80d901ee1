//! Header-resolved tables.

use super::{CellValue, Sheet};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How a sheet's rows are split into column names and data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderMode {
    /// No header: columns are labelled by position (`0`, `1`, ...) and
    /// every row is data.
    Raw,
    /// The row at this zero-based index holds the column names; the rows
    /// before it are dropped.
    Row(usize),
}

impl HeaderMode {
    /// The first row holds the column names.
    pub const FIRST_ROW: HeaderMode = HeaderMode::Row(0);
}

impl Default for HeaderMode {
    fn default() -> Self {
        HeaderMode::FIRST_ROW
    }
}

/// Column names plus the data rows beneath them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Frame {
    /// Build a frame from column names and rows; rows are padded or cut to
    /// the column count.
    pub fn new(columns: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        for row in &mut rows {
            row.resize(columns.len(), CellValue::Empty);
        }
        Self { columns, rows }
    }

    /// Resolve a sheet into a frame.
    pub fn from_sheet(sheet: &Sheet, mode: HeaderMode) -> Result<Self> {
        match mode {
            HeaderMode::Raw => {
                let columns = (0..sheet.column_count()).map(|i| i.to_string()).collect();
                Ok(Self::new(columns, sheet.rows().to_vec()))
            }
            HeaderMode::Row(_) if sheet.is_empty() => Ok(Self::default()),
            HeaderMode::Row(index) => {
                let header = sheet.row(index).ok_or(Error::InvalidHeaderRow {
                    row: index,
                    rows: sheet.row_count(),
                })?;
                let columns = column_names(header);
                let rows = sheet.rows()[index + 1..].to_vec();
                Ok(Self::new(columns, rows))
            }
        }
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// (data rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// The first `n` data rows.
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

/// Turn a header row into unique column names.
///
/// Empty cells become `Unnamed: <i>`; repeated names get `.1`, `.2`, ...
fn column_names(header: &[CellValue]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(header.len());

    for (i, cell) in header.iter().enumerate() {
        let base = match cell {
            CellValue::Empty => format!("Unnamed: {}", i),
            other => other.to_string(),
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while !seen.insert(name.clone()) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        names.push(name);
    }

    names
}
