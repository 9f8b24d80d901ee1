//! Report sections.

use super::CellValue;
use crate::analysis::{ColumnTotal, Description, MissingCount};
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// How preview rows are laid out in text output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewStyle {
    /// Bordered table with a header line
    #[default]
    Table,
    /// One `Row i: [v1, v2, ...]` line per row
    Compact,
}

/// One block of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// Heading for a sheet or for the whole report
    Title { text: String },
    /// Names of every sheet in the workbook
    SheetList { sheets: Vec<String> },
    /// A header row was detected; `row` is 1-based over non-blank rows
    HeaderFound { row: usize },
    /// No row contained any of the header markers
    HeaderMissing { markers: Vec<String> },
    /// Data rows and columns
    Shape { rows: usize, columns: usize },
    /// Column names in order
    Columns { names: Vec<String> },
    /// The first rows of a sheet
    Preview {
        caption: String,
        columns: Vec<String>,
        rows: Vec<Vec<CellValue>>,
        style: PreviewStyle,
    },
    /// Sums of the numeric columns
    Totals { totals: Vec<ColumnTotal> },
    /// Descriptive statistics
    Statistics { description: Description },
    /// Empty cells per column
    MissingValues { counts: Vec<MissingCount> },
    /// The analysis failed
    Error { message: String },
}

/// An ordered list of sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// A report made of a single error section.
    pub fn failure(err: &Error) -> Self {
        Self {
            sections: vec![Section::Error {
                message: err.to_string(),
            }],
        }
    }

    /// Append a section.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_report() {
        let report = Report::failure(&Error::SheetNotFound("Uba".into()));
        assert_eq!(
            report.sections,
            vec![Section::Error {
                message: "worksheet named 'Uba' not found".into()
            }]
        );
    }

    #[test]
    fn test_section_serialization() {
        let section = Section::Shape { rows: 3, columns: 2 };
        let json = serde_json::to_string(&section).unwrap();
        assert_eq!(json, r#"{"kind":"shape","rows":3,"columns":2}"#);

        let mut report = Report::new();
        report.push(section.clone());
        assert_eq!(report.sections, vec![section]);
    }
}
