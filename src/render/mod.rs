//! Output rendering for reports.
//!
//! A [`Report`] renders to plain text or to JSON of the same section list.
//!
//! # Example
//!
//! ```
//! use sheetsum::model::{Report, Section};
//! use sheetsum::render::{render, OutputFormat};
//!
//! let mut report = Report::new();
//! report.push(Section::Shape { rows: 3, columns: 2 });
//!
//! assert_eq!(render(&report, OutputFormat::Text)?, "Shape: (3, 2)\n");
//! # Ok::<(), sheetsum::Error>(())
//! ```

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::to_text;

use crate::error::Result;
use crate::model::Report;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON of the section list
    Json(JsonFormat),
}

/// Render a report in the given format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(to_text(report)),
        OutputFormat::Json(json) => to_json(report, json),
    }
}
