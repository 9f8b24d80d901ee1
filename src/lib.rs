//! # sheetsum
//!
//! Structural summaries of spreadsheet workbooks.
//!
//! This library opens an XLSX workbook, finds the header row of each sheet
//! with marker substrings, and writes reports with shapes, column lists,
//! row previews, descriptive statistics and totals of numeric columns.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sheetsum::{summarize_file, to_text, SheetSelection, SummaryOptions};
//!
//! // Detailed analysis of one sheet
//! let report = summarize_file(
//!     "Resumo de Bancos, Caixa e Clientes.xlsx",
//!     &SheetSelection::named("Uba"),
//!     &SummaryOptions::ledger(),
//! )?;
//! std::fs::write("analysis_uba_direct.txt", to_text(&report))?;
//!
//! // Statistics for every sheet
//! let report = summarize_file("ledger.xlsx", &SheetSelection::All, &SummaryOptions::inspect())?;
//! print!("{}", to_text(&report));
//! # Ok::<(), sheetsum::Error>(())
//! ```
//!
//! ## Lower-Level APIs
//!
//! ```no_run
//! use sheetsum::analysis::{classify, HeaderDetector, MarkerSet};
//! use sheetsum::model::HeaderMode;
//! use sheetsum::Workbook;
//!
//! let workbook = Workbook::open("ledger.xlsx")?;
//! let sheet = workbook.sheet("Caixa Outubro")?;
//!
//! if let Some(row) = HeaderDetector::new(MarkerSet::header()).detect(sheet.rows()) {
//!     let frame = workbook.load("Caixa Outubro", HeaderMode::Row(row))?;
//!     println!("{:?}", classify(frame.columns(), &MarkerSet::cash()));
//! }
//! # Ok::<(), sheetsum::Error>(())
//! ```

pub mod analysis;
pub mod container;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;
pub mod summary;
pub mod workbook;
pub mod xlsx;

// Re-exports
pub use detect::{detect_format_from_bytes, WorkbookFormat};
pub use error::{Error, Result};
pub use model::{CellValue, Frame, HeaderMode, PreviewStyle, Report, Section, Sheet};
pub use render::{render, to_json, to_text, JsonFormat, OutputFormat};
pub use summary::{
    summarize_file, summarize_workbook, write_summary, Profile, SheetSelection, SummaryOptions,
};
pub use workbook::Workbook;
