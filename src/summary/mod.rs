//! Workbook summaries.
//!
//! A summary walks the selected sheets and collects report sections
//! according to a [`Profile`]:
//!
//! ```no_run
//! use sheetsum::summary::{summarize_file, SheetSelection, SummaryOptions};
//! use sheetsum::render::to_text;
//!
//! let report = summarize_file(
//!     "Resumo de Bancos, Caixa e Clientes.xlsx",
//!     &SheetSelection::named("Caixa Outubro"),
//!     &SummaryOptions::cash(),
//! )?;
//! print!("{}", to_text(&report));
//! # Ok::<(), sheetsum::Error>(())
//! ```

mod options;
mod summarizer;

pub use options::{Profile, SummaryOptions};
pub use summarizer::{summarize_file, summarize_workbook, write_summary, SheetSelection};
