//! XLSX (Excel) workbook reading.
//!
//! Reads the parts of an Office Open XML spreadsheet that matter for
//! summaries: the sheet index, shared strings, number formats (to recognize
//! dates) and the cell grid of each worksheet.
//!
//! # Example
//!
//! ```no_run
//! use sheetsum::xlsx::XlsxReader;
//!
//! let data = std::fs::read("ledger.xlsx")?;
//! let reader = XlsxReader::from_bytes(data)?;
//!
//! for name in reader.sheet_names() {
//!     let sheet = reader.read_sheet(name)?;
//!     println!("{}: {} rows", name, sheet.row_count());
//! }
//! # Ok::<(), sheetsum::Error>(())
//! ```

mod parser;
mod shared_strings;
mod styles;

pub use parser::{parse_cell_ref, XlsxReader};
pub use styles::serial_to_iso;
