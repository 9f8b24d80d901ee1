//! Heuristics and statistics applied to loaded sheets.
//!
//! Header rows and numeric columns are found by marker substrings:
//!
//! ```
//! use sheetsum::analysis::{classify, MarkerSet};
//!
//! let columns = ["Data", "Valor Entrada", "Saldo Final", "Observações"];
//! assert_eq!(classify(&columns, &MarkerSet::cash()), vec!["Valor Entrada"]);
//! ```

mod aggregate;
mod classify;
mod header;
mod markers;
mod number;
mod stats;

pub use aggregate::{aggregate, sum_values, ColumnTotal};
pub use classify::classify;
pub use header::{detect_header, row_search_text, DetectionPolicy, HeaderCandidate, HeaderDetector};
pub use markers::{normalize, MarkerSet, CASH_MARKERS, HEADER_MARKERS, LEDGER_MARKERS};
pub use number::{format_amount, format_stat};
pub use stats::{describe, missing_values, Description, MissingCount, NumericSummary, TextSummary};
