//! Data model for loaded workbooks and the reports built from them.
//!
//! A [`Sheet`] is the raw cell grid of one worksheet. A [`Frame`] is a sheet
//! split into column names and data rows. A [`Report`] is the ordered list of
//! sections rendered to text or JSON.

mod cell;
mod frame;
mod report;
mod sheet;

pub use cell::*;
pub use frame::*;
pub use report::*;
pub use sheet::*;
