//! Error types for the sheetsum library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sheetsum operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or summarizing a workbook.
#[derive(Error, Debug)]
pub enum Error {
    /// The workbook path does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The requested sheet is not part of the workbook.
    #[error("worksheet named '{0}' not found")]
    SheetNotFound(String),

    /// A workbook part could be read but its content is not usable.
    #[error("parse failure: {0}")]
    ParseFailure(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a recognizable spreadsheet container.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The file format is recognized but is not a spreadsheet.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required workbook part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// A header row index that lies outside the sheet.
    #[error("header row {row} is outside the sheet ({rows} rows)")]
    InvalidHeaderRow {
        /// Requested zero-based row index
        row: usize,
        /// Number of rows in the sheet
        rows: usize,
    },
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseFailure(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(err.to_string(), "Unknown file format");

        let err = Error::SheetNotFound("Caixa Outubro".to_string());
        assert_eq!(err.to_string(), "worksheet named 'Caixa Outubro' not found");

        let err = Error::FileNotFound(PathBuf::from("missing.xlsx"));
        assert_eq!(err.to_string(), "file not found: missing.xlsx");

        let err = Error::InvalidHeaderRow { row: 12, rows: 4 };
        assert_eq!(err.to_string(), "header row 12 is outside the sheet (4 rows)");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
