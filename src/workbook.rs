//! Workbook loading.

use crate::detect::{detect_format_from_bytes, WorkbookFormat};
use crate::error::{Error, Result};
use crate::model::{Frame, HeaderMode, Sheet};
use crate::xlsx::XlsxReader;
use std::io;
use std::path::Path;

/// An opened spreadsheet workbook.
pub struct Workbook {
    format: WorkbookFormat,
    reader: XlsxReader,
}

impl Workbook {
    /// Open a workbook file.
    ///
    /// The whole file is read into memory. A path that does not exist is
    /// [`Error::FileNotFound`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        log::debug!("read {} bytes from {}", data.len(), path.display());
        Self::from_bytes(data)
    }

    /// Open a workbook from its bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let format = detect_format_from_bytes(&data)?;
        let reader = XlsxReader::from_bytes(data)?;
        Ok(Self { format, reader })
    }

    /// The detected container format.
    pub fn format(&self) -> WorkbookFormat {
        self.format
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.reader.sheet_names()
    }

    /// Load a sheet as a raw grid.
    pub fn sheet(&self, name: &str) -> Result<Sheet> {
        self.reader.read_sheet(name)
    }

    /// Load a sheet and split it into column names and data rows.
    pub fn load(&self, name: &str, mode: HeaderMode) -> Result<Frame> {
        Frame::from_sheet(&self.sheet(name)?, mode)
    }
}

impl std::fmt::Debug for Workbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbook")
            .field("format", &self.format)
            .field("sheets", &self.sheet_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file() {
        let err = Workbook::open("no/such/Resumo.xlsx").unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
        assert!(err.to_string().contains("Resumo.xlsx"));
    }

    #[test]
    fn test_from_bytes_rejects_non_zip() {
        let err = Workbook::from_bytes(b"Data;Valor\n01/10;10\n".to_vec()).unwrap_err();
        assert!(matches!(err, Error::UnknownFormat));
    }
}
