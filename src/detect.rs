//! Format detection for spreadsheet workbooks.

use crate::container::decode_xml_bytes;
use crate::error::{Error, Result};
use std::io::{Read, Seek};

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Content type for the XLSX workbook part.
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";

/// Content type for the macro-enabled XLSM workbook part.
const XLSM_CONTENT_TYPE: &str = "application/vnd.ms-excel.sheet.macroEnabled.main+xml";

/// Content types of other OOXML documents that are not spreadsheets.
const FOREIGN_CONTENT_TYPES: [(&str, &str); 2] = [
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        "Word document",
    ),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml",
        "PowerPoint presentation",
    ),
];

/// Detected workbook format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookFormat {
    /// Excel workbook (.xlsx)
    Xlsx,
    /// Macro-enabled Excel workbook (.xlsm)
    Xlsm,
}

impl WorkbookFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            WorkbookFormat::Xlsx => "xlsx",
            WorkbookFormat::Xlsm => "xlsm",
        }
    }

    /// Returns a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            WorkbookFormat::Xlsx => "Excel Workbook",
            WorkbookFormat::Xlsm => "Excel Macro-Enabled Workbook",
        }
    }
}

impl std::fmt::Display for WorkbookFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}

/// Detect the workbook format from a byte slice.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<WorkbookFormat> {
    if !is_zip_file(data) {
        return Err(Error::UnknownFormat);
    }

    detect_format_from_reader(std::io::Cursor::new(data))
}

/// Detect the workbook format from a reader over a ZIP archive.
///
/// `[Content_Types].xml` decides; archives without a recognizable workbook
/// content type fall back to looking for an `xl/` folder.
pub fn detect_format_from_reader<R: Read + Seek>(reader: R) -> Result<WorkbookFormat> {
    let mut archive = zip::ZipArchive::new(reader)?;

    let content_types = match archive.by_name("[Content_Types].xml") {
        Ok(mut file) => {
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)?;
            decode_xml_bytes(&bytes)?
        }
        Err(_) => {
            return Err(Error::MissingComponent("[Content_Types].xml".to_string()));
        }
    };

    if content_types.contains(XLSX_CONTENT_TYPE) {
        return Ok(WorkbookFormat::Xlsx);
    }
    if content_types.contains(XLSM_CONTENT_TYPE) {
        return Ok(WorkbookFormat::Xlsm);
    }
    for (content_type, name) in FOREIGN_CONTENT_TYPES {
        if content_types.contains(content_type) {
            return Err(Error::UnsupportedFormat(name.to_string()));
        }
    }

    if archive.file_names().any(|n| n.starts_with("xl/")) {
        Ok(WorkbookFormat::Xlsx)
    } else {
        Err(Error::UnknownFormat)
    }
}
