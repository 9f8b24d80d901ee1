//! XLSX workbook reader.

use crate::container::OoxmlContainer;
use crate::error::{Error, Result};
use crate::model::{CellValue, Sheet};
use quick_xml::events::{BytesStart, Event};

use super::shared_strings::SharedStrings;
use super::styles::{serial_to_iso, Styles};

const WORKBOOK_PART: &str = "xl/workbook.xml";

/// Sheet entry from workbook.xml.
#[derive(Debug, Clone)]
struct SheetEntry {
    name: String,
    /// Resolved part path, e.g. `xl/worksheets/sheet1.xml`
    part: Option<String>,
}

/// Reader for XLSX (Excel) workbooks.
///
/// Opening reads the workbook index, shared strings and styles; sheet data
/// is parsed only when a sheet is requested.
pub struct XlsxReader {
    container: OoxmlContainer,
    shared_strings: SharedStrings,
    styles: Styles,
    sheets: Vec<SheetEntry>,
}

impl XlsxReader {
    /// Create a reader from the bytes of an XLSX file.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OoxmlContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    /// Create a reader from an opened container.
    pub fn from_container(container: OoxmlContainer) -> Result<Self> {
        let shared_strings = match container.read_optional_xml("xl/sharedStrings.xml")? {
            Some(xml) => SharedStrings::parse(&xml)?,
            None => SharedStrings::default(),
        };

        let styles = match container.read_optional_xml("xl/styles.xml")? {
            Some(xml) => Styles::parse(&xml),
            None => Styles::default(),
        };

        let workbook_xml = container.read_xml(WORKBOOK_PART)?;
        let relationships = container.read_relationships(WORKBOOK_PART)?;
        let sheets = parse_workbook(&workbook_xml)?
            .into_iter()
            .map(|(name, rel_id)| SheetEntry {
                part: relationships
                    .target(&rel_id)
                    .map(|target| OoxmlContainer::resolve_path(WORKBOOK_PART, target)),
                name,
            })
            .collect::<Vec<_>>();

        log::debug!(
            "workbook lists {} sheets: {:?}",
            sheets.len(),
            sheets.iter().map(|s| s.name.as_str()).collect::<Vec<_>>()
        );

        Ok(Self {
            container,
            shared_strings,
            styles,
            sheets,
        })
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Number of sheets.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Parse one sheet by name into a raw grid.
    pub fn read_sheet(&self, name: &str) -> Result<Sheet> {
        let entry = self
            .sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;

        let part = entry.part.as_deref().ok_or_else(|| {
            Error::ParseFailure(format!("sheet '{}' has no worksheet part", name))
        })?;

        let xml = match self.container.read_xml(part) {
            Ok(xml) => xml,
            Err(Error::MissingComponent(path)) => {
                log::warn!("worksheet part {} for sheet '{}' is missing", path, name);
                return Err(Error::ParseFailure(format!(
                    "worksheet part {} for sheet '{}' is missing",
                    path, name
                )));
            }
            Err(e) => return Err(e),
        };

        let rows = self.parse_sheet_data(&xml)?;
        let sheet = Sheet::new(name, rows);
        log::debug!(
            "sheet '{}': {} rows x {} columns",
            name,
            sheet.row_count(),
            sheet.column_count()
        );
        Ok(sheet)
    }

    /// Parse `<sheetData>` into rows of cells placed by their references.
    fn parse_sheet_data(&self, xml: &str) -> Result<Vec<Vec<CellValue>>> {
        let mut reader = quick_xml::Reader::from_str(xml);

        let mut buf = Vec::new();
        let mut rows: Vec<Vec<CellValue>> = Vec::new();
        let mut next_row = 0usize;
        let mut current_row: Option<usize> = None;
        let mut next_col = 0usize;
        let mut cell: Option<PendingCell> = None;
        let mut in_value = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                    b"row" => {
                        let index = row_index(e).unwrap_or(next_row);
                        current_row = Some(index);
                        next_row = index + 1;
                        next_col = 0;
                    }
                    b"c" if current_row.is_some() => {
                        let pending = PendingCell::from_element(e, next_col);
                        next_col = pending.col + 1;
                        cell = Some(pending);
                    }
                    b"v" | b"t" if cell.is_some() => in_value = true,
                    _ => {}
                },
                Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                    b"row" => {
                        let index = row_index(e).unwrap_or(next_row);
                        next_row = index + 1;
                    }
                    b"c" if current_row.is_some() => {
                        // A styled cell without a value
                        next_col = PendingCell::from_element(e, next_col).col + 1;
                    }
                    _ => {}
                },
                Ok(Event::Text(ref e)) if in_value => {
                    let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                    if let Some(pending) = cell.as_mut() {
                        pending.raw.push_str(&text);
                    }
                }
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"v" | b"t" => in_value = false,
                    b"c" => {
                        if let (Some(pending), Some(row)) = (cell.take(), current_row) {
                            let value = self.resolve_cell_value(&pending);
                            if !value.is_empty() {
                                place(&mut rows, row, pending.col, value);
                            }
                        }
                    }
                    b"row" => current_row = None,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(rows)
    }

    /// Resolve a cell's raw text according to its type and style.
    fn resolve_cell_value(&self, cell: &PendingCell) -> CellValue {
        let raw = cell.raw.as_str();
        match cell.cell_type.as_deref() {
            Some("s") => raw
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|idx| self.shared_strings.get(idx))
                .map(CellValue::text)
                .unwrap_or_default(),
            Some("b") => CellValue::Bool(raw.trim() == "1"),
            Some("e") => CellValue::Error(raw.to_string()),
            Some("str") | Some("inlineStr") => {
                if raw.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::text(raw)
                }
            }
            _ if raw.trim().is_empty() => CellValue::Empty,
            _ => match raw.trim().parse::<f64>() {
                Ok(n) if cell.style.is_some_and(|s| self.styles.is_date_style(s)) => {
                    serial_to_iso(n).map_or(CellValue::Number(n), CellValue::DateTime)
                }
                Ok(n) => CellValue::Number(n),
                Err(_) => CellValue::text(raw),
            },
        }
    }
}

/// A `<c>` element being read.
#[derive(Debug)]
struct PendingCell {
    col: usize,
    cell_type: Option<String>,
    style: Option<usize>,
    raw: String,
}

impl PendingCell {
    fn from_element(e: &BytesStart<'_>, fallback_col: usize) -> Self {
        let mut col = fallback_col;
        let mut cell_type = None;
        let mut style = None;

        for attr in e.attributes().flatten() {
            let value = String::from_utf8_lossy(&attr.value);
            match attr.key.as_ref() {
                b"r" => {
                    if let Some((_, c)) = parse_cell_ref(&value) {
                        col = c;
                    }
                }
                b"t" => cell_type = Some(value.to_string()),
                b"s" => style = value.parse().ok(),
                _ => {}
            }
        }

        Self {
            col,
            cell_type,
            style,
            raw: String::new(),
        }
    }
}

/// Zero-based index from a `<row r="...">` attribute (which is 1-based).
fn row_index(e: &BytesStart<'_>) -> Option<usize> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"r")
        .and_then(|attr| String::from_utf8_lossy(&attr.value).parse::<usize>().ok())
        .and_then(|r| r.checked_sub(1))
}

fn place(rows: &mut Vec<Vec<CellValue>>, row: usize, col: usize, value: CellValue) {
    if rows.len() <= row {
        rows.resize_with(row + 1, Vec::new);
    }
    let cells = &mut rows[row];
    if cells.len() <= col {
        cells.resize(col + 1, CellValue::Empty);
    }
    cells[col] = value;
}

/// Parse an A1-style reference into zero-based (row, column).
pub fn parse_cell_ref(reference: &str) -> Option<(usize, usize)> {
    let reference = reference.trim().replace('$', "");
    let split = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut col = 0usize;
    for c in letters.chars() {
        col = col
            .checked_mul(26)?
            .checked_add((c.to_ascii_uppercase() as u8 - b'A') as usize + 1)?;
    }

    let row = digits.parse::<usize>().ok()?.checked_sub(1)?;
    Some((row, col - 1))
}

/// Read `<sheet name=".." r:id=".."/>` entries from workbook.xml.
fn parse_workbook(xml: &str) -> Result<Vec<(String, String)>> {
    let mut sheets = Vec::new();
    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if e.local_name().as_ref() == b"sheet" =>
            {
                let mut name = String::new();
                let mut rel_id = String::new();

                for attr in e.attributes().flatten() {
                    let key = attr.key;
                    if key.as_ref() == b"name" {
                        name = attr
                            .unescape_value()
                            .map(|v| v.into_owned())
                            .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).to_string());
                    } else if key.local_name().as_ref() == b"id" {
                        rel_id = String::from_utf8_lossy(&attr.value).to_string();
                    }
                }

                if !name.is_empty() {
                    sheets.push((name, rel_id));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(sheets)
}
