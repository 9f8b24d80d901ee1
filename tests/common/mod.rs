//! In-memory XLSX fixtures for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// A fixture cell.
#[derive(Debug, Clone)]
pub enum Cell {
    /// Shared string
    S(String),
    /// Number
    N(f64),
    /// Date serial number with a date number format
    D(f64),
    /// Boolean
    B(bool),
    /// Not written at all
    Blank,
}

pub fn s(text: &str) -> Cell {
    Cell::S(text.to_string())
}

pub fn n(value: f64) -> Cell {
    Cell::N(value)
}

/// Builds a minimal but complete XLSX package.
#[derive(Debug, Default)]
pub struct XlsxBuilder {
    sheets: Vec<(String, Vec<Vec<Cell>>)>,
}

impl XlsxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet; row `i` of `rows` becomes spreadsheet row `i + 1`.
    pub fn sheet(mut self, name: &str, rows: Vec<Vec<Cell>>) -> Self {
        self.sheets.push((name.to_string(), rows));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut shared: Vec<String> = Vec::new();
        let worksheets: Vec<String> = self
            .sheets
            .iter()
            .map(|(_, rows)| sheet_xml(rows, &mut shared))
            .collect();

        let mut buffer = Vec::new();
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let mut overrides = String::new();
        for i in 1..=self.sheets.len() {
            overrides.push_str(&format!(
                r#"<Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i
            ));
        }
        write_part(
            &mut zip,
            options,
            "[Content_Types].xml",
            &format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
  <Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/>
  <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
  {}
</Types>"#,
                overrides
            ),
        );

        write_part(
            &mut zip,
            options,
            "_rels/.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#,
        );

        let mut sheet_entries = String::new();
        let mut sheet_rels = String::new();
        for (i, (name, _)) in self.sheets.iter().enumerate() {
            sheet_entries.push_str(&format!(
                r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(name),
                i + 1,
                i + 1
            ));
            sheet_rels.push_str(&format!(
                r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        write_part(
            &mut zip,
            options,
            "xl/workbook.xml",
            &format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>{}</sheets>
</workbook>"#,
                sheet_entries
            ),
        );

        write_part(
            &mut zip,
            options,
            "xl/_rels/workbook.xml.rels",
            &format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{}</Relationships>"#,
                sheet_rels
            ),
        );

        // Style 1 is dd/mm/yyyy
        write_part(
            &mut zip,
            options,
            "xl/styles.xml",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <numFmts count="1"><numFmt numFmtId="164" formatCode="dd/mm/yyyy"/></numFmts>
  <cellXfs count="2"><xf numFmtId="0"/><xf numFmtId="164" applyNumberFormat="1"/></cellXfs>
</styleSheet>"#,
        );

        let items: String = shared
            .iter()
            .map(|text| format!(r#"<si><t xml:space="preserve">{}</t></si>"#, escape(text)))
            .collect();
        write_part(
            &mut zip,
            options,
            "xl/sharedStrings.xml",
            &format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{}" uniqueCount="{}">{}</sst>"#,
                shared.len(),
                shared.len(),
                items
            ),
        );

        for (i, xml) in worksheets.iter().enumerate() {
            write_part(
                &mut zip,
                options,
                &format!("xl/worksheets/sheet{}.xml", i + 1),
                xml,
            );
        }

        zip.finish().unwrap();
        buffer
    }

    /// Write the workbook into `dir` and return its path.
    pub fn write_to(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }
}

fn write_part(
    zip: &mut ZipWriter<Cursor<&mut Vec<u8>>>,
    options: SimpleFileOptions,
    name: &str,
    content: &str,
) {
    zip.start_file(name, options).unwrap();
    zip.write_all(content.as_bytes()).unwrap();
}

fn sheet_xml(rows: &[Vec<Cell>], shared: &mut Vec<String>) -> String {
    let mut data = String::new();
    for (r, row) in rows.iter().enumerate() {
        if row.iter().all(|c| matches!(c, Cell::Blank)) {
            continue;
        }
        data.push_str(&format!(r#"<row r="{}">"#, r + 1));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", column_letters(c), r + 1);
            match cell {
                Cell::S(text) => {
                    let index = match shared.iter().position(|s| s == text) {
                        Some(i) => i,
                        None => {
                            shared.push(text.clone());
                            shared.len() - 1
                        }
                    };
                    data.push_str(&format!(r#"<c r="{}" t="s"><v>{}</v></c>"#, reference, index));
                }
                Cell::N(value) => {
                    data.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, reference, value));
                }
                Cell::D(serial) => {
                    data.push_str(&format!(r#"<c r="{}" s="1"><v>{}</v></c>"#, reference, serial));
                }
                Cell::B(value) => {
                    data.push_str(&format!(
                        r#"<c r="{}" t="b"><v>{}</v></c>"#,
                        reference,
                        u8::from(*value)
                    ));
                }
                Cell::Blank => {}
            }
        }
        data.push_str("</row>");
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{}</sheetData></worksheet>"#,
        data
    )
}

fn column_letters(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// The cash book sheet used across tests: a title, a blank row, a subtitle,
/// the header on spreadsheet row 4 and five data rows. With the blank row
/// dropped the header is the third row.
pub fn caixa_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![s("Entradas e Saidas Caixa")],
        vec![Cell::Blank],
        vec![s("Outubro 2024")],
        vec![s("Data"), s("Histórico"), s("Entrada"), s("Saida"), s("Observações")],
        vec![Cell::D(45566.0), s("Venda balcão"), n(10.0), Cell::Blank, s("ok")],
        vec![Cell::D(45567.0), s("Estorno"), s("abc"), n(2.5)],
        vec![Cell::D(45568.0), s("Venda"), n(20.0), Cell::Blank],
        vec![Cell::D(45569.0), s("Ajuste"), Cell::Blank, n(1000.0)],
        vec![Cell::D(45570.0), s("Venda"), n(5.0), Cell::Blank, Cell::B(true)],
    ]
}

/// A bank ledger sheet whose first row is a decorative balance line.
pub fn uba_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![s("Saldo anterior"), n(1500.0)],
        vec![s("Data"), s("Descrição"), s("Credito"), s("Debito"), s("Saldo")],
        vec![s("01/10"), s("PIX"), n(200.0), Cell::Blank, n(1700.0)],
        vec![s("02/10"), s("Tarifa"), Cell::Blank, n(12.5), n(1687.5)],
    ]
}

/// A client list with no header markers at all.
pub fn clientes_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![s("Cliente"), s("Telefone")],
        vec![s("Ana"), s("9999-0000")],
        vec![s("Bruno"), Cell::Blank],
    ]
}

/// The three-sheet workbook used across tests.
pub fn resumo_workbook() -> XlsxBuilder {
    XlsxBuilder::new()
        .sheet("Caixa Outubro", caixa_rows())
        .sheet("Uba", uba_rows())
        .sheet("Clientes", clientes_rows())
}
