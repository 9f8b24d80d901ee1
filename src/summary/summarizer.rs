//! Report assembly.

use super::options::{Profile, SummaryOptions};
use crate::analysis::{aggregate, classify, describe, missing_values, HeaderDetector};
use crate::error::{Error, Result};
use crate::model::{Frame, HeaderMode, Report, Section, Sheet};
use crate::render::{render, to_text, OutputFormat};
use crate::workbook::Workbook;
use std::io::{self, Write};
use std::path::Path;

/// Which sheets to summarize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SheetSelection {
    /// Every sheet, in workbook order
    #[default]
    All,
    /// One sheet by exact name
    Named(String),
}

impl SheetSelection {
    /// Select one sheet by name.
    pub fn named(name: impl Into<String>) -> Self {
        SheetSelection::Named(name.into())
    }
}

/// Summarize the selected sheets of an opened workbook.
pub fn summarize_workbook(
    workbook: &Workbook,
    selection: &SheetSelection,
    options: &SummaryOptions,
) -> Result<Report> {
    let names: Vec<String> = match selection {
        SheetSelection::All => workbook.sheet_names().iter().map(|s| s.to_string()).collect(),
        SheetSelection::Named(name) => {
            if !workbook.sheet_names().contains(&name.as_str()) {
                return Err(Error::SheetNotFound(name.clone()));
            }
            vec![name.clone()]
        }
    };

    let mut report = Report::new();

    if options.profile != Profile::Detailed {
        report.push(Section::SheetList {
            sheets: workbook.sheet_names().iter().map(|s| s.to_string()).collect(),
        });
    }

    for name in &names {
        let sheet = workbook.sheet(name)?;
        match options.profile {
            Profile::Detailed => detailed(&sheet, options, &mut report)?,
            Profile::Overview | Profile::Inspect => structure(&sheet, options, &mut report)?,
        }
    }

    Ok(report)
}

/// Open a workbook file and summarize it.
pub fn summarize_file(
    path: impl AsRef<Path>,
    selection: &SheetSelection,
    options: &SummaryOptions,
) -> Result<Report> {
    let workbook = Workbook::open(path)?;
    summarize_workbook(&workbook, selection, options)
}

/// Summarize a workbook file and write the rendered report.
///
/// Analysis failures become a report holding a single error section, so
/// only failures to write to `writer` are returned.
pub fn write_summary<W: Write>(
    path: impl AsRef<Path>,
    selection: &SheetSelection,
    options: &SummaryOptions,
    format: OutputFormat,
    writer: &mut W,
) -> io::Result<()> {
    let report = summarize_file(path, selection, options).unwrap_or_else(|e| {
        log::warn!("analysis failed: {}", e);
        Report::failure(&e)
    });

    let output = render(&report, format).unwrap_or_else(|e| to_text(&Report::failure(&e)));
    writer.write_all(output.as_bytes())?;
    writer.flush()
}

/// Header detection, preview and totals of one sheet.
fn detailed(sheet: &Sheet, options: &SummaryOptions, report: &mut Report) -> Result<()> {
    report.push(Section::Title {
        text: format!("Detailed Analysis of '{}'", sheet.name),
    });

    let header_row = match options.header_row {
        Some(row) => Some(row),
        None => HeaderDetector::new(options.header_markers.clone())
            .with_policy(options.detection)
            .detect(sheet.rows()),
    };

    let Some(row) = header_row else {
        log::info!("no header row found in sheet '{}'", sheet.name);
        report.push(Section::HeaderMissing {
            markers: options.header_markers.markers().to_vec(),
        });
        if options.raw_fallback_rows > 0 {
            let raw = Frame::from_sheet(sheet, HeaderMode::Raw)?;
            report.push(Section::Preview {
                caption: format!("Raw first {} rows", options.raw_fallback_rows),
                columns: raw.columns().to_vec(),
                rows: raw.head(options.raw_fallback_rows).to_vec(),
                style: options.preview_style,
            });
        }
        return Ok(());
    };

    log::info!("header row {} in sheet '{}'", row + 1, sheet.name);
    report.push(Section::HeaderFound { row: row + 1 });

    let frame = Frame::from_sheet(sheet, HeaderMode::Row(row))?;
    push_structure(&frame, options, format!("First {} data rows", options.preview_rows), report);

    let numeric = classify(frame.columns(), &options.numeric_markers);
    if !numeric.is_empty() {
        let totals = numeric
            .iter()
            .map(|column| aggregate(&frame, column))
            .collect::<Result<Vec<_>>>()?;
        report.push(Section::Totals { totals });
    }

    Ok(())
}

/// Shape, columns and preview of one sheet, plus statistics for `Inspect`.
fn structure(sheet: &Sheet, options: &SummaryOptions, report: &mut Report) -> Result<()> {
    report.push(Section::Title {
        text: format!("Sheet: {}", sheet.name),
    });

    let mode = HeaderMode::Row(options.header_row.unwrap_or(0));
    let frame = Frame::from_sheet(sheet, mode)?;
    push_structure(&frame, options, format!("First {} rows", options.preview_rows), report);

    if options.profile == Profile::Inspect {
        report.push(Section::Statistics {
            description: describe(&frame),
        });
        report.push(Section::MissingValues {
            counts: missing_values(&frame),
        });
    }

    Ok(())
}

fn push_structure(frame: &Frame, options: &SummaryOptions, caption: String, report: &mut Report) {
    let (rows, columns) = frame.shape();
    report.push(Section::Shape { rows, columns });
    report.push(Section::Columns {
        names: frame.columns().to_vec(),
    });
    report.push(Section::Preview {
        caption,
        columns: frame.columns().to_vec(),
        rows: frame.head(options.preview_rows).to_vec(),
        style: options.preview_style,
    });
}
