//! Number formats from xl/styles.xml, used to tell dates from plain numbers.

use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;

/// Cell formats parsed from xl/styles.xml.
#[derive(Debug, Default)]
pub struct Styles {
    /// Custom number formats: numFmtId -> formatCode
    num_fmts: HashMap<u32, String>,
    /// Cell style formats: style index -> numFmtId
    cell_xfs: Vec<u32>,
}

impl Styles {
    /// Parse styles from xl/styles.xml content.
    ///
    /// Malformed content stops the scan and keeps what was read so far; a
    /// broken stylesheet only costs date detection.
    pub fn parse(xml: &str) -> Self {
        let mut styles = Self::default();
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut in_num_fmts = false;
        let mut in_cell_xfs = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                    b"numFmts" => in_num_fmts = true,
                    b"cellXfs" => in_cell_xfs = true,
                    b"numFmt" if in_num_fmts => {
                        if let Some(id) = u32_attr(e, b"numFmtId") {
                            let code = string_attr(e, b"formatCode").unwrap_or_default();
                            styles.num_fmts.insert(id, code);
                        }
                    }
                    b"xf" if in_cell_xfs => {
                        styles.cell_xfs.push(u32_attr(e, b"numFmtId").unwrap_or(0));
                    }
                    _ => {}
                },
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"numFmts" => in_num_fmts = false,
                    b"cellXfs" => in_cell_xfs = false,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    log::warn!("stylesheet parse stopped early: {}", e);
                    break;
                }
                _ => {}
            }
            buf.clear();
        }

        styles
    }

    /// Check if the cell style at `style_index` formats numbers as dates.
    pub fn is_date_style(&self, style_index: usize) -> bool {
        self.cell_xfs
            .get(style_index)
            .is_some_and(|&id| self.is_date_format(id))
    }

    /// Check if a numFmtId represents a date or time format.
    pub fn is_date_format(&self, num_fmt_id: u32) -> bool {
        // Built-in ids: 14-22 dates, 45-47 times
        if (14..=22).contains(&num_fmt_id) || (45..=47).contains(&num_fmt_id) {
            return true;
        }

        self.num_fmts
            .get(&num_fmt_id)
            .is_some_and(|code| is_date_format_code(code))
    }
}

fn string_attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

fn u32_attr(e: &BytesStart<'_>, key: &[u8]) -> Option<u32> {
    string_attr(e, key)?.parse().ok()
}

/// Check if a custom format code renders a date.
///
/// Only the d, m and y tokens outside `[...]` sections and quoted literals
/// count. A lone `m` next to `h` or `s` is minutes, not months.
fn is_date_format_code(format_code: &str) -> bool {
    let mut in_bracket = false;
    let mut in_quote = false;
    let mut tokens = String::new();

    for c in format_code.chars() {
        match c {
            '"' => in_quote = !in_quote,
            '[' if !in_quote => in_bracket = true,
            ']' if !in_quote => in_bracket = false,
            _ if in_bracket || in_quote => {}
            _ => tokens.push(c.to_ascii_lowercase()),
        }
    }

    if tokens.contains('d') || tokens.contains('y') {
        return true;
    }
    tokens.contains('m') && !tokens.contains('h') && !tokens.contains('s')
}

/// Convert an Excel serial number (1900 date system) to ISO 8601.
///
/// Serial 1 is 1900-01-01. Serial 60 is the non-existent 1900-02-29 that
/// Excel keeps for Lotus 1-2-3 compatibility, so later serials shift by one.
pub fn serial_to_iso(serial: f64) -> Option<String> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }

    let whole = serial.floor() as i64;
    // Days from 1970-01-01 to 1899-12-31 is -25568
    let days = (if whole > 60 { whole - 1 } else { whole }) - 25568;
    let (year, month, day) = civil_from_days(days);

    let seconds = ((serial - serial.floor()) * 86_400.0).round() as u32;
    if seconds == 0 || seconds >= 86_400 {
        Some(format!("{:04}-{:02}-{:02}", year, month, day))
    } else {
        Some(format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            year,
            month,
            day,
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        ))
    }
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
