//! Plain text renderer implementation.

use crate::analysis::{format_amount, format_stat, Description, NumericSummary, TextSummary};
use crate::model::{CellValue, PreviewStyle, Report, Section};
use unicode_width::UnicodeWidthStr;

/// Convert a Report to plain text. Every line, including the last, ends
/// with a newline.
pub fn to_text(report: &Report) -> String {
    let mut output = String::new();

    for section in &report.sections {
        let spaced = matches!(
            section,
            Section::Title { .. }
                | Section::Preview { .. }
                | Section::Totals { .. }
                | Section::Statistics { .. }
                | Section::MissingValues { .. }
        );
        if spaced && !output.is_empty() {
            output.push('\n');
        }
        render_section(section, &mut output);
    }

    output
}

fn render_section(section: &Section, output: &mut String) {
    match section {
        Section::Title { text } => {
            output.push_str(&format!("--- {} ---\n", text));
        }
        Section::SheetList { sheets } => {
            output.push_str(&format!("Sheets: {}\n", quoted_list(sheets)));
        }
        Section::HeaderFound { row } => {
            output.push_str(&format!("Found potential header at row {}\n", row));
        }
        Section::HeaderMissing { markers } => {
            output.push_str(&format!(
                "Could not automatically detect a standard header row (markers: {}).\n",
                markers.join(", ")
            ));
        }
        Section::Shape { rows, columns } => {
            output.push_str(&format!("Shape: ({}, {})\n", rows, columns));
        }
        Section::Columns { names } => {
            output.push_str(&format!("Columns: {}\n", quoted_list(names)));
        }
        Section::Preview {
            caption,
            columns,
            rows,
            style,
        } => {
            output.push_str(caption);
            output.push_str(":\n");
            match style {
                PreviewStyle::Table => {
                    let mut header = vec![String::new()];
                    header.extend(columns.iter().cloned());
                    let body: Vec<Vec<String>> = rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| {
                            std::iter::once(i.to_string())
                                .chain(row.iter().map(CellValue::to_string))
                                .collect()
                        })
                        .collect();
                    output.push_str(&render_grid(&header, &body));
                }
                PreviewStyle::Compact => {
                    for (i, row) in rows.iter().enumerate() {
                        let values: Vec<String> = row.iter().map(compact_value).collect();
                        output.push_str(&format!("Row {}: [{}]\n", i, values.join(", ")));
                    }
                }
            }
        }
        Section::Totals { totals } => {
            let names: Vec<String> = totals.iter().map(|t| t.column.clone()).collect();
            output.push_str(&format!("Numeric Summaries for {}:\n", quoted_list(&names)));
            for total in totals {
                output.push_str(&format!(
                    "Total {}: {}\n",
                    total.column,
                    format_amount(total.total)
                ));
            }
        }
        Section::Statistics { description } => {
            output.push_str("Basic Statistics:\n");
            match description {
                Description::Numeric(summaries) => {
                    output.push_str(&numeric_table(summaries));
                }
                Description::Text(summaries) => {
                    output.push_str(&text_table(summaries));
                }
                Description::Empty => output.push_str("(no columns)\n"),
            }
        }
        Section::MissingValues { counts } => {
            output.push_str("Missing Values:\n");
            let width = counts
                .iter()
                .map(|c| c.column.width())
                .max()
                .unwrap_or(0);
            for count in counts {
                output.push_str(&pad(&count.column, width));
                output.push_str(&format!("  {}\n", count.missing));
            }
        }
        Section::Error { message } => {
            output.push_str(&format!("Error: {}\n", message));
        }
    }
}

/// `['a', 'b']`
fn quoted_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("'{}'", s)).collect();
    format!("[{}]", quoted.join(", "))
}

fn compact_value(value: &CellValue) -> String {
    match value {
        CellValue::Empty => "nan".to_string(),
        CellValue::Text(s) | CellValue::DateTime(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}

fn numeric_table(summaries: &[NumericSummary]) -> String {
    let header = stat_header(summaries.iter().map(|s| s.column.as_str()));
    let body = vec![
        stat_row("count", summaries, |s| s.count.to_string()),
        stat_row("mean", summaries, |s| format_stat(s.mean)),
        stat_row("std", summaries, |s| {
            s.std.map(format_stat).unwrap_or_else(|| "NaN".into())
        }),
        stat_row("min", summaries, |s| format_stat(s.min)),
        stat_row("25%", summaries, |s| format_stat(s.q25)),
        stat_row("50%", summaries, |s| format_stat(s.q50)),
        stat_row("75%", summaries, |s| format_stat(s.q75)),
        stat_row("max", summaries, |s| format_stat(s.max)),
    ];

    render_grid(&header, &body)
}

fn text_table(summaries: &[TextSummary]) -> String {
    let header = stat_header(summaries.iter().map(|s| s.column.as_str()));
    let body = vec![
        stat_row("count", summaries, |s| s.count.to_string()),
        stat_row("unique", summaries, |s| s.unique.to_string()),
        stat_row("top", summaries, |s| {
            s.top.clone().unwrap_or_else(|| "NaN".into())
        }),
        stat_row("freq", summaries, |s| s.freq.to_string()),
    ];

    render_grid(&header, &body)
}

/// Statistics tables have one column per described column plus a label column.
fn stat_header<'a>(columns: impl Iterator<Item = &'a str>) -> Vec<String> {
    std::iter::once(String::new())
        .chain(columns.map(str::to_string))
        .collect()
}

fn stat_row<T>(label: &str, items: &[T], value: impl Fn(&T) -> String) -> Vec<String> {
    std::iter::once(label.to_string())
        .chain(items.iter().map(value))
        .collect()
}

fn clean(text: &str) -> String {
    text.replace('\n', " ")
}

/// Pad `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Render a bordered ASCII table with a `=` separator under the header.
fn render_grid(header: &[String], rows: &[Vec<String>]) -> String {
    let col_count = header.len();
    if col_count == 0 {
        return String::new();
    }

    let mut widths: Vec<usize> = header.iter().map(|h| clean(h).width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(clean(cell).width());
        }
    }

    // Minimum width of 3 for readability
    for w in &mut widths {
        *w = (*w).max(3);
    }

    let border = |fill: &str| -> String {
        let mut line = String::from("+");
        for w in &widths {
            line.push_str(&fill.repeat(*w + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let render_row = |cells: &[String]| -> String {
        let mut line = String::from("|");
        for (i, w) in widths.iter().enumerate() {
            let text = cells.get(i).map(|c| clean(c)).unwrap_or_default();
            line.push_str(&format!(" {} |", pad(&text, *w)));
        }
        line.push('\n');
        line
    };

    let mut output = border("-");
    output.push_str(&render_row(header));
    output.push_str(&border("="));
    for row in rows {
        output.push_str(&render_row(row));
    }
    output.push_str(&border("-"));

    output
}
