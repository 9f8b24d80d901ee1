//! Descriptive statistics and missing value counts.

use crate::model::{CellValue, Frame};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Summary of a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; absent below two values.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

/// Summary of a text column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSummary {
    pub column: String,
    pub count: usize,
    pub unique: usize,
    /// Most frequent value, first seen on ties.
    pub top: Option<String>,
    pub freq: usize,
}

/// Descriptive statistics of a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "columns", rename_all = "snake_case")]
pub enum Description {
    /// One entry per numeric column
    Numeric(Vec<NumericSummary>),
    /// One entry per column, used when no column is numeric
    Text(Vec<TextSummary>),
    /// The frame has no columns
    Empty,
}

/// Empty cells in one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
}

/// Describe every numeric column of `frame`, or every column as text when
/// none is numeric.
///
/// A column is numeric when all of its non-empty cells are numbers and it
/// has at least one.
pub fn describe(frame: &Frame) -> Description {
    if frame.columns().is_empty() {
        return Description::Empty;
    }

    let numeric: Vec<NumericSummary> = frame
        .columns()
        .iter()
        .enumerate()
        .filter_map(|(i, name)| {
            numeric_values(frame, i).map(|values| summarize_numbers(name, values))
        })
        .collect();

    if !numeric.is_empty() {
        return Description::Numeric(numeric);
    }

    Description::Text(
        frame
            .columns()
            .iter()
            .enumerate()
            .map(|(i, name)| summarize_text(name, frame.column_values(i)))
            .collect(),
    )
}

/// Count empty cells per column, in column order.
pub fn missing_values(frame: &Frame) -> Vec<MissingCount> {
    frame
        .columns()
        .iter()
        .enumerate()
        .map(|(i, name)| MissingCount {
            column: name.clone(),
            missing: frame.column_values(i).filter(|v| v.is_empty()).count(),
        })
        .collect()
}

/// The numbers of a column, or `None` if it is not numeric.
fn numeric_values(frame: &Frame, index: usize) -> Option<Vec<f64>> {
    let mut values = Vec::new();
    for cell in frame.column_values(index).filter(|c| !c.is_empty()) {
        values.push(cell.as_number()?);
    }
    (!values.is_empty()).then_some(values)
}

fn summarize_numbers(column: &str, mut values: Vec<f64>) -> NumericSummary {
    values.sort_by(f64::total_cmp);
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = (count >= 2).then(|| {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        var.sqrt()
    });

    NumericSummary {
        column: column.to_string(),
        count,
        mean,
        std,
        min: values[0],
        q25: quantile(&values, 0.25),
        q50: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: values[count - 1],
    }
}

/// Linear interpolation between closest ranks of sorted, non-empty `sorted`.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

fn summarize_text<'a>(column: &str, values: impl Iterator<Item = &'a CellValue>) -> TextSummary {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    let mut count = 0;

    for value in values.filter(|v| !v.is_empty()) {
        count += 1;
        let key = value.to_string();
        let entry = counts.entry(key.clone()).or_insert(0);
        if *entry == 0 {
            order.push(key);
        }
        *entry += 1;
    }

    let mut top: Option<(&String, usize)> = None;
    for key in &order {
        let freq = counts[key];
        if top.is_none_or(|(_, best)| freq > best) {
            top = Some((key, freq));
        }
    }

    TextSummary {
        column: column.to_string(),
        count,
        unique: order.len(),
        top: top.map(|(k, _)| k.clone()),
        freq: top.map_or(0, |(_, f)| f),
    }
}
