//! Cell values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value held by a single worksheet cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    /// No value
    #[default]
    Empty,
    /// Text, from the shared string table or an inline string
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Date or date-time, as ISO 8601
    DateTime(String),
    /// Error literal such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Create a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Check if this cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Numeric value of a number cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Coerce the cell to a number.
    ///
    /// Numbers pass through; text is trimmed and parsed as a plain decimal or
    /// exponent literal. Everything else, and any non-finite result, is `None`.
    pub fn coerce_number(&self) -> Option<f64> {
        let value = match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) | CellValue::DateTime(s) | CellValue::Error(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(true) => f.write_str("TRUE"),
            CellValue::Bool(false) => f.write_str("FALSE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(10.0).to_string(), "10");
        assert_eq!(CellValue::Number(10.5).to_string(), "10.5");
        assert_eq!(CellValue::Number(-0.25).to_string(), "-0.25");
        assert_eq!(CellValue::Bool(true).to_string(), "TRUE");
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::text("Saldo").to_string(), "Saldo");
        assert_eq!(CellValue::DateTime("2024-10-01".into()).to_string(), "2024-10-01");
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(CellValue::Number(3.5).coerce_number(), Some(3.5));
        assert_eq!(CellValue::text(" 20 ").coerce_number(), Some(20.0));
        assert_eq!(CellValue::text("1e3").coerce_number(), Some(1000.0));
        assert_eq!(CellValue::text("-4.5").coerce_number(), Some(-4.5));
        assert_eq!(CellValue::text("abc").coerce_number(), None);
        assert_eq!(CellValue::text("1,000").coerce_number(), None);
        assert_eq!(CellValue::text("inf").coerce_number(), None);
        assert_eq!(CellValue::text("NaN").coerce_number(), None);
        assert_eq!(CellValue::text("").coerce_number(), None);
        assert_eq!(CellValue::Bool(true).coerce_number(), None);
        assert_eq!(CellValue::DateTime("2024-01-01".into()).coerce_number(), None);
        assert_eq!(CellValue::Error("#N/A".into()).coerce_number(), None);
        assert_eq!(CellValue::Empty.coerce_number(), None);
    }
}
