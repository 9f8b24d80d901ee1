//! Totals of numeric columns.

use crate::error::{Error, Result};
use crate::model::{CellValue, Frame};
use serde::{Deserialize, Serialize};

/// Sum of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnTotal {
    /// Column name
    pub column: String,
    /// Sum of every value that coerced to a number
    pub total: f64,
    /// Cells that contributed to the sum
    pub counted: usize,
    /// Cells left out: blanks, text, errors, booleans, dates
    pub skipped: usize,
}

/// Sum a column of `frame` by name.
pub fn aggregate(frame: &Frame, column: &str) -> Result<ColumnTotal> {
    let index = frame
        .column_index(column)
        .ok_or_else(|| Error::ParseFailure(format!("column '{}' not found", column)))?;

    let (total, counted, skipped) = sum_values(frame.column_values(index));
    Ok(ColumnTotal {
        column: column.to_string(),
        total,
        counted,
        skipped,
    })
}

/// Sum the values that coerce to numbers; returns (total, counted, skipped).
pub fn sum_values<'a, I>(values: I) -> (f64, usize, usize)
where
    I: IntoIterator<Item = &'a CellValue>,
{
    let mut total = 0.0;
    let mut counted = 0;
    let mut skipped = 0;

    for value in values {
        match value.coerce_number() {
            Some(n) => {
                total += n;
                counted += 1;
            }
            None => skipped += 1,
        }
    }

    (total, counted, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::format_amount;

    fn frame() -> Frame {
        Frame::new(
            vec!["Data".into(), "Valor".into()],
            vec![
                vec![CellValue::text("01/10"), CellValue::Number(10.0)],
                vec![CellValue::text("02/10"), CellValue::text("abc")],
                vec![CellValue::text("03/10"), CellValue::text("20")],
                vec![CellValue::text("04/10"), CellValue::Empty],
                vec![CellValue::text("05/10"), CellValue::Number(5.0)],
            ],
        )
    }

    #[test]
    fn test_aggregate_mixed_column() {
        let total = aggregate(&frame(), "Valor").unwrap();
        assert_eq!(total.total, 35.0);
        assert_eq!(total.counted, 3);
        assert_eq!(total.skipped, 2);
        assert_eq!(format_amount(total.total), "35.00");
    }

    #[test]
    fn test_aggregate_excludes_non_numeric_kinds() {
        let values = [
            CellValue::Bool(true),
            CellValue::DateTime("2024-10-01".into()),
            CellValue::Error("#REF!".into()),
            CellValue::text("inf"),
            CellValue::Number(-2.5),
        ];
        assert_eq!(sum_values(&values), (-2.5, 1, 4));
    }

    #[test]
    fn test_aggregate_unknown_column() {
        let err = aggregate(&frame(), "Saldo").unwrap_err();
        assert!(matches!(err, Error::ParseFailure(_)));
    }

    #[test]
    fn test_aggregate_empty_column() {
        let frame = Frame::new(vec!["Valor".into()], Vec::new());
        let total = aggregate(&frame, "Valor").unwrap();
        assert_eq!((total.total, total.counted, total.skipped), (0.0, 0, 0));
    }
}
