//! Raw worksheet grid.

use super::CellValue;
use serde::{Deserialize, Serialize};

/// A worksheet loaded without any header interpretation.
///
/// The grid is rectangular: every row has [`Sheet::column_count`] cells,
/// up to the last column holding a value. Rows without any value are
/// dropped, so row `i` is the `i`-th non-blank row of the sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet name as shown on its tab
    pub name: String,
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Create a sheet, normalizing the grid.
    pub fn new(name: impl Into<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        rows.retain(|row| !row.iter().all(CellValue::is_empty));

        let width = rows
            .iter()
            .filter_map(|row| row.iter().rposition(|c| !c.is_empty()))
            .map(|last| last + 1)
            .max()
            .unwrap_or(0);

        for row in &mut rows {
            row.resize(width, CellValue::Empty);
        }

        Self {
            name: name.into(),
            rows,
        }
    }

    /// All rows of the grid.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// A single row.
    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Check if the sheet holds no values.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::text(s)
    }

    #[test]
    fn test_normalizes_grid() {
        let sheet = Sheet::new(
            "Uba",
            vec![
                vec![text("a")],
                vec![],
                vec![CellValue::Empty, CellValue::Empty, text("c"), CellValue::Empty],
                vec![CellValue::Empty],
                vec![],
            ],
        );

        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.column_count(), 3);
        assert!(sheet.rows().iter().all(|r| r.len() == 3));
        assert_eq!(sheet.row(0), Some(&[text("a"), CellValue::Empty, CellValue::Empty][..]));
        assert_eq!(sheet.row(1).unwrap()[2], text("c"));
    }

    #[test]
    fn test_leading_blank_rows_dropped() {
        let sheet = Sheet::new(
            "Bancos",
            vec![
                vec![CellValue::Empty, CellValue::Empty],
                vec![text("Banco"), text("Valor")],
                vec![],
                vec![text("Itau"), CellValue::Number(10.0)],
            ],
        );

        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.row(0), Some(&[text("Banco"), text("Valor")][..]));
        assert_eq!(sheet.row(1).unwrap()[1], CellValue::Number(10.0));
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = Sheet::new("Vazia", vec![vec![CellValue::Empty], vec![]]);
        assert!(sheet.is_empty());
        assert_eq!(sheet.column_count(), 0);
        assert_eq!(sheet.row(0), None);
    }
}
