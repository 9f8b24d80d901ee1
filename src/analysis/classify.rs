//! Numeric column classification by name.

use super::markers::MarkerSet;

/// Column names that contain any of `markers`, in column order.
///
/// A name matching several markers is listed once.
pub fn classify<'a, S: AsRef<str>>(columns: &'a [S], markers: &MarkerSet) -> Vec<&'a str> {
    columns
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| markers.matches(name))
        .collect()
}
