//! Marker substring sets.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Markers that identify a header row.
pub const HEADER_MARKERS: [&str; 4] = ["data", "descrição", "valor", "saldo"];

/// Markers for cash-book columns (entries, exits, amounts).
pub const CASH_MARKERS: [&str; 3] = ["entrada", "saida", "valor"];

/// Markers for bank ledger columns: the cash markers plus credits and debits.
pub const LEDGER_MARKERS: [&str; 5] = ["entrada", "saida", "valor", "credito", "debito"];

/// Normalize text for marker comparison: NFC composition, then lower case.
pub fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// A set of lowercase substrings matched against row or column text.
///
/// Matching is existence-only: the order of markers never changes a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerSet {
    markers: Vec<String>,
}

impl MarkerSet {
    /// Build a set; markers are normalized, blanks and repeats are dropped.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: Vec<String> = Vec::new();
        for marker in markers {
            let marker = normalize(marker.as_ref().trim());
            if !marker.is_empty() && !set.contains(&marker) {
                set.push(marker);
            }
        }
        Self { markers: set }
    }

    /// `data`, `descrição`, `valor`, `saldo`
    pub fn header() -> Self {
        Self::new(HEADER_MARKERS)
    }

    /// `entrada`, `saida`, `valor`
    pub fn cash() -> Self {
        Self::new(CASH_MARKERS)
    }

    /// `entrada`, `saida`, `valor`, `credito`, `debito`
    pub fn ledger() -> Self {
        Self::new(LEDGER_MARKERS)
    }

    /// The normalized markers, in insertion order.
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Check if the set has no markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Check if any marker occurs in `text`.
    pub fn matches(&self, text: &str) -> bool {
        let haystack = normalize(text);
        self.markers.iter().any(|m| haystack.contains(m.as_str()))
    }

    /// Number of distinct markers occurring in `text`.
    pub fn count_matches(&self, text: &str) -> usize {
        let haystack = normalize(text);
        self.markers
            .iter()
            .filter(|m| haystack.contains(m.as_str()))
            .count()
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::header()
    }
}
