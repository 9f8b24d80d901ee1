//! Heuristic header row detection.

use super::markers::MarkerSet;
use crate::model::CellValue;
use serde::{Deserialize, Serialize};

/// How to choose among rows that contain a marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionPolicy {
    /// The first matching row, scanning top to bottom. A decorative row that
    /// mentions a marker above the real header wins.
    #[default]
    FirstMatch,
    /// The matching row with the most distinct markers, then the largest
    /// share of filled cells; the earliest row breaks ties.
    BestScore,
}

/// A row that contains at least one marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderCandidate {
    /// Zero-based row index
    pub row: usize,
    /// Distinct markers found in the row
    pub markers_matched: usize,
    /// Non-empty cells divided by row width
    pub filled_ratio: f64,
}

/// The text a row is matched against: its non-empty cells joined by spaces.
pub fn row_search_text(row: &[CellValue]) -> String {
    row.iter()
        .filter(|c| !c.is_empty())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Finds the header row of a raw sheet.
#[derive(Debug, Clone, Default)]
pub struct HeaderDetector {
    markers: MarkerSet,
    policy: DetectionPolicy,
}

impl HeaderDetector {
    /// Create a first-match detector for the given markers.
    pub fn new(markers: MarkerSet) -> Self {
        Self {
            markers,
            policy: DetectionPolicy::FirstMatch,
        }
    }

    /// Set the selection policy.
    pub fn with_policy(mut self, policy: DetectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The markers in use.
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// Index of the header row, or `None` when no row contains a marker.
    pub fn detect(&self, rows: &[Vec<CellValue>]) -> Option<usize> {
        match self.policy {
            DetectionPolicy::FirstMatch => rows
                .iter()
                .position(|row| self.markers.matches(&row_search_text(row))),
            DetectionPolicy::BestScore => {
                let mut best: Option<HeaderCandidate> = None;
                for candidate in self.candidates(rows) {
                    let better = best.is_none_or(|b| {
                        (candidate.markers_matched, candidate.filled_ratio)
                            > (b.markers_matched, b.filled_ratio)
                    });
                    if better {
                        best = Some(candidate);
                    }
                }
                best.map(|c| c.row)
            }
        }
    }

    /// Every row containing a marker, top to bottom, with its score.
    pub fn candidates(&self, rows: &[Vec<CellValue>]) -> Vec<HeaderCandidate> {
        rows.iter()
            .enumerate()
            .filter_map(|(row, cells)| {
                let markers_matched = self.markers.count_matches(&row_search_text(cells));
                if markers_matched == 0 {
                    return None;
                }
                let filled = cells.iter().filter(|c| !c.is_empty()).count();
                Some(HeaderCandidate {
                    row,
                    markers_matched,
                    filled_ratio: filled as f64 / cells.len().max(1) as f64,
                })
            })
            .collect()
    }
}

/// First row containing any of `markers`.
pub fn detect_header(rows: &[Vec<CellValue>], markers: &MarkerSet) -> Option<usize> {
    rows.iter()
        .position(|row| markers.matches(&row_search_text(row)))
}
