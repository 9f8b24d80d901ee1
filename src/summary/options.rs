//! Summary configuration.

use crate::analysis::{DetectionPolicy, MarkerSet};
use crate::model::PreviewStyle;

/// Which family of sections a summary contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Profile {
    /// Header detection, preview and numeric column totals
    #[default]
    Detailed,
    /// Sheet list, then shape, columns and preview of each sheet
    Overview,
    /// Overview plus descriptive statistics and missing values
    Inspect,
}

/// Options for summarizing a workbook.
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    /// Section plan
    pub profile: Profile,

    /// Substrings that identify a header row
    pub header_markers: MarkerSet,

    /// Substrings that flag a column for totals
    pub numeric_markers: MarkerSet,

    /// How to pick among rows containing a header marker
    pub detection: DetectionPolicy,

    /// Zero-based header row that bypasses detection
    pub header_row: Option<usize>,

    /// Data rows shown in each preview
    pub preview_rows: usize,

    /// Raw rows shown when no header is found (0 = none)
    pub raw_fallback_rows: usize,

    /// Layout of previews in text output
    pub preview_style: PreviewStyle,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            profile: Profile::Detailed,
            header_markers: MarkerSet::header(),
            numeric_markers: MarkerSet::ledger(),
            detection: DetectionPolicy::FirstMatch,
            header_row: None,
            preview_rows: 5,
            raw_fallback_rows: 10,
            preview_style: PreviewStyle::Table,
        }
    }
}

impl SummaryOptions {
    /// Create detailed summary options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Detailed analysis of a cash book: totals of entrada, saida and valor
    /// columns, raw rows when no header is found.
    pub fn cash() -> Self {
        Self::default().with_numeric_markers(MarkerSet::cash())
    }

    /// Detailed analysis of a bank ledger: totals of every ledger column,
    /// no raw fallback.
    pub fn ledger() -> Self {
        Self::default()
            .with_numeric_markers(MarkerSet::ledger())
            .with_raw_fallback_rows(0)
    }

    /// Structure of every sheet with the first row as header.
    pub fn overview() -> Self {
        Self::default().with_profile(Profile::Overview)
    }

    /// Structure plus statistics of every sheet.
    pub fn inspect() -> Self {
        Self::default().with_profile(Profile::Inspect)
    }

    /// Set the profile.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the header markers.
    pub fn with_header_markers(mut self, markers: MarkerSet) -> Self {
        self.header_markers = markers;
        self
    }

    /// Set the numeric column markers.
    pub fn with_numeric_markers(mut self, markers: MarkerSet) -> Self {
        self.numeric_markers = markers;
        self
    }

    /// Set the header detection policy.
    pub fn with_detection(mut self, policy: DetectionPolicy) -> Self {
        self.detection = policy;
        self
    }

    /// Use a fixed zero-based header row instead of detection.
    pub fn with_header_row(mut self, row: usize) -> Self {
        self.header_row = Some(row);
        self
    }

    /// Set the number of preview rows.
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    /// Set the number of raw rows shown when no header is found.
    pub fn with_raw_fallback_rows(mut self, rows: usize) -> Self {
        self.raw_fallback_rows = rows;
        self
    }

    /// Set the preview layout.
    pub fn with_preview_style(mut self, style: PreviewStyle) -> Self {
        self.preview_style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = SummaryOptions::default();
        assert_eq!(opts.profile, Profile::Detailed);
        assert_eq!(opts.numeric_markers, MarkerSet::ledger());
        assert_eq!(opts.detection, DetectionPolicy::FirstMatch);
        assert_eq!(opts.header_row, None);
        assert_eq!(opts.preview_rows, 5);
        assert_eq!(opts.raw_fallback_rows, 10);
    }

    #[test]
    fn test_presets() {
        let cash = SummaryOptions::cash();
        assert_eq!(cash.numeric_markers, MarkerSet::cash());
        assert_eq!(cash.raw_fallback_rows, 10);

        let ledger = SummaryOptions::ledger();
        assert_eq!(ledger.raw_fallback_rows, 0);

        assert_eq!(SummaryOptions::overview().profile, Profile::Overview);
        assert_eq!(SummaryOptions::inspect().profile, Profile::Inspect);
    }

    #[test]
    fn test_builder_pattern() {
        let opts = SummaryOptions::overview()
            .with_preview_style(PreviewStyle::Compact)
            .with_header_row(2)
            .with_detection(DetectionPolicy::BestScore);

        assert_eq!(opts.preview_style, PreviewStyle::Compact);
        assert_eq!(opts.header_row, Some(2));
        assert_eq!(opts.detection, DetectionPolicy::BestScore);
    }
}
