//! Layout reconstruction configuration.
//!
//! All heuristic thresholds live in one [`LayoutConfig`] record that is
//! threaded by reference through the column, line, and indentation stages.
//! Nothing in the pipeline reads process-wide state.

/// Tunable parameters for layout reconstruction.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Multiplier on the mean character width: a gap wider than this marks
    /// the end of a bullet in the space-gap strategy.
    pub bullet_threshold: f32,

    /// Ordered bullet patterns, tried as prefixes of the accumulated line
    /// text (anchored at the start when compiled).
    pub bullet_patterns: Vec<String>,

    /// Divisor of the page width giving the smoothing window for the column
    /// density histogram.
    pub smoothing_granularity: u32,

    /// Minimum prominence for a density minimum to count as a column gutter.
    pub peak_prominence: f32,

    /// Minimum width in pixels for a density minimum to count as a gutter.
    pub peak_min_width: usize,

    /// Horizontal expansion applied to each detected column, as a fraction
    /// of its width, so boundary glyphs are not clipped.
    pub column_margin: f32,

    /// Minimum y-axis IoU for a word to join an existing line cluster.
    pub line_overlap_threshold: f32,

    /// IoU above which a line's first two equal-text words are considered
    /// the same bullet detected twice.
    pub duplicate_bullet_overlap: f32,

    /// Indentation delta (in column widths) under which two items are at
    /// the same level; doubled for the "very indented/dedented" buckets.
    pub same_level_threshold: f32,

    /// Font-weight delta under which two items are equally bold.
    pub same_fontweight_threshold: f32,

    /// IoU above which two boxes pair up in box-set operations.
    pub overlap_threshold: f32,

    /// Fraction of a box that must lie inside another for the approximate
    /// containment test to hold.
    pub containment_ratio: f32,

    /// Whether item merging also splits on bold/non-bold transitions.
    pub factor_in_fontweight: bool,

    /// Section headers that split a merged item even without a bullet.
    pub section_headers: Vec<String>,

    /// Luma below which a pixel counts as ink in the font-weight estimate.
    pub ink_luma_threshold: u8,

    /// Ink fraction a normal-weight render of a text line produces; the
    /// observed fraction is divided by this, so values above 1.0 read bold.
    pub reference_ink_ratio: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bullet_threshold: 2.0,
            bullet_patterns: vec![
                "\u{2022}".to_string(),
                "-".to_string(),
                r"\d+\.\d+\.\d+".to_string(),
                r"[a-zA-Z0-9]{1,3}\)".to_string(),
            ],
            smoothing_granularity: 8,
            peak_prominence: 1.0,
            peak_min_width: 50,
            column_margin: 0.02,
            line_overlap_threshold: 0.1,
            duplicate_bullet_overlap: 0.05,
            same_level_threshold: 0.025,
            same_fontweight_threshold: 0.25,
            overlap_threshold: 0.4,
            containment_ratio: 0.8,
            factor_in_fontweight: false,
            section_headers: vec![
                "Content".to_string(),
                "Specific Objectives".to_string(),
                "Suggested Resources".to_string(),
                "Suggested Further Assessment".to_string(),
                "Notes".to_string(),
            ],
            ink_luma_threshold: 128,
            reference_ink_ratio: 0.18,
        }
    }
}

impl LayoutConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the space-gap bullet threshold multiplier.
    pub fn with_bullet_threshold(mut self, threshold: f32) -> Self {
        self.bullet_threshold = threshold;
        self
    }

    /// Set the bullet patterns tried during pattern extraction.
    pub fn with_bullet_patterns(mut self, patterns: Vec<String>) -> Self {
        self.bullet_patterns = patterns;
        self
    }

    /// Set the column histogram smoothing granularity.
    pub fn with_smoothing_granularity(mut self, granularity: u32) -> Self {
        self.smoothing_granularity = granularity;
        self
    }

    /// Set the gutter peak-finding constraints.
    pub fn with_peak_constraints(mut self, prominence: f32, min_width: usize) -> Self {
        self.peak_prominence = prominence;
        self.peak_min_width = min_width;
        self
    }

    /// Set the minimum overlap for line clustering.
    pub fn with_line_overlap_threshold(mut self, threshold: f32) -> Self {
        self.line_overlap_threshold = threshold;
        self
    }

    /// Set the same-level indentation threshold.
    pub fn with_same_level_threshold(mut self, threshold: f32) -> Self {
        self.same_level_threshold = threshold;
        self
    }

    /// Set the same-fontweight threshold.
    pub fn with_same_fontweight_threshold(mut self, threshold: f32) -> Self {
        self.same_fontweight_threshold = threshold;
        self
    }

    /// Enable splitting merged items on bold/non-bold transitions.
    pub fn with_fontweight_splitting(mut self, enabled: bool) -> Self {
        self.factor_in_fontweight = enabled;
        self
    }

    /// Set the section headers used for item splitting.
    pub fn with_section_headers(mut self, headers: Vec<String>) -> Self {
        self.section_headers = headers;
        self
    }
}
