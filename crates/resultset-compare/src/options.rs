//! Comparison options

/// Options controlling a comparison
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Stop after this many findings (`None` = report every difference)
    ///
    /// A capped report has `truncated` set when the cap was reached.
    pub max_findings: Option<usize>,
}

impl CompareOptions {
    /// Options with a findings cap
    pub fn with_max_findings(max: usize) -> Self {
        Self {
            max_findings: Some(max),
        }
    }
}
