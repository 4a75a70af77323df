use super::constants::{DEFAULT_DEPTH, DEFAULT_QSEARCH_DEPTH, MAX_DEPTH};

/// Tunable limits for a single search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Full-width depth in plies
    pub depth: u32,
    /// Capture-only extension below the full-width leaves
    pub quiescence_depth: u32,
    /// Largest depth a caller may request
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            quiescence_depth: DEFAULT_QSEARCH_DEPTH,
            max_depth: MAX_DEPTH,
        }
    }
}

impl SearchConfig {
    /// Default configuration searching to a fixed depth.
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchConfig::default().with_depth(depth)
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_quiescence_depth(mut self, quiescence_depth: u32) -> Self {
        self.quiescence_depth = quiescence_depth;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether `depth` is a search depth callers may request.
    #[must_use]
    pub fn accepts_depth(&self, depth: u32) -> bool {
        (1..=self.max_depth).contains(&depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_constants() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 4);
        assert_eq!(config.quiescence_depth, 4);
        assert!(config.accepts_depth(1));
        assert!(config.accepts_depth(config.max_depth));
        assert!(!config.accepts_depth(0));
        assert!(!config.accepts_depth(config.max_depth + 1));
    }

    #[test]
    fn builder_overrides() {
        let config = SearchConfig::depth(2).with_quiescence_depth(0);
        assert_eq!(config.depth, 2);
        assert_eq!(config.quiescence_depth, 0);
        assert_eq!(config.max_depth, MAX_DEPTH);
    }
}
