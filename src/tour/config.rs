//! Search configuration.

/// Default cap on the number of candidates a single search may enumerate.
///
/// Admits simple tours up to 11 nodes (39 916 800 candidates) and
/// one-repeat tours up to 9 nodes (16 329 600 candidates).
pub const DEFAULT_MAX_CANDIDATES: u64 = 100_000_000;

/// Configuration for an exhaustive tour search.
///
/// # Examples
///
/// ```
/// use u_tours::tour::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_candidates(1_000_000)
///     .with_parallel(true)
///     .with_progress_interval(50_000);
/// assert_eq!(config.max_candidates, 1_000_000);
/// assert!(config.admits(Some(999_999)));
/// assert!(!config.admits(None));
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Upper bound on enumerated candidates. 0 = no limit.
    ///
    /// Checked before the search starts; a larger space fails with
    /// [`TourError::SearchTooLarge`](crate::TourError::SearchTooLarge).
    pub max_candidates: u64,

    /// Whether to split the search across rayon workers.
    ///
    /// Only takes effect with the `parallel` cargo feature. The result is
    /// identical to the sequential search, tie-breaks included.
    pub parallel: bool,

    /// Emit a debug progress event every this many candidates of a work
    /// block. 0 = off.
    pub progress_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            parallel: false,
            progress_interval: 0,
        }
    }
}

impl SearchConfig {
    /// Sets the candidate cap (0 = no limit).
    pub fn with_max_candidates(mut self, n: u64) -> Self {
        self.max_candidates = n;
        self
    }

    /// Enables or disables parallel search.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the progress event interval (0 = off).
    pub fn with_progress_interval(mut self, n: u64) -> Self {
        self.progress_interval = n;
        self
    }

    /// Whether a search of `candidates` fits under the cap.
    ///
    /// `None` stands for a count too large for `u64` and only fits when
    /// there is no limit.
    pub fn admits(&self, candidates: Option<u64>) -> bool {
        if self.max_candidates == 0 {
            return true;
        }
        candidates.is_some_and(|c| c <= self.max_candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_candidates, DEFAULT_MAX_CANDIDATES);
        assert!(!config.parallel);
        assert_eq!(config.progress_interval, 0);
    }

    #[test]
    fn test_admits() {
        let config = SearchConfig::default().with_max_candidates(100);
        assert!(config.admits(Some(100)));
        assert!(!config.admits(Some(101)));
        assert!(!config.admits(None));
    }

    #[test]
    fn test_unlimited_admits_everything() {
        let config = SearchConfig::default().with_max_candidates(0);
        assert!(config.admits(Some(u64::MAX)));
        assert!(config.admits(None));
    }

    #[test]
    fn test_default_bound_documented_sizes() {
        use crate::tour::TourMode;
        let config = SearchConfig::default();
        assert!(config.admits(TourMode::Simple.candidate_count(11)));
        assert!(!config.admits(TourMode::Simple.candidate_count(12)));
        assert!(config.admits(TourMode::OneRepeat.candidate_count(9)));
        assert!(!config.admits(TourMode::OneRepeat.candidate_count(10)));
    }
}
