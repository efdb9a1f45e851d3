//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Stop the search as soon as the target is finalized.
    /// When false the search settles the whole reachable component first;
    /// the resulting walk is the same either way.
    pub stop_at_target: bool,

    /// Maximum number of searches to run concurrently when answering a
    /// batch of direction queries.
    pub batch_size: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(stop_at_target: bool, batch_size: usize) -> Self {
        Self {
            stop_at_target,
            batch_size,
        }
    }

    /// Returns the batch size, never less than one.
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.max(1)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            stop_at_target: true,
            batch_size: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert!(config.stop_at_target);
        assert_eq!(config.batch_size, 8);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(false, 16);

        assert!(!config.stop_at_target);
        assert_eq!(config.batch_size, 16);
    }

    #[test]
    fn zero_batch_size_runs_one_at_a_time() {
        let config = SearchConfig::new(true, 0);
        assert_eq!(config.effective_batch_size(), 1);
    }
}
