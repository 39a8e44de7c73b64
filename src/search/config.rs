//! Search configuration.

use crate::error::ConfigError;

/// Configuration for the breadth-first puzzle search.
///
/// # Examples
///
/// ```
/// use combopt::search::SearchConfig;
///
/// let config = SearchConfig::default().with_max_expanded(100_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of boards to dequeue before giving up.
    ///
    /// `None` (the default) explores the whole reachable space, which is
    /// at most 9!/2 boards for the 8-puzzle.
    pub max_expanded: Option<usize>,
}

impl SearchConfig {
    pub fn with_max_expanded(mut self, n: usize) -> Self {
        self.max_expanded = Some(n);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_expanded == Some(0) {
            return Err(ConfigError::ZeroNodeLimit);
        }
        Ok(())
    }
}
