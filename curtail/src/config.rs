//! Configuration types for controlling check runs.

use std::fmt;

/// Default attempt budget for both sampling and shrinking.
pub const DEFAULT_BUDGET: usize = 10_000;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid sampling attempt budget (must be > 0)
    InvalidSampleBudget(usize),
    /// Invalid shrink attempt budget (must be > 0)
    InvalidShrinkBudget(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSampleBudget(n) => {
                write!(f, "Invalid sample budget: {} (must be > 0)", n)
            }
            ConfigError::InvalidShrinkBudget(n) => {
                write!(f, "Invalid shrink budget: {} (must be > 0)", n)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Budgets and seeding policy for a single check run.
///
/// The budgets bound effort, not outcomes: sampling stops early at the first
/// failure, while the shrink search always runs its full budget. A caller
/// that wants a deadline bounds these numbers; the engine itself has no
/// timeouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Maximum number of sampling attempts, failed decodes included
    pub sample_budget: usize,
    /// Exact number of shrink iterations run once a failure exists
    pub shrink_budget: usize,
    /// Explicit seed for the byte source; `None` draws one from OS entropy
    pub seed: Option<i64>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            sample_budget: DEFAULT_BUDGET,
            shrink_budget: DEFAULT_BUDGET,
            seed: None,
        }
    }
}

impl CheckConfig {
    /// Create a configuration with explicit budgets, validating both
    pub fn new(sample_budget: usize, shrink_budget: usize) -> Result<Self, ConfigError> {
        let config = Self {
            sample_budget,
            shrink_budget,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Pin the run to an explicit seed
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_budget == 0 {
            return Err(ConfigError::InvalidSampleBudget(self.sample_budget));
        }
        if self.shrink_budget == 0 {
            return Err(ConfigError::InvalidShrinkBudget(self.shrink_budget));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CheckConfig::default();
        assert_eq!(config.sample_budget, 10_000);
        assert_eq!(config.shrink_budget, 10_000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_budgets() {
        assert_eq!(
            CheckConfig::new(0, 100),
            Err(ConfigError::InvalidSampleBudget(0))
        );
        assert_eq!(
            CheckConfig::new(100, 0),
            Err(ConfigError::InvalidShrinkBudget(0))
        );
    }

    #[test]
    fn test_config_with_seed() {
        let config = CheckConfig::new(50, 50).unwrap().with_seed(-7);
        assert_eq!(config.seed, Some(-7));
        assert_eq!(config.sample_budget, 50);
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            format!("{}", ConfigError::InvalidShrinkBudget(0)),
            "Invalid shrink budget: 0 (must be > 0)"
        );
    }
}
