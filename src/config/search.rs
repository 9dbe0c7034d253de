//! Search configuration module.
//!
//! Limits and sizing for the search façade and the indexes behind it.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result limit used when a caller does not give one
    pub default_limit: usize,

    /// Name count returned by the popular list when no limit is given
    pub popular_limit: usize,

    /// Shortest shared leading run that qualifies a fuzzy match
    pub min_leading_run: usize,

    /// Bucket count of the exact-name store
    pub bucket_count: usize,

    /// Longest name accepted by the prefix index
    pub max_key_length: usize,

    /// Memoized query results kept (0 disables the cache)
    pub cache_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            popular_limit: 8,
            min_leading_run: 2,
            bucket_count: 100,
            max_key_length: 64,
            cache_capacity: 64,
        }
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_limit == 0 {
            return Err(ConfigError::ValidationError(
                "default_limit must be greater than 0".to_string(),
            ));
        }

        if self.min_leading_run == 0 {
            return Err(ConfigError::ValidationError(
                "min_leading_run must be greater than 0".to_string(),
            ));
        }

        if self.bucket_count == 0 {
            return Err(ConfigError::ValidationError(
                "bucket_count must be greater than 0".to_string(),
            ));
        }

        if self.max_key_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_key_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
