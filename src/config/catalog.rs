//! Catalog configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the destination table comes from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON file replacing the bundled table (None for the bundled table)
    pub path: Option<PathBuf>,
}

impl Validate for CatalogConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "catalog path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
