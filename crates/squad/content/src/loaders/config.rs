//! Planner configuration loader.

use std::path::Path;

use squad_core::PlannerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for planner configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing fields take their defaults.
    pub fn load(path: &Path) -> LoadResult<PlannerConfig> {
        let content = read_file(path)?;
        let config: PlannerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        tracing::debug!(
            path = %path.display(),
            max_squads = config.max_squads,
            default_bean_value = config.default_bean_value,
            "loaded planner config"
        );
        Ok(config)
    }
}
