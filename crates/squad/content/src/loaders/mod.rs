//! Content loaders for reading planner data from files.
//!
//! Each loader reads one raw JSON/TOML file, normalizes it and returns
//! squad-core records. Raw wire structs stay private to their loader.

pub mod config;
pub mod equipment;
pub mod factory;
pub mod passives;
pub mod players;

pub use config::ConfigLoader;
pub use equipment::EquipmentLoader;
pub use factory::ContentFactory;
pub use passives::PassiveLoader;
pub use players::PlayerLoader;

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Read and parse a JSON array file.
pub(crate) fn read_json_array<T: DeserializeOwned>(path: &Path) -> LoadResult<Vec<T>> {
    let content = read_file(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON array in {}", path.display()))
}

/// Lenient numeric coercion: numbers pass through, numeric strings are
/// parsed, everything else is `None`.
pub(crate) fn numeric(value: &serde_json::Value) -> Option<f64> {
    let number = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}
