//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use squad_core::{
    Catalog, EquipmentRecord, PassiveKind, PassiveRecord, PlannerConfig, PlayerRecord,
};

use crate::loaders::{ConfigLoader, EquipmentLoader, LoadResult, PassiveLoader, PlayerLoader};

/// Content factory that loads all planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── players.json
/// ├── equipments.json
/// └── passives/
///     ├── player.json
///     ├── manager.json
///     ├── coordinator.json
///     └── custom.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load planner configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<PlannerConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Like [`Self::load_config`], but a missing file yields the defaults.
    pub fn load_config_or_default(&self) -> LoadResult<PlannerConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(PlannerConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the player dataset from `players.json`.
    pub fn load_players(&self) -> LoadResult<Vec<PlayerRecord>> {
        let path = self.data_dir.join("players.json");
        PlayerLoader::load(&path)
    }

    /// Load the equipment catalog from `equipments.json`.
    pub fn load_equipment(&self) -> LoadResult<Vec<EquipmentRecord>> {
        let path = self.data_dir.join("equipments.json");
        EquipmentLoader::load(&path)
    }

    /// Load one passive pool from `passives/{kind}.json`.
    pub fn load_passives(&self, kind: PassiveKind) -> LoadResult<Vec<PassiveRecord>> {
        let path = self.passive_path(kind);
        PassiveLoader::load(&path)
    }

    /// Load every dataset into an immutable [`Catalog`].
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let mut builder = Catalog::builder()
            .players(self.load_players()?)
            .equipments(self.load_equipment()?);
        for kind in [
            PassiveKind::Player,
            PassiveKind::Manager,
            PassiveKind::Coordinator,
            PassiveKind::Custom,
        ] {
            builder = builder.passives(self.load_passives(kind)?);
        }

        let catalog = builder.build();
        tracing::debug!(
            players = catalog.player_count(),
            equipment = catalog.equipment_count(),
            passives = catalog.passive_count(),
            "catalog ready"
        );
        Ok(catalog)
    }

    fn passive_path(&self, kind: PassiveKind) -> PathBuf {
        self.data_dir.join("passives").join(format!("{kind}.json"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
