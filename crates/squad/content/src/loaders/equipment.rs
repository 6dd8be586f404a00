//! Equipment catalog loader.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use squad_core::{BaseStats, EquipmentCategory, EquipmentId, EquipmentRecord};

use crate::loaders::{LoadResult, numeric, read_json_array};

#[derive(Debug, Deserialize)]
struct RawEquipmentRecord {
    id: Value,
    name: String,
    #[serde(rename = "type")]
    category: String,
    #[serde(default)]
    shop: Option<String>,
    #[serde(default)]
    kick: Value,
    #[serde(default)]
    control: Value,
    #[serde(default)]
    technique: Value,
    #[serde(default)]
    pressure: Value,
    #[serde(default)]
    physical: Value,
    #[serde(default)]
    agility: Value,
    #[serde(default)]
    intelligence: Value,
}

impl RawEquipmentRecord {
    fn into_record(self) -> LoadResult<EquipmentRecord> {
        let id = match &self.id {
            Value::String(text) => text.trim().to_owned(),
            Value::Number(number) => number.to_string(),
            other => anyhow::bail!("equipment `{}` has an invalid id: {}", self.name, other),
        };
        let category: EquipmentCategory = self.category.trim().parse().with_context(|| {
            format!("equipment `{}` has unknown type `{}`", id, self.category)
        })?;

        let bonus = |value: &Value| numeric(value).unwrap_or(0.0);
        let stats = BaseStats::new(
            bonus(&self.kick),
            bonus(&self.control),
            bonus(&self.technique),
            bonus(&self.pressure),
            bonus(&self.physical),
            bonus(&self.agility),
            bonus(&self.intelligence),
        );

        let mut record = EquipmentRecord::new(
            EquipmentId::from(id),
            self.name.trim(),
            category,
            stats,
        );
        if let Some(shop) = self.shop.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            record = record.with_shop(shop);
        }
        Ok(record)
    }
}

/// Loader for the equipment catalog (`equipments.json`).
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load equipment. An unknown category fails the whole load.
    pub fn load(path: &Path) -> LoadResult<Vec<EquipmentRecord>> {
        let raw: Vec<RawEquipmentRecord> = read_json_array(path)?;
        let equipment = raw
            .into_iter()
            .map(RawEquipmentRecord::into_record)
            .collect::<LoadResult<Vec<_>>>()
            .with_context(|| format!("Invalid equipment in {}", path.display()))?;

        tracing::debug!(path = %path.display(), loaded = equipment.len(), "loaded equipment");
        Ok(equipment)
    }
}
