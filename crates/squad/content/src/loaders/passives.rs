//! Passive dataset loader.
//!
//! One file per pool under `passives/`. Records whose description is null or
//! whose type is not a known pool are dropped, matching how the datasets mark
//! unfinished entries.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use squad_core::{
    ConditionKind, EffectDirection, EffectMode, EffectScope, PassiveEffect, PassiveId, PassiveKind,
    PassiveRecord, StatGroup,
};

use crate::loaders::{LoadResult, numeric, read_json_array};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPassiveRecord {
    #[serde(default)]
    number: Value,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    build_type: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    strong_value: Value,
    #[serde(default)]
    weak_value: Value,
    #[serde(default)]
    effects: Vec<RawEffect>,
}

#[derive(Debug, Deserialize)]
struct RawEffect {
    #[serde(default)]
    scope: Option<String>,
    stat: String,
    mode: EffectMode,
    direction: EffectDirection,
    #[serde(default)]
    conditions: Vec<RawCondition>,
}

/// Conditions are objects in the dataset; only the type is meaningful here.
#[derive(Debug, Deserialize)]
struct RawCondition {
    #[serde(rename = "type")]
    kind: String,
}

impl RawEffect {
    fn into_effect(self) -> PassiveEffect {
        let scope = match self.scope {
            Some(raw) => {
                let Ok(scope) = raw.parse::<EffectScope>();
                scope
            }
            None => EffectScope::NearbyAllies,
        };
        let Ok(stat) = self.stat.parse::<StatGroup>();

        self.conditions.into_iter().fold(
            PassiveEffect::new(scope, stat, self.mode, self.direction),
            |effect, condition| {
                let Ok(kind) = condition.kind.parse::<ConditionKind>();
                effect.with_condition(kind)
            },
        )
    }
}

impl RawPassiveRecord {
    fn into_record(self) -> Option<PassiveRecord> {
        let description = self.description?;
        let kind = self.kind.trim().parse::<PassiveKind>().ok()?;
        let number = u32::try_from(self.number.as_u64()?).ok()?;

        let mut record = PassiveRecord::new(PassiveId::new(kind, number), description.trim())
            .with_values(numeric(&self.strong_value), numeric(&self.weak_value));
        if let Some(build_type) = self.build_type {
            record = record.with_build_type(build_type);
        }
        Some(
            self.effects
                .into_iter()
                .fold(record, |record, effect| record.with_effect(effect.into_effect())),
        )
    }
}

/// Loader for passive datasets (`passives/{pool}.json`).
pub struct PassiveLoader;

impl PassiveLoader {
    /// Load one passive file. The file name does not restrict the pool; each
    /// record's own `type` decides it.
    pub fn load(path: &Path) -> LoadResult<Vec<PassiveRecord>> {
        let raw: Vec<RawPassiveRecord> = read_json_array(path)?;
        let total = raw.len();

        let passives: Vec<PassiveRecord> = raw
            .into_iter()
            .filter_map(RawPassiveRecord::into_record)
            .collect();

        tracing::debug!(
            path = %path.display(),
            loaded = passives.len(),
            skipped = total - passives.len(),
            "loaded passives"
        );
        Ok(passives)
    }
}
