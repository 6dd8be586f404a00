//! Deterministic squad stat computation and passive resolution.
//!
//! `squad-core` turns a player's raw attributes plus a slot configuration
//! (rarity, equipment, beans, passives) into battle power, then layers the
//! squad-wide passive effects on top. Static content is read through the
//! oracle traits in [`env`]; loading it from disk lives in `squad-content`.
//! Every entry point is a pure function of its inputs.
#[macro_use]
mod macros;

pub mod config;
pub mod env;
pub mod error;
#[cfg(feature = "serde")]
pub mod fingerprint;
pub mod passive;
pub mod squad;
pub mod stats;

pub use config::PlannerConfig;
pub use env::{
    Catalog, CatalogBuilder, EquipmentCategory, EquipmentId, EquipmentOracle, EquipmentRecord,
    ParsePassiveIdError, PassiveId, PassiveKind, PassiveOracle, PassiveRecord, PlayerId,
    PlayerOracle, PlayerRecord, PlayerRecordBuilder, TeamPosition, normalize_element,
};
pub use error::{ErrorSeverity, PlannerError, SquadError};
#[cfg(feature = "serde")]
pub use fingerprint::{slot_fingerprint, squad_fingerprint};
pub use passive::{
    ActiveConditions, CombinedPassive, ConditionKind, EffectDirection, EffectMode, EffectScope,
    PassiveEffect, PassiveImpactMap, PassiveOptions, StatGroup, combine_team_passives,
    compute_passive_impacts, render_passive_description,
};
pub use squad::{
    EXTRA_SLOTS, Formation, FormationId, PassiveAssignment, PassiveSlot, SlotAssignment, SlotBean,
    SlotConfig, SlotEquipments, SlotId, SlotKind, SlotPassives, Squad, SquadRoster, SquadSlot,
    evaluate_squad,
};
pub use stats::{
    AttributeBonuses, BaseAttribute, BaseStats, PowerStat, PowerStats, SlotComputedStats,
    SlotRarity, apply_rarity_bonus, compute_power, compute_slot_computed_stats,
};
