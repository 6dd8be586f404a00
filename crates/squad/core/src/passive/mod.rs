//! Passive abilities: effect model, condition gating, the squad-wide impact
//! resolver and the team summary.
mod condition;
mod effect;
mod resolver;
mod summary;

pub use condition::{ActiveConditions, ConditionKind};
pub use effect::{EffectDirection, EffectMode, EffectScope, PassiveEffect, StatGroup};
pub use resolver::{PassiveImpactMap, PassiveOptions, compute_passive_impacts};
pub use summary::{CombinedPassive, combine_team_passives, format_number, render_passive_description};
