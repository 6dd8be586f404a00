//! Squad layout, per-slot configuration and evaluation.
mod config;
mod evaluate;
mod formation;
mod roster;
mod slot;

pub use config::{
    PassiveAssignment, PassiveSlot, SlotBean, SlotConfig, SlotEquipments, SlotPassives,
};
pub use evaluate::evaluate_squad;
pub use formation::{
    EXTRA_SLOTS, ExtraSlot, FORMATIONS, Formation, FormationId, FormationSlot, STARTER_SLOTS,
};
pub use roster::{Squad, SquadRoster};
pub use slot::{SlotAssignment, SlotId, SlotKind, SquadSlot};
