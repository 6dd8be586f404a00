//! Stat System - layered, pure computation.
//!
//! # Architecture
//!
//! ```text
//! [ Base Attributes (Layer 1) ]     raw dataset values
//!      ↓  Rarity → Equipment → Beans
//! [ Final Base Attributes ]
//!      ↓  Power Formula
//! [ Power Stats (Layer 2) ]         pre-passive
//!      ↓  Passive deltas (crate::passive)
//! [ Final Power ]
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: Only the dataset attributes and the slot configuration are inputs
//! 2. **Unidirectional Flow**: Upper layers never feed back into lower layers
//! 3. **Deterministic**: Pure functions, no I/O, no randomness, no caching

pub mod attributes;
pub mod power;
pub mod rarity;
pub mod slot;

pub use attributes::{AttributeBonuses, BaseAttribute, BaseStats};
pub use power::{PowerStat, PowerStats, compute_power};
pub use rarity::{RarityDefinition, SlotRarity, apply_rarity_bonus};
pub use slot::{SlotComputedStats, compute_slot_computed_stats};
