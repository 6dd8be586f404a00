use core::fmt;

use super::config::SlotConfig;
use crate::env::{PassiveKind, PlayerRecord};
use crate::stats::SlotComputedStats;

/// Formation slot identifier ("fw-1", "reserve-3", "manager"...).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SlotId(pub String);

impl From<&str> for SlotId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for SlotId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role of a slot within the formation.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SlotKind {
    /// On-pitch slot; the only kind passives reach.
    Starter,
    Reserve,
    Manager,
    Coordinator,
}

impl SlotKind {
    /// Pool the slot's preset passives are chosen from.
    pub fn passive_pool(self) -> PassiveKind {
        match self {
            SlotKind::Starter | SlotKind::Reserve => PassiveKind::Player,
            SlotKind::Manager => PassiveKind::Manager,
            SlotKind::Coordinator => PassiveKind::Coordinator,
        }
    }

    pub fn is_reserve(self) -> bool {
        matches!(self, SlotKind::Reserve)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquadSlot {
    pub id: SlotId,
    pub kind: SlotKind,
    pub label: String,
}

impl SquadSlot {
    pub fn new(id: impl Into<SlotId>, kind: SlotKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
        }
    }

    pub fn starter(id: impl Into<SlotId>, label: impl Into<String>) -> Self {
        Self::new(id, SlotKind::Starter, label)
    }

    pub fn reserve(id: impl Into<SlotId>, label: impl Into<String>) -> Self {
        Self::new(id, SlotKind::Reserve, label)
    }
}

/// A slot together with its occupant, configuration and (once evaluated)
/// computed stats. Borrows the player from the catalog.
#[derive(Clone, Debug)]
pub struct SlotAssignment<'a> {
    pub slot: SquadSlot,
    pub player: Option<&'a PlayerRecord>,
    pub config: SlotConfig,
    pub computed: Option<SlotComputedStats>,
}

impl<'a> SlotAssignment<'a> {
    pub fn new(slot: SquadSlot, player: Option<&'a PlayerRecord>, config: SlotConfig) -> Self {
        Self {
            slot,
            player,
            config,
            computed: None,
        }
    }

    pub fn is_reserve(&self) -> bool {
        self.slot.kind.is_reserve()
    }
}
