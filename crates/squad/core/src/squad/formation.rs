//! Built-in formations and the bench/staff slots every layout carries.
//!
//! Formations differ only in how the eleven starter slots are labelled;
//! slot ids (`player-1` … `player-11`) are shared, which is what lets a squad
//! keep its assignments across a formation change.

use super::slot::{SlotKind, SquadSlot};

/// Identifier of a built-in formation.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum FormationId {
    #[default]
    #[strum(serialize = "433-delta")]
    Delta433,
    #[strum(serialize = "451-balanced")]
    Balanced451,
    #[strum(serialize = "541-double-volante")]
    DoubleVolante541,
    #[strum(serialize = "361-hexa")]
    Hexa361,
    #[strum(serialize = "352-freedom")]
    Freedom352,
    #[strum(serialize = "433-triangle")]
    Triangle433,
    #[strum(serialize = "442-diamond")]
    Diamond442,
    #[strum(serialize = "442-box")]
    Box442,
}

impl_string_serde!(FormationId);

impl FormationId {
    pub const ALL: [FormationId; 8] = [
        FormationId::Delta433,
        FormationId::Balanced451,
        FormationId::DoubleVolante541,
        FormationId::Hexa361,
        FormationId::Freedom352,
        FormationId::Triangle433,
        FormationId::Diamond442,
        FormationId::Box442,
    ];

    pub fn formation(self) -> &'static Formation {
        &FORMATIONS[self as usize]
    }
}

/// A starter slot: its id and the position label shown for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormationSlot {
    pub id: &'static str,
    pub label: &'static str,
}

/// Starter slots per formation.
pub const STARTER_SLOTS: usize = 11;

const fn slot(id: &'static str, label: &'static str) -> FormationSlot {
    FormationSlot { id, label }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formation {
    pub id: FormationId,
    pub name: &'static str,
    pub summary: &'static str,
    pub slots: [FormationSlot; STARTER_SLOTS],
}

impl Formation {
    /// Starter slots in formation order, followed by [`EXTRA_SLOTS`].
    pub fn layout(&self) -> Vec<SquadSlot> {
        self.slots
            .iter()
            .map(|slot| SquadSlot::starter(slot.id, slot.label))
            .chain(EXTRA_SLOTS.iter().map(ExtraSlot::to_slot))
            .collect()
    }
}

/// A non-starter slot present in every formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtraSlot {
    pub id: &'static str,
    pub kind: SlotKind,
    pub label: &'static str,
}

impl ExtraSlot {
    const fn new(id: &'static str, kind: SlotKind, label: &'static str) -> Self {
        Self { id, kind, label }
    }

    pub fn to_slot(&self) -> SquadSlot {
        SquadSlot::new(self.id, self.kind, self.label)
    }
}

/// Bench and staff slots. They survive every formation change.
pub const EXTRA_SLOTS: [ExtraSlot; 8] = [
    ExtraSlot::new("reserve-1", SlotKind::Reserve, "Reserve 1"),
    ExtraSlot::new("reserve-2", SlotKind::Reserve, "Reserve 2"),
    ExtraSlot::new("reserve-3", SlotKind::Reserve, "Reserve 3"),
    ExtraSlot::new("reserve-4", SlotKind::Reserve, "Reserve 4"),
    ExtraSlot::new("reserve-5", SlotKind::Reserve, "Reserve 5"),
    ExtraSlot::new("manager", SlotKind::Manager, "Manager"),
    ExtraSlot::new("coordinator-1", SlotKind::Coordinator, "Coordinator 1"),
    ExtraSlot::new("coordinator-2", SlotKind::Coordinator, "Coordinator 2"),
];

/// Indexed by `FormationId as usize`.
pub static FORMATIONS: [Formation; 8] = [
    Formation {
        id: FormationId::Delta433,
        name: "4-3-3 Delta",
        summary: "Aggressive trident up front with staggered mids supporting.",
        slots: [
            slot("player-1", "FW"),
            slot("player-2", "FW"),
            slot("player-3", "FW"),
            slot("player-4", "MF"),
            slot("player-5", "MF"),
            slot("player-6", "MF"),
            slot("player-7", "DF"),
            slot("player-8", "DF"),
            slot("player-9", "DF"),
            slot("player-10", "DF"),
            slot("player-11", "GK"),
        ],
    },
    Formation {
        id: FormationId::Balanced451,
        name: "4-5-1 Balanced",
        summary: "Crowded midfield for possession with lone striker.",
        slots: [
            slot("player-1", "FW"),
            slot("player-2", "MF"),
            slot("player-3", "MF"),
            slot("player-4", "MF"),
            slot("player-5", "MF"),
            slot("player-6", "MF"),
            slot("player-7", "DF"),
            slot("player-8", "DF"),
            slot("player-9", "DF"),
            slot("player-10", "DF"),
            slot("player-11", "GK"),
        ],
    },
    Formation {
        id: FormationId::DoubleVolante541,
        name: "5-4-1 Double Volante",
        summary: "Double holding mids shielding a five-back wall.",
        slots: [
            slot("player-1", "FW"),
            slot("player-2", "MF"),
            slot("player-3", "MF"),
            slot("player-4", "MF"),
            slot("player-5", "MF"),
            slot("player-6", "DF"),
            slot("player-7", "DF"),
            slot("player-8", "DF"),
            slot("player-9", "DF"),
            slot("player-10", "DF"),
            slot("player-11", "GK"),
        ],
    },
    Formation {
        id: FormationId::Hexa361,
        name: "3-6-1 Hexa",
        summary: "Six mids swarm the center while a trio defends.",
        slots: [
            slot("player-1", "FW"),
            slot("player-2", "MF"),
            slot("player-3", "MF"),
            slot("player-4", "MF"),
            slot("player-5", "MF"),
            slot("player-6", "MF"),
            slot("player-7", "MF"),
            slot("player-8", "DF"),
            slot("player-9", "DF"),
            slot("player-10", "DF"),
            slot("player-11", "GK"),
        ],
    },
    Formation {
        id: FormationId::Freedom352,
        name: "3-5-2 Freedom",
        summary: "Twin forwards with flexible five-player midfield.",
        slots: [
            slot("player-1", "FW"),
            slot("player-2", "FW"),
            slot("player-3", "MF"),
            slot("player-4", "MF"),
            slot("player-5", "MF"),
            slot("player-6", "MF"),
            slot("player-7", "MF"),
            slot("player-8", "DF"),
            slot("player-9", "DF"),
            slot("player-10", "DF"),
            slot("player-11", "GK"),
        ],
    },
    Formation {
        id: FormationId::Triangle433,
        name: "4-3-3 Triangle",
        summary: "Classic front triangle with a compact midfield.",
        slots: [
            slot("player-1", "FW"),
            slot("player-2", "FW"),
            slot("player-3", "FW"),
            slot("player-4", "MF"),
            slot("player-5", "MF"),
            slot("player-6", "MF"),
            slot("player-7", "DF"),
            slot("player-8", "DF"),
            slot("player-9", "DF"),
            slot("player-10", "DF"),
            slot("player-11", "GK"),
        ],
    },
    Formation {
        id: FormationId::Diamond442,
        name: "4-4-2 Diamond",
        summary: "Diamond midfield feeding dual forwards.",
        slots: [
            slot("player-1", "FW"),
            slot("player-2", "MF"),
            slot("player-3", "FW"),
            slot("player-4", "MF"),
            slot("player-5", "MF"),
            slot("player-6", "MF"),
            slot("player-7", "DF"),
            slot("player-8", "DF"),
            slot("player-9", "DF"),
            slot("player-10", "DF"),
            slot("player-11", "GK"),
        ],
    },
    Formation {
        id: FormationId::Box442,
        name: "4-4-2 Box",
        summary: "Box-shaped mids controlling central channels.",
        slots: [
            slot("player-1", "FW"),
            slot("player-2", "FW"),
            slot("player-3", "MF"),
            slot("player-4", "MF"),
            slot("player-5", "MF"),
            slot("player-6", "MF"),
            slot("player-7", "DF"),
            slot("player-8", "DF"),
            slot("player-9", "DF"),
            slot("player-11", "GK"),
            slot("player-10", "DF"),
        ],
    },
];
