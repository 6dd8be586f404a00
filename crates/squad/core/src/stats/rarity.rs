//! Slot rarity tiers and their attribute bonus curve.
//!
//! Each tier scales a single attribute by a percentage and then adds a flat
//! offset. Both columns of the table are non-decreasing along the ladder, which
//! makes the bonus monotonic for non-negative inputs.

/// Rarity ladder of a formation slot, lowest to highest.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SlotRarity {
    #[default]
    Normal,
    Growing,
    Advanced,
    Top,
    Legendary,
    Hero,
}

/// Bonus curve of one rarity tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RarityDefinition {
    pub rarity: SlotRarity,
    pub label: &'static str,
    /// Percentage added on top of the raw value (10 = +10%).
    pub percent: f64,
    /// Flat offset added after scaling.
    pub flat: f64,
}

static RARITY_TABLE: [RarityDefinition; 6] = [
    RarityDefinition {
        rarity: SlotRarity::Normal,
        label: "Normal",
        percent: 0.0,
        flat: 0.0,
    },
    RarityDefinition {
        rarity: SlotRarity::Growing,
        label: "Growing",
        percent: 5.0,
        flat: 0.0,
    },
    RarityDefinition {
        rarity: SlotRarity::Advanced,
        label: "Advanced",
        percent: 10.0,
        flat: 2.0,
    },
    RarityDefinition {
        rarity: SlotRarity::Top,
        label: "Top",
        percent: 15.0,
        flat: 4.0,
    },
    RarityDefinition {
        rarity: SlotRarity::Legendary,
        label: "Legendary",
        percent: 20.0,
        flat: 6.0,
    },
    RarityDefinition {
        rarity: SlotRarity::Hero,
        label: "Hero",
        percent: 30.0,
        flat: 10.0,
    },
];

impl SlotRarity {
    pub const LADDER: [SlotRarity; 6] = [
        SlotRarity::Normal,
        SlotRarity::Growing,
        SlotRarity::Advanced,
        SlotRarity::Top,
        SlotRarity::Legendary,
        SlotRarity::Hero,
    ];

    /// Bonus curve and display label of this tier.
    pub fn definition(self) -> &'static RarityDefinition {
        &RARITY_TABLE[self as usize]
    }
}

/// Apply the tier bonus to a single base attribute value.
///
/// `Normal` is the identity; higher tiers compute
/// `value × (100 + percent) / 100 + flat`.
pub fn apply_rarity_bonus(value: f64, rarity: SlotRarity) -> f64 {
    if rarity == SlotRarity::Normal {
        return value;
    }
    let definition = rarity.definition();
    value * (100.0 + definition.percent) / 100.0 + definition.flat
}
