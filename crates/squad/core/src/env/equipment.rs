use core::fmt;

use crate::stats::AttributeBonuses;

/// Dataset identifier of an equipment item.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EquipmentId(pub String);

impl From<&str> for EquipmentId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for EquipmentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Equipment category; a slot holds at most one item per category.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum EquipmentCategory {
    Boots,
    Bracelets,
    Pendants,
    Misc,
}

impl EquipmentCategory {
    pub const ALL: [EquipmentCategory; 4] = [
        EquipmentCategory::Boots,
        EquipmentCategory::Bracelets,
        EquipmentCategory::Pendants,
        EquipmentCategory::Misc,
    ];
}

/// Immutable equipment record: a flat bonus to each base attribute.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentRecord {
    pub id: EquipmentId,
    pub name: String,
    pub category: EquipmentCategory,
    pub shop: String,
    pub stats: AttributeBonuses,
}

impl EquipmentRecord {
    pub fn new(
        id: EquipmentId,
        name: impl Into<String>,
        category: EquipmentCategory,
        stats: AttributeBonuses,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            shop: String::new(),
            stats,
        }
    }

    pub fn with_shop(mut self, shop: impl Into<String>) -> Self {
        self.shop = shop.into();
        self
    }
}
