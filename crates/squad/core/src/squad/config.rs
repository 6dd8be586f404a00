//! Per-slot configuration: rarity, equipment, beans and passive assignments.
//!
//! This is the only mutable input to the engine. The engine reads it; the
//! squad layer ([`super::Squad`]) is the only writer.

use crate::config::PlannerConfig;
use crate::env::{EquipmentCategory, EquipmentId, PassiveId};
use crate::stats::{BaseAttribute, SlotRarity};

/// A stat bean: an optional target attribute plus a clamped magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawSlotBean"))]
pub struct SlotBean {
    pub attribute: Option<BaseAttribute>,
    value: u16,
}

/// Wire form of [`SlotBean`]; the value is clamped on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSlotBean {
    attribute: Option<BaseAttribute>,
    value: u16,
}

#[cfg(feature = "serde")]
impl From<RawSlotBean> for SlotBean {
    fn from(raw: RawSlotBean) -> Self {
        Self {
            attribute: raw.attribute,
            ..Self::unassigned(raw.value)
        }
    }
}

impl SlotBean {
    /// Create a bean, clamping `value` into `[0, MAX_BEAN_POINTS]`.
    pub fn new(attribute: Option<BaseAttribute>, value: i32) -> Self {
        Self {
            attribute,
            value: Self::clamp_value(value),
        }
    }

    /// A bean with no attribute, pre-filled with `value`.
    pub fn unassigned(value: u16) -> Self {
        Self {
            attribute: None,
            value: value.min(PlannerConfig::MAX_BEAN_POINTS),
        }
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn clamp_value(value: i32) -> u16 {
        value.clamp(0, i32::from(PlannerConfig::MAX_BEAN_POINTS)) as u16
    }
}

impl Default for SlotBean {
    fn default() -> Self {
        Self::unassigned(PlannerConfig::DEFAULT_BEAN_VALUE)
    }
}

/// One item per equipment category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlotEquipments {
    pub boots: Option<EquipmentId>,
    pub bracelets: Option<EquipmentId>,
    pub pendants: Option<EquipmentId>,
    pub misc: Option<EquipmentId>,
}

impl SlotEquipments {
    pub fn get(&self, category: EquipmentCategory) -> Option<&EquipmentId> {
        match category {
            EquipmentCategory::Boots => self.boots.as_ref(),
            EquipmentCategory::Bracelets => self.bracelets.as_ref(),
            EquipmentCategory::Pendants => self.pendants.as_ref(),
            EquipmentCategory::Misc => self.misc.as_ref(),
        }
    }

    /// Replace the item in `category`, returning the previous one.
    pub fn set(
        &mut self,
        category: EquipmentCategory,
        equipment: Option<EquipmentId>,
    ) -> Option<EquipmentId> {
        let slot = match category {
            EquipmentCategory::Boots => &mut self.boots,
            EquipmentCategory::Bracelets => &mut self.bracelets,
            EquipmentCategory::Pendants => &mut self.pendants,
            EquipmentCategory::Misc => &mut self.misc,
        };
        core::mem::replace(slot, equipment)
    }

    /// Equipped items, skipping empty categories.
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentCategory, &EquipmentId)> {
        EquipmentCategory::ALL
            .into_iter()
            .filter_map(move |category| self.get(category).map(|id| (category, id)))
    }
}

/// A chosen passive plus the user-entered magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PassiveAssignment {
    pub passive_id: Option<PassiveId>,
    pub value: f64,
}

impl PassiveAssignment {
    pub fn new(passive_id: PassiveId, value: f64) -> Self {
        Self {
            passive_id: Some(passive_id),
            value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.passive_id.is_none()
    }
}

/// Addresses one of a slot's six passive assignments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PassiveSlot {
    /// Preset index, `0..PRESET_PASSIVE_SLOTS`.
    Preset(usize),
    Custom,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotPassives {
    pub presets: [PassiveAssignment; PlannerConfig::PRESET_PASSIVE_SLOTS],
    pub custom: PassiveAssignment,
}

impl SlotPassives {
    /// The five presets followed by the custom slot.
    pub fn iter(&self) -> impl Iterator<Item = &PassiveAssignment> {
        self.presets.iter().chain(core::iter::once(&self.custom))
    }

    pub fn get(&self, slot: PassiveSlot) -> Option<&PassiveAssignment> {
        match slot {
            PassiveSlot::Preset(index) => self.presets.get(index),
            PassiveSlot::Custom => Some(&self.custom),
        }
    }

    pub fn get_mut(&mut self, slot: PassiveSlot) -> Option<&mut PassiveAssignment> {
        match slot {
            PassiveSlot::Preset(index) => self.presets.get_mut(index),
            PassiveSlot::Custom => Some(&mut self.custom),
        }
    }
}

/// Complete configuration of one formation slot.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlotConfig {
    pub rarity: SlotRarity,
    pub equipments: SlotEquipments,
    pub beans: [SlotBean; PlannerConfig::BEAN_SLOTS],
    pub passives: SlotPassives,
}

impl SlotConfig {
    /// Default configuration with beans pre-filled to `bean_value`.
    pub fn with_bean_value(bean_value: u16) -> Self {
        Self {
            beans: [SlotBean::unassigned(bean_value); PlannerConfig::BEAN_SLOTS],
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PassiveKind;

    #[test]
    fn bean_values_are_clamped_on_assignment() {
        assert_eq!(SlotBean::new(Some(BaseAttribute::Kick), 500).value(), 198);
        assert_eq!(SlotBean::new(Some(BaseAttribute::Kick), -3).value(), 0);
        assert_eq!(SlotBean::new(None, 42).value(), 42);
    }

    #[test]
    fn default_config_is_empty() {
        let config = SlotConfig::default();
        assert_eq!(config.rarity, SlotRarity::Normal);
        assert_eq!(config.equipments.iter().count(), 0);
        assert!(config.beans.iter().all(|bean| bean.attribute.is_none()));
        assert!(config.beans.iter().all(|bean| bean.value() == 80));
        assert_eq!(config.passives.iter().count(), 6);
        assert!(config.passives.iter().all(PassiveAssignment::is_empty));
    }

    #[test]
    fn equipment_set_returns_previous_item() {
        let mut equipments = SlotEquipments::default();
        assert_eq!(
            equipments.set(EquipmentCategory::Boots, Some(EquipmentId::from("a"))),
            None
        );
        assert_eq!(
            equipments.set(EquipmentCategory::Boots, Some(EquipmentId::from("b"))),
            Some(EquipmentId::from("a"))
        );
        let equipped: Vec<_> = equipments.iter().collect();
        assert_eq!(equipped, [(EquipmentCategory::Boots, &EquipmentId::from("b"))]);
    }

    #[test]
    fn passive_slots_address_presets_and_custom() {
        let mut passives = SlotPassives::default();
        let id = PassiveId::new(PassiveKind::Custom, 1);
        *passives.get_mut(PassiveSlot::Custom).unwrap() = PassiveAssignment::new(id, 5.0);

        assert!(passives.get(PassiveSlot::Preset(4)).is_some());
        assert!(passives.get(PassiveSlot::Preset(5)).is_none());
        assert_eq!(passives.iter().last().unwrap().passive_id, Some(id));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_beans_are_clamped() {
        let json = r#"{"beans": [
            {"attribute": "kick", "value": 500},
            {"attribute": null, "value": 120},
            {"attribute": null, "value": 198}
        ]}"#;
        let config: SlotConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.beans[0].attribute, Some(BaseAttribute::Kick));
        assert_eq!(config.beans[0].value(), 198);
        assert_eq!(config.beans[1].value(), 120);
        assert_eq!(config.beans[2].value(), 198);
    }

    #[test]
    fn custom_bean_default() {
        let config = SlotConfig::with_bean_value(120);
        assert!(config.beans.iter().all(|bean| bean.value() == 120));
    }
}
