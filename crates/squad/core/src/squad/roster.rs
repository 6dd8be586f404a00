//! Editable squads and the roster holding them.
//!
//! A [`Squad`] owns the slot layout, who sits where and every slot's
//! configuration. Edits are validated against the catalog and the layout;
//! evaluation is delegated to [`evaluate_squad`].

use std::collections::BTreeMap;

use super::config::{PassiveAssignment, PassiveSlot, SlotBean, SlotConfig};
use super::evaluate::evaluate_squad;
use super::formation::FormationId;
use super::slot::{SlotAssignment, SlotId, SlotKind, SquadSlot};
use crate::config::PlannerConfig;
use crate::env::{
    EquipmentCategory, EquipmentId, EquipmentOracle, PassiveId, PassiveKind, PassiveOracle,
    PlayerId, PlayerOracle,
};
use crate::error::SquadError;
use crate::passive::{CombinedPassive, ConditionKind, PassiveOptions, combine_team_passives};
use crate::stats::{BaseAttribute, SlotRarity};

/// One named squad: a slot layout plus mutable assignments.
///
/// Squads built from a [`FormationId`] can switch formation; squads over a
/// custom layout report `formation() == None` until they do.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Squad {
    name: String,
    formation: Option<FormationId>,
    slots: Vec<SquadSlot>,
    players: BTreeMap<SlotId, PlayerId>,
    configs: BTreeMap<SlotId, SlotConfig>,
    passive_options: PassiveOptions,
    default_bean_value: u16,
}

impl Squad {
    /// Create an empty squad over `slots`. Slot ids must be unique.
    pub fn new(
        name: impl Into<String>,
        slots: Vec<SquadSlot>,
        config: &PlannerConfig,
    ) -> Result<Self, SquadError> {
        for (index, slot) in slots.iter().enumerate() {
            if slots[..index].iter().any(|earlier| earlier.id == slot.id) {
                return Err(SquadError::DuplicateSlot(slot.id.clone()));
            }
        }

        Ok(Self::with_layout(name.into(), None, slots, config))
    }

    /// Create an empty squad laid out as `formation`.
    pub fn from_formation(
        name: impl Into<String>,
        formation: FormationId,
        config: &PlannerConfig,
    ) -> Self {
        let slots = formation.formation().layout();
        Self::with_layout(name.into(), Some(formation), slots, config)
    }

    fn with_layout(
        name: String,
        formation: Option<FormationId>,
        slots: Vec<SquadSlot>,
        config: &PlannerConfig,
    ) -> Self {
        Self {
            name,
            formation,
            slots,
            players: BTreeMap::new(),
            configs: BTreeMap::new(),
            passive_options: PassiveOptions::default(),
            default_bean_value: config.bean_default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn formation(&self) -> Option<FormationId> {
        self.formation
    }

    pub fn slots(&self) -> &[SquadSlot] {
        &self.slots
    }

    pub fn player_in(&self, slot_id: &SlotId) -> Option<PlayerId> {
        self.players.get(slot_id).copied()
    }

    /// Configuration of `slot_id`, or a fresh default if it was never edited.
    pub fn slot_config(&self, slot_id: &SlotId) -> SlotConfig {
        self.configs
            .get(slot_id)
            .cloned()
            .unwrap_or_else(|| SlotConfig::with_bean_value(self.default_bean_value))
    }

    pub fn passive_options(&self) -> &PassiveOptions {
        &self.passive_options
    }

    fn slot(&self, slot_id: &SlotId) -> Result<&SquadSlot, SquadError> {
        self.slots
            .iter()
            .find(|slot| &slot.id == slot_id)
            .ok_or_else(|| SquadError::UnknownSlot(slot_id.clone()))
    }

    fn config_mut(&mut self, slot_id: &SlotId) -> Result<&mut SlotConfig, SquadError> {
        self.slot(slot_id)?;
        let bean_value = self.default_bean_value;
        Ok(self
            .configs
            .entry(slot_id.clone())
            .or_insert_with(|| SlotConfig::with_bean_value(bean_value)))
    }

    // ===== layout =====

    /// Re-lay the squad out as `formation`.
    ///
    /// Players and configurations carry over for every slot id the new layout
    /// still has, which always includes the bench and staff slots. Returns
    /// the players whose slot disappeared, in slot id order.
    pub fn change_formation(&mut self, formation: FormationId) -> Vec<PlayerId> {
        let slots = formation.formation().layout();
        let kept = |slot_id: &SlotId| slots.iter().any(|slot| &slot.id == slot_id);

        let mut displaced = Vec::new();
        self.players.retain(|slot_id, player_id| {
            let keep = kept(slot_id);
            if !keep {
                displaced.push(*player_id);
            }
            keep
        });
        self.configs.retain(|slot_id, _| kept(slot_id));

        self.slots = slots;
        self.formation = Some(formation);
        tracing::debug!(%formation, displaced = displaced.len(), "changed formation");
        displaced
    }

    /// Empty every slot and drop every slot configuration.
    ///
    /// Layout, name and passive options are untouched.
    pub fn clear(&mut self) {
        self.players.clear();
        self.configs.clear();
    }

    // ===== occupants =====

    /// Place a player in a slot, returning the previous occupant.
    ///
    /// A player occupies at most one slot: if they already sit elsewhere in
    /// this squad, that slot is vacated.
    pub fn assign_player<P>(
        &mut self,
        slot_id: &SlotId,
        player_id: PlayerId,
        players: &P,
    ) -> Result<Option<PlayerId>, SquadError>
    where
        P: PlayerOracle + ?Sized,
    {
        self.slot(slot_id)?;
        if players.player(player_id).is_none() {
            return Err(SquadError::UnknownPlayer(player_id));
        }

        self.players
            .retain(|other, occupant| other == slot_id || *occupant != player_id);
        let previous = self.players.insert(slot_id.clone(), player_id);
        tracing::debug!(slot = %slot_id, player = %player_id, "assigned player");
        Ok(previous)
    }

    pub fn clear_player(&mut self, slot_id: &SlotId) -> Result<Option<PlayerId>, SquadError> {
        self.slot(slot_id)?;
        Ok(self.players.remove(slot_id))
    }

    // ===== slot configuration =====

    pub fn set_rarity(&mut self, slot_id: &SlotId, rarity: SlotRarity) -> Result<(), SquadError> {
        self.config_mut(slot_id)?.rarity = rarity;
        Ok(())
    }

    /// Equip an item into its category, returning the item it replaced.
    pub fn equip<E>(
        &mut self,
        slot_id: &SlotId,
        category: EquipmentCategory,
        equipment_id: EquipmentId,
        equipment: &E,
    ) -> Result<Option<EquipmentId>, SquadError>
    where
        E: EquipmentOracle + ?Sized,
    {
        let record = equipment
            .equipment(&equipment_id)
            .ok_or_else(|| SquadError::UnknownEquipment(equipment_id.clone()))?;
        if record.category != category {
            return Err(SquadError::EquipmentCategoryMismatch {
                equipment: equipment_id,
                expected: category,
                actual: record.category,
            });
        }
        Ok(self
            .config_mut(slot_id)?
            .equipments
            .set(category, Some(equipment_id)))
    }

    pub fn unequip(
        &mut self,
        slot_id: &SlotId,
        category: EquipmentCategory,
    ) -> Result<Option<EquipmentId>, SquadError> {
        Ok(self.config_mut(slot_id)?.equipments.set(category, None))
    }

    /// Set one bean. `value` is clamped into `[0, MAX_BEAN_POINTS]`.
    pub fn set_bean(
        &mut self,
        slot_id: &SlotId,
        index: usize,
        attribute: Option<BaseAttribute>,
        value: i32,
    ) -> Result<SlotBean, SquadError> {
        let config = self.config_mut(slot_id)?;
        let bean = config
            .beans
            .get_mut(index)
            .ok_or(SquadError::BeanIndexOutOfRange {
                index,
                max: PlannerConfig::BEAN_SLOTS - 1,
            })?;
        *bean = SlotBean::new(attribute, value);
        Ok(*bean)
    }

    /// Assign a passive to a preset or the custom slot.
    ///
    /// Presets draw from the pool of the slot's kind; the custom slot only
    /// accepts custom passives.
    pub fn set_passive<P>(
        &mut self,
        slot_id: &SlotId,
        which: PassiveSlot,
        passive_id: PassiveId,
        value: f64,
        passives: &P,
    ) -> Result<(), SquadError>
    where
        P: PassiveOracle + ?Sized,
    {
        let kind = self.slot(slot_id)?.kind;
        if passives.passive(&passive_id).is_none() {
            return Err(SquadError::UnknownPassive(passive_id));
        }
        let pool = match which {
            PassiveSlot::Preset(_) => kind.passive_pool(),
            PassiveSlot::Custom => PassiveKind::Custom,
        };
        if passive_id.kind != pool {
            return Err(SquadError::PassiveNotInPool {
                passive: passive_id,
                pool,
            });
        }

        *self.passive_entry(slot_id, which)? = PassiveAssignment::new(passive_id, value);
        Ok(())
    }

    pub fn clear_passive(&mut self, slot_id: &SlotId, which: PassiveSlot) -> Result<(), SquadError> {
        *self.passive_entry(slot_id, which)? = PassiveAssignment::default();
        Ok(())
    }

    fn passive_entry(
        &mut self,
        slot_id: &SlotId,
        which: PassiveSlot,
    ) -> Result<&mut PassiveAssignment, SquadError> {
        let index = match which {
            PassiveSlot::Preset(index) => index,
            PassiveSlot::Custom => 0,
        };
        self.config_mut(slot_id)?
            .passives
            .get_mut(which)
            .ok_or(SquadError::PresetIndexOutOfRange {
                index,
                max: PlannerConfig::PRESET_PASSIVE_SLOTS - 1,
            })
    }

    // ===== passive options =====

    /// Toggle a match condition. Returns whether the set changed.
    pub fn set_condition(&mut self, kind: ConditionKind, active: bool) -> bool {
        let conditions = &mut self.passive_options.active_conditions;
        if active {
            conditions.insert(kind)
        } else {
            conditions.remove(&kind)
        }
    }

    pub fn set_passives_enabled(&mut self, enabled: bool) {
        self.passive_options.enabled = enabled;
    }

    // ===== evaluation =====

    /// Slot assignments in layout order, without computed stats.
    ///
    /// Players missing from the catalog are treated as empty slots.
    pub fn assignments<'a, P>(&self, players: &'a P) -> Vec<SlotAssignment<'a>>
    where
        P: PlayerOracle + ?Sized,
    {
        self.slots
            .iter()
            .map(|slot| {
                let player = self
                    .players
                    .get(&slot.id)
                    .and_then(|player_id| players.player(*player_id));
                SlotAssignment::new(slot.clone(), player, self.slot_config(&slot.id))
            })
            .collect()
    }

    /// Assignments with computed stats and passives applied.
    pub fn evaluate<'a, C>(&self, catalog: &'a C) -> Vec<SlotAssignment<'a>>
    where
        C: PlayerOracle + EquipmentOracle + PassiveOracle + ?Sized,
    {
        evaluate_squad(self.assignments(catalog), catalog, &self.passive_options)
    }

    pub fn team_passives<C>(&self, catalog: &C) -> Vec<CombinedPassive>
    where
        C: PlayerOracle + PassiveOracle + ?Sized,
    {
        combine_team_passives(&self.assignments(catalog), catalog)
    }

    /// Slots of `kind` in layout order.
    pub fn slots_of(&self, kind: SlotKind) -> impl Iterator<Item = &SquadSlot> {
        self.slots.iter().filter(move |slot| slot.kind == kind)
    }
}

/// Up to [`PlannerConfig::MAX_SQUADS`] squads.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SquadRoster {
    squads: Vec<Squad>,
    max_squads: usize,
}

impl SquadRoster {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            squads: Vec::new(),
            max_squads: config.squad_limit(),
        }
    }

    /// Append a squad, returning its index.
    pub fn add_squad(&mut self, squad: Squad) -> Result<usize, SquadError> {
        if self.squads.len() >= self.max_squads {
            return Err(SquadError::SquadLimitReached {
                max: self.max_squads,
            });
        }
        self.squads.push(squad);
        Ok(self.squads.len() - 1)
    }

    pub fn remove_squad(&mut self, index: usize) -> Result<Squad, SquadError> {
        if index >= self.squads.len() {
            return Err(SquadError::SquadNotFound(index));
        }
        Ok(self.squads.remove(index))
    }

    pub fn squad(&self, index: usize) -> Option<&Squad> {
        self.squads.get(index)
    }

    pub fn squad_mut(&mut self, index: usize) -> Option<&mut Squad> {
        self.squads.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Squad> {
        self.squads.iter()
    }

    pub fn len(&self) -> usize {
        self.squads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squads.is_empty()
    }

    pub fn max_squads(&self) -> usize {
        self.max_squads
    }
}
