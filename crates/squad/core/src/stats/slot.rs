//! Slot Stat Aggregator - per-character computation.
//!
//! FinalBase = Rarity(raw) + Equipment + Beans, per attribute
//! Power     = PowerFormula(FinalBase)
//!
//! Passive deltas are layered on afterwards by the resolver; this module only
//! seeds `final_power` with a copy of `power` and zeroed passive bonuses.

use super::attributes::{AttributeBonuses, BaseAttribute, BaseStats};
use super::power::{PowerStats, compute_power};
use super::rarity::apply_rarity_bonus;
use crate::env::{EquipmentOracle, PlayerRecord};
use crate::squad::SlotConfig;

/// Computed statistics of one occupied slot.
///
/// Never stored as ground truth: always re-derivable from
/// (player, slot config, squad-wide passive context).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SlotComputedStats {
    /// Final boosted base attributes.
    pub base: BaseStats,
    /// Power after rarity, equipment and beans (pre-passive).
    pub power: PowerStats,
    /// `power + passive_bonuses`.
    pub final_power: PowerStats,
    /// Equipment-only contribution per attribute.
    pub equipment_bonuses: AttributeBonuses,
    /// Bean-only contribution per attribute.
    pub bean_bonuses: AttributeBonuses,
    /// Passive-only contribution per power stat.
    pub passive_bonuses: PowerStats,
}

impl SlotComputedStats {
    /// Replace the passive layer with `delta` and re-derive `final_power`.
    pub fn apply_passive_bonuses(&mut self, delta: PowerStats) {
        self.passive_bonuses = delta;
        self.final_power = self.power.add(&delta);
    }
}

/// Combine a player's raw attributes with a slot configuration.
///
/// Empty equipment categories, unknown equipment ids and beans without an
/// attribute contribute nothing. Bean values are taken as stored; clamping
/// happens when the bean is assigned.
pub fn compute_slot_computed_stats<E>(
    player: &PlayerRecord,
    config: &SlotConfig,
    equipment: &E,
) -> SlotComputedStats
where
    E: EquipmentOracle + ?Sized,
{
    let with_rarity =
        BaseStats::from_fn(|attribute| apply_rarity_bonus(player.stats.get(attribute), config.rarity));

    let mut equipment_bonuses = AttributeBonuses::default();
    for (_, equipment_id) in config.equipments.iter() {
        match equipment.equipment(equipment_id) {
            Some(record) => equipment_bonuses += record.stats,
            None => tracing::trace!(%equipment_id, "skipping unknown equipment"),
        }
    }

    let mut bean_bonuses = AttributeBonuses::default();
    for bean in &config.beans {
        if let Some(attribute) = bean.attribute {
            *bean_bonuses.get_mut(attribute) += f64::from(bean.value());
        }
    }

    let base = BaseStats::from_fn(|attribute: BaseAttribute| {
        with_rarity.get(attribute) + equipment_bonuses.get(attribute) + bean_bonuses.get(attribute)
    });
    let power = compute_power(&base);

    SlotComputedStats {
        base,
        power,
        final_power: power,
        equipment_bonuses,
        bean_bonuses,
        passive_bonuses: PowerStats::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Catalog, EquipmentCategory, EquipmentId, EquipmentRecord, PlayerId};
    use crate::squad::SlotBean;
    use crate::stats::rarity::SlotRarity;

    fn striker() -> PlayerRecord {
        PlayerRecord::builder(PlayerId(7), "Axel Blaze")
            .element("Fire")
            .position("FW")
            .stats(BaseStats::new(120.0, 80.0, 70.0, 40.0, 60.0, 90.0, 50.0))
            .build()
    }

    fn catalog() -> Catalog {
        Catalog::builder()
            .equipment(EquipmentRecord::new(
                EquipmentId::from("boots-1"),
                "Spike Boots",
                EquipmentCategory::Boots,
                BaseStats::new(10.0, 0.0, 0.0, 0.0, 0.0, 5.0, 0.0),
            ))
            .equipment(EquipmentRecord::new(
                EquipmentId::from("pendant-1"),
                "Lucky Pendant",
                EquipmentCategory::Pendants,
                BaseStats::new(0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 4.0),
            ))
            .build()
    }

    #[test]
    fn empty_config_yields_raw_attributes() {
        let player = striker();
        let stats = compute_slot_computed_stats(&player, &SlotConfig::default(), &catalog());

        assert_eq!(stats.base, player.stats);
        assert_eq!(stats.power, player.power);
        assert_eq!(stats.final_power, stats.power);
        assert!(stats.passive_bonuses.is_zero());
        assert_eq!(stats.equipment_bonuses, AttributeBonuses::default());
        assert_eq!(stats.bean_bonuses, AttributeBonuses::default());
    }

    #[test]
    fn equipment_and_beans_stack_on_rarity() {
        let player = striker();
        let mut config = SlotConfig::default();
        config.rarity = SlotRarity::Advanced;
        config.equipments.set(EquipmentCategory::Boots, Some(EquipmentId::from("boots-1")));
        config
            .equipments
            .set(EquipmentCategory::Pendants, Some(EquipmentId::from("pendant-1")));
        config.beans[0] = SlotBean::new(Some(BaseAttribute::Kick), 40);
        config.beans[1] = SlotBean::new(Some(BaseAttribute::Kick), 20);
        config.beans[2] = SlotBean::new(None, 198);

        let stats = compute_slot_computed_stats(&player, &config, &catalog());

        // Kick: 120 × 1.1 + 2 = 134, +10 boots, +60 beans = 204
        assert_eq!(stats.base.kick, 204.0);
        // Control: 80 × 1.1 + 2 = 90, +3 pendant = 93
        assert_eq!(stats.base.control, 93.0);
        assert_eq!(stats.equipment_bonuses.kick, 10.0);
        assert_eq!(stats.equipment_bonuses.agility, 5.0);
        assert_eq!(stats.equipment_bonuses.intelligence, 4.0);
        assert_eq!(stats.bean_bonuses.kick, 60.0);
        assert_eq!(stats.bean_bonuses.total(), 60.0);
        assert_eq!(stats.power, compute_power(&stats.base));
    }

    #[test]
    fn unknown_equipment_is_ignored() {
        let player = striker();
        let mut config = SlotConfig::default();
        config.equipments.set(EquipmentCategory::Misc, Some(EquipmentId::from("gone")));

        let stats = compute_slot_computed_stats(&player, &config, &catalog());
        assert_eq!(stats.base, player.stats);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let player = striker();
        let mut config = SlotConfig::default();
        config.rarity = SlotRarity::Hero;
        config.beans[2] = SlotBean::new(Some(BaseAttribute::Agility), 77);

        let first = compute_slot_computed_stats(&player, &config, &catalog());
        let second = compute_slot_computed_stats(&player, &config, &catalog());
        assert_eq!(first, second);
        assert_eq!(first.base.total().to_bits(), second.base.total().to_bits());
    }

    #[test]
    fn passive_layer_rederives_final_power() {
        let player = striker();
        let mut stats = compute_slot_computed_stats(&player, &SlotConfig::default(), &catalog());

        let mut delta = PowerStats::zero();
        delta.shoot_at = 12.5;
        stats.apply_passive_bonuses(delta);

        assert_eq!(stats.final_power.shoot_at, stats.power.shoot_at + 12.5);
        assert_eq!(stats.final_power.kp, stats.power.kp);
        assert_eq!(stats.passive_bonuses, delta);
    }
}
