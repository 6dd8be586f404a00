//! Squad evaluation: slot aggregation followed by the passive pass.

use super::slot::SlotAssignment;
use crate::env::{EquipmentOracle, PassiveOracle};
use crate::passive::{PassiveOptions, compute_passive_impacts};
use crate::stats::compute_slot_computed_stats;

/// Recompute every assignment's stats and layer squad passives on top.
///
/// Occupied slots always get fresh computed stats; previous values are
/// discarded. Empty slots end up with `computed == None`. The passive pass
/// reads pre-passive power only, so `final_power == power + passive_bonuses`
/// holds for every occupied slot.
pub fn evaluate_squad<'a, C>(
    assignments: Vec<SlotAssignment<'a>>,
    catalog: &C,
    options: &PassiveOptions,
) -> Vec<SlotAssignment<'a>>
where
    C: EquipmentOracle + PassiveOracle + ?Sized,
{
    let mut evaluated: Vec<SlotAssignment<'a>> = assignments
        .into_iter()
        .map(|mut assignment| {
            assignment.computed = assignment
                .player
                .map(|player| compute_slot_computed_stats(player, &assignment.config, catalog));
            assignment
        })
        .collect();

    let impacts = compute_passive_impacts(&evaluated, catalog, options);
    tracing::trace!(affected = impacts.len(), "passive impacts resolved");

    for assignment in &mut evaluated {
        if let (Some(computed), Some(delta)) =
            (assignment.computed.as_mut(), impacts.get(&assignment.slot.id))
        {
            computed.apply_passive_bonuses(*delta);
        }
    }
    evaluated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Catalog, PassiveId, PassiveKind, PassiveRecord, PlayerId, PlayerRecord};
    use crate::passive::{EffectDirection, EffectMode, EffectScope, PassiveEffect, StatGroup};
    use crate::squad::{PassiveAssignment, SlotConfig, SquadSlot};
    use crate::stats::{BaseStats, PowerStat};

    fn player(id: u32, position: &str) -> PlayerRecord {
        PlayerRecord::builder(PlayerId(id), format!("Player {id}"))
            .element("Fire")
            .position(position)
            .stats(BaseStats::new(90.0, 70.0, 60.0, 55.0, 65.0, 75.0, 50.0))
            .build()
    }

    fn team_boost() -> PassiveRecord {
        PassiveRecord::new(PassiveId::new(PassiveKind::Player, 1), "Team power +%").with_effect(
            PassiveEffect::new(
                EffectScope::Team,
                StatGroup::All,
                EffectMode::Percent,
                EffectDirection::Increase,
            ),
        )
    }

    #[test]
    fn final_power_is_power_plus_passive_bonuses() {
        let fw = player(1, "FW");
        let gk = player(2, "GK");
        let catalog = Catalog::builder().passive(team_boost()).build();

        let mut config = SlotConfig::default();
        config.passives.presets[0] =
            PassiveAssignment::new(PassiveId::new(PassiveKind::Player, 1), 10.0);

        let evaluated = evaluate_squad(
            vec![
                SlotAssignment::new(SquadSlot::starter("fw-1", "FW"), Some(&fw), config),
                SlotAssignment::new(SquadSlot::starter("gk", "GK"), Some(&gk), SlotConfig::default()),
                SlotAssignment::new(SquadSlot::starter("df-1", "DF"), None, SlotConfig::default()),
            ],
            &catalog,
            &PassiveOptions::enabled(),
        );

        assert!(evaluated[2].computed.is_none());
        for assignment in &evaluated[..2] {
            let computed = assignment.computed.as_ref().unwrap();
            assert!(!computed.passive_bonuses.is_zero());
            for stat in PowerStat::ALL {
                assert_eq!(
                    computed.final_power.get(stat),
                    computed.power.get(stat) + computed.passive_bonuses.get(stat)
                );
                let expected = computed.power.get(stat) * 0.1;
                assert!((computed.passive_bonuses.get(stat) - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn disabled_passives_leave_final_power_untouched() {
        let fw = player(1, "FW");
        let catalog = Catalog::builder().passive(team_boost()).build();
        let mut config = SlotConfig::default();
        config.passives.custom = PassiveAssignment::new(PassiveId::new(PassiveKind::Player, 1), 25.0);

        let evaluated = evaluate_squad(
            vec![SlotAssignment::new(SquadSlot::starter("fw-1", "FW"), Some(&fw), config)],
            &catalog,
            &PassiveOptions::default(),
        );

        let computed = evaluated[0].computed.as_ref().unwrap();
        assert_eq!(computed.final_power, computed.power);
        assert!(computed.passive_bonuses.is_zero());
    }

    #[test]
    fn evaluation_is_repeatable() {
        let fw = player(1, "FW");
        let catalog = Catalog::builder().passive(team_boost()).build();
        let mut config = SlotConfig::default();
        config.passives.presets[2] =
            PassiveAssignment::new(PassiveId::new(PassiveKind::Player, 1), 7.5);
        let assignments = vec![SlotAssignment::new(
            SquadSlot::starter("fw-1", "FW"),
            Some(&fw),
            config,
        )];

        let once = evaluate_squad(assignments.clone(), &catalog, &PassiveOptions::enabled());
        let twice = evaluate_squad(once.clone(), &catalog, &PassiveOptions::enabled());
        assert_eq!(once[0].computed, twice[0].computed);
    }
}
