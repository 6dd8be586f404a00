//! Passive Impact Resolver.
//!
//! Walks every passive assigned to an on-pitch slot, resolves each effect's
//! scope to a set of targets and accumulates a per-slot power delta.
//!
//! Percent effects are always taken against the target's pre-passive power,
//! so passives never compound on each other and the result does not depend on
//! iteration order.

use std::collections::BTreeMap;

use super::condition::ActiveConditions;
use super::effect::{EffectMode, EffectScope, PassiveEffect};
use crate::env::{PassiveOracle, TeamPosition};
use crate::squad::{SlotAssignment, SlotConfig, SlotId};
use crate::stats::PowerStats;

/// Caller-controlled switches for passive evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PassiveOptions {
    /// Passives contribute nothing while disabled.
    pub enabled: bool,
    pub active_conditions: ActiveConditions,
}

impl PassiveOptions {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            active_conditions: ActiveConditions::new(),
        }
    }

    pub fn with_conditions(mut self, active_conditions: ActiveConditions) -> Self {
        self.active_conditions = active_conditions;
        self
    }
}

/// Passive power delta per affected slot. Slots nothing reached are absent.
pub type PassiveImpactMap = BTreeMap<SlotId, PowerStats>;

/// An on-pitch member eligible to source or receive passive effects.
struct Member<'s> {
    slot_id: &'s SlotId,
    config: &'s SlotConfig,
    power: &'s PowerStats,
    element: String,
    position: TeamPosition,
}

/// Compute the passive delta of every on-pitch slot.
///
/// Reserve slots, empty slots and slots without computed stats neither source
/// nor receive effects.
pub fn compute_passive_impacts<P>(
    assignments: &[SlotAssignment<'_>],
    passives: &P,
    options: &PassiveOptions,
) -> PassiveImpactMap
where
    P: PassiveOracle + ?Sized,
{
    let mut impacts = PassiveImpactMap::new();
    if !options.enabled {
        return impacts;
    }

    let members: Vec<Member<'_>> = assignments
        .iter()
        .filter(|assignment| !assignment.is_reserve())
        .filter_map(|assignment| {
            let player = assignment.player?;
            let computed = assignment.computed.as_ref()?;
            Some(Member {
                slot_id: &assignment.slot.id,
                config: &assignment.config,
                power: &computed.power,
                element: player.normalized_element(),
                position: player.team_position(),
            })
        })
        .collect();

    for (source_index, source) in members.iter().enumerate() {
        for entry in source.config.passives.iter() {
            let Some(passive_id) = entry.passive_id else {
                continue;
            };
            if entry.value == 0.0 {
                continue;
            }
            let Some(record) = passives.passive(&passive_id) else {
                tracing::trace!(%passive_id, slot = %source.slot_id, "skipping unknown passive");
                continue;
            };

            for effect in &record.effects {
                if !effect.is_active(&options.active_conditions) {
                    continue;
                }
                if effect.stat.power_stats().is_none() {
                    tracing::trace!(%passive_id, stat = %effect.stat, "stat group has no power keys");
                    continue;
                }

                let signed = entry.value * effect.direction.sign();
                if signed == 0.0 {
                    continue;
                }

                // Every reached target gets an entry, even when its delta is zero.
                for target_index in resolve_targets(&effect.scope, source_index, &members) {
                    let target = &members[target_index];
                    let delta = effect_delta(effect, signed, target.power);
                    impacts
                        .entry(target.slot_id.clone())
                        .or_insert_with(PowerStats::zero)
                        .accumulate(&delta);
                }
            }
        }
    }

    impacts
}

/// Indices of the members `scope` reaches from `source_index`.
fn resolve_targets(scope: &EffectScope, source_index: usize, members: &[Member<'_>]) -> Vec<usize> {
    let source = &members[source_index];
    let others = || (0..members.len()).filter(move |index| *index != source_index);

    match scope {
        EffectScope::SelfOnly => vec![source_index],
        EffectScope::Team => (0..members.len()).collect(),
        EffectScope::NearbyAllies | EffectScope::Other(_) => others().collect(),
        EffectScope::AlliesSameElement => others()
            .filter(|index| {
                !source.element.is_empty() && members[*index].element == source.element
            })
            .collect(),
        EffectScope::AlliesDifferentElement => others()
            .filter(|index| members[*index].element != source.element)
            .collect(),
        EffectScope::AlliesSamePosition => others()
            .filter(|index| members[*index].position == source.position)
            .collect(),
        EffectScope::AlliesDifferentPosition => others()
            .filter(|index| members[*index].position != source.position)
            .collect(),
        EffectScope::AlliedMf => with_position(members, TeamPosition::Md),
        EffectScope::AlliedDf => with_position(members, TeamPosition::Df),
        EffectScope::AlliedGk => with_position(members, TeamPosition::Gk),
        EffectScope::SubbedOnPlayer => Vec::new(),
    }
}

fn with_position(members: &[Member<'_>], position: TeamPosition) -> Vec<usize> {
    (0..members.len())
        .filter(|index| members[*index].position == position)
        .collect()
}

/// Delta a single effect with signed magnitude `signed` contributes to one target.
fn effect_delta(effect: &PassiveEffect, signed: f64, target_power: &PowerStats) -> PowerStats {
    let mut delta = PowerStats::zero();
    let Some(keys) = effect.stat.power_stats() else {
        return delta;
    };

    for &key in keys {
        *delta.get_mut(key) += match effect.mode {
            EffectMode::Percent => target_power.get(key) * signed / 100.0,
            EffectMode::Flat => signed,
        };
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{
        Catalog, PassiveId, PassiveKind, PassiveRecord, PlayerId, PlayerRecord,
    };
    use crate::passive::{ConditionKind, EffectDirection, StatGroup};
    use crate::squad::{PassiveAssignment, SlotKind, SquadSlot, evaluate_squad};
    use crate::stats::{BaseStats, PowerStat};

    fn player(id: u32, element: &str, position: &str) -> PlayerRecord {
        PlayerRecord::builder(PlayerId(id), format!("Player {id}"))
            .element(element)
            .position(position)
            .stats(BaseStats::new(100.0, 80.0, 60.0, 50.0, 70.0, 90.0, 40.0))
            .build()
    }

    fn passive(number: u32, scope: EffectScope, stat: StatGroup, mode: EffectMode) -> PassiveRecord {
        PassiveRecord::new(PassiveId::new(PassiveKind::Player, number), format!("p{number} +%"))
            .with_effect(PassiveEffect::new(scope, stat, mode, EffectDirection::Increase))
    }

    fn assignment<'a>(
        id: &str,
        kind: SlotKind,
        player: &'a PlayerRecord,
        passives: &[(u32, f64)],
    ) -> SlotAssignment<'a> {
        let mut config = SlotConfig::default();
        for (index, (number, value)) in passives.iter().enumerate() {
            config.passives.presets[index] =
                PassiveAssignment::new(PassiveId::new(PassiveKind::Player, *number), *value);
        }
        SlotAssignment::new(SquadSlot::new(id, kind, id), Some(player), config)
    }

    fn impacts_for(
        assignments: Vec<SlotAssignment<'_>>,
        catalog: &Catalog,
        options: &PassiveOptions,
    ) -> PassiveImpactMap {
        // Computed stats without passives; the resolver reads pre-passive power.
        let evaluated = evaluate_squad(assignments, catalog, &PassiveOptions::default());
        compute_passive_impacts(&evaluated, catalog, options)
    }

    fn affected(impacts: &PassiveImpactMap) -> Vec<&str> {
        impacts.keys().map(|id| id.0.as_str()).collect()
    }

    #[test]
    fn allies_same_element_skips_source_and_reserves() {
        let a = player(1, "Fire", "FW");
        let b = player(2, "fire", "MF");
        let c = player(3, "Wind", "DF");
        let d = player(4, "Fire", "FW");
        let catalog = Catalog::builder()
            .passive(passive(1, EffectScope::AlliesSameElement, StatGroup::ShotAt, EffectMode::Flat))
            .build();

        let impacts = impacts_for(
            vec![
                assignment("a", SlotKind::Starter, &a, &[(1, 10.0)]),
                assignment("b", SlotKind::Starter, &b, &[]),
                assignment("c", SlotKind::Starter, &c, &[]),
                assignment("d", SlotKind::Reserve, &d, &[]),
            ],
            &catalog,
            &PassiveOptions::enabled(),
        );

        assert_eq!(affected(&impacts), ["b"]);
        assert_eq!(impacts[&SlotId::from("b")].shoot_at, 10.0);
        assert_eq!(impacts[&SlotId::from("b")].focus_at, 0.0);
    }

    #[test]
    fn allies_same_element_requires_an_element() {
        let a = player(1, "", "FW");
        let b = player(2, "", "MF");
        let catalog = Catalog::builder()
            .passive(passive(1, EffectScope::AlliesSameElement, StatGroup::ShotAt, EffectMode::Flat))
            .build();

        let impacts = impacts_for(
            vec![
                assignment("a", SlotKind::Starter, &a, &[(1, 10.0)]),
                assignment("b", SlotKind::Starter, &b, &[]),
            ],
            &catalog,
            &PassiveOptions::enabled(),
        );
        assert!(impacts.is_empty());
    }

    #[test]
    fn allied_midfielders_include_the_source() {
        let a = player(1, "Fire", "MF");
        let b = player(2, "Wind", "MD");
        let c = player(3, "Wood", "FW");
        let catalog = Catalog::builder()
            .passive(passive(1, EffectScope::AlliedMf, StatGroup::Defense, EffectMode::Flat))
            .build();

        let impacts = impacts_for(
            vec![
                assignment("a", SlotKind::Starter, &a, &[(1, 3.0)]),
                assignment("b", SlotKind::Starter, &b, &[]),
                assignment("c", SlotKind::Starter, &c, &[]),
            ],
            &catalog,
            &PassiveOptions::enabled(),
        );

        assert_eq!(affected(&impacts), ["a", "b"]);
        let delta = impacts[&SlotId::from("a")];
        for stat in PowerStat::DEFENSE {
            assert_eq!(delta.get(stat), 3.0);
        }
        assert_eq!(delta.shoot_at, 0.0);
    }

    #[test]
    fn unknown_scope_behaves_like_nearby_allies() {
        let a = player(1, "Fire", "FW");
        let b = player(2, "Wind", "GK");
        let catalog = Catalog::builder()
            .passive(passive(
                1,
                EffectScope::Other("aroundBall".to_owned()),
                StatGroup::KeeperPower,
                EffectMode::Flat,
            ))
            .build();

        let impacts = impacts_for(
            vec![
                assignment("a", SlotKind::Starter, &a, &[(1, 4.0)]),
                assignment("b", SlotKind::Starter, &b, &[]),
            ],
            &catalog,
            &PassiveOptions::enabled(),
        );
        assert_eq!(affected(&impacts), ["b"]);
        assert_eq!(impacts[&SlotId::from("b")].kp, 4.0);
    }

    #[test]
    fn percent_effects_do_not_compound() {
        let a = player(1, "Fire", "FW");
        let catalog = Catalog::builder()
            .passive(passive(1, EffectScope::SelfOnly, StatGroup::ShotAt, EffectMode::Percent))
            .passive(passive(2, EffectScope::SelfOnly, StatGroup::ShotAt, EffectMode::Percent))
            .build();

        let evaluated = evaluate_squad(
            vec![assignment("a", SlotKind::Starter, &a, &[(1, 10.0), (2, 10.0)])],
            &catalog,
            &PassiveOptions::default(),
        );
        let power = evaluated[0].computed.as_ref().unwrap().power;
        let impacts = compute_passive_impacts(&evaluated, &catalog, &PassiveOptions::enabled());

        let expected = 2.0 * power.shoot_at * 10.0 / 100.0;
        assert!((impacts[&SlotId::from("a")].shoot_at - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_magnitude_and_ignored_groups_contribute_nothing() {
        let a = player(1, "Fire", "FW");
        let catalog = Catalog::builder()
            .passive(passive(1, EffectScope::SelfOnly, StatGroup::ShotAt, EffectMode::Flat))
            .passive(passive(2, EffectScope::SelfOnly, StatGroup::RoughAttack, EffectMode::Flat))
            .passive(passive(
                3,
                EffectScope::SelfOnly,
                StatGroup::Other("speed".to_owned()),
                EffectMode::Percent,
            ))
            .build();

        let impacts = impacts_for(
            vec![assignment("a", SlotKind::Starter, &a, &[(1, 0.0), (2, 50.0), (3, 50.0)])],
            &catalog,
            &PassiveOptions::enabled(),
        );
        assert!(impacts.is_empty());
    }

    #[test]
    fn percent_effect_on_zero_power_still_records_the_target() {
        let a = PlayerRecord::builder(PlayerId(1), "Blank")
            .element("Fire")
            .position("FW")
            .build();
        let catalog = Catalog::builder()
            .passive(passive(1, EffectScope::SelfOnly, StatGroup::ShotAt, EffectMode::Percent))
            .build();

        let impacts = impacts_for(
            vec![assignment("a", SlotKind::Starter, &a, &[(1, 10.0)])],
            &catalog,
            &PassiveOptions::enabled(),
        );
        assert_eq!(affected(&impacts), ["a"]);
        assert!(impacts[&SlotId::from("a")].is_zero());
    }

    #[test]
    fn disabled_passives_produce_no_impacts() {
        let a = player(1, "Fire", "FW");
        let catalog = Catalog::builder()
            .passive(passive(1, EffectScope::Team, StatGroup::All, EffectMode::Flat))
            .build();

        let impacts = impacts_for(
            vec![assignment("a", SlotKind::Starter, &a, &[(1, 10.0)])],
            &catalog,
            &PassiveOptions::default(),
        );
        assert!(impacts.is_empty());
    }

    #[test]
    fn conditions_gate_effects() {
        let a = player(1, "Fire", "FW");
        let gated = PassiveRecord::new(PassiveId::new(PassiveKind::Player, 1), "Tension shot +%")
            .with_effect(
                PassiveEffect::new(
                    EffectScope::SelfOnly,
                    StatGroup::ShotAt,
                    EffectMode::Flat,
                    EffectDirection::Increase,
                )
                .with_condition(ConditionKind::TensionAtLeast50),
            );
        let catalog = Catalog::builder().passive(gated).build();
        let assignments = || vec![assignment("a", SlotKind::Starter, &a, &[(1, 5.0)])];

        let inactive = impacts_for(assignments(), &catalog, &PassiveOptions::enabled());
        assert!(inactive.is_empty());

        let options = PassiveOptions::enabled()
            .with_conditions([ConditionKind::TensionAtLeast50].into_iter().collect());
        let active = impacts_for(assignments(), &catalog, &options);
        assert_eq!(active[&SlotId::from("a")].shoot_at, 5.0);
    }

    #[test]
    fn decrease_effects_subtract() {
        let a = player(1, "Fire", "FW");
        let b = player(2, "Wind", "DF");
        let record = PassiveRecord::new(PassiveId::new(PassiveKind::Player, 1), "Wall -%")
            .with_effect(PassiveEffect::new(
                EffectScope::NearbyAllies,
                StatGroup::WallDf,
                EffectMode::Flat,
                EffectDirection::Decrease,
            ));
        let catalog = Catalog::builder().passive(record).build();

        let impacts = impacts_for(
            vec![
                assignment("a", SlotKind::Starter, &a, &[(1, 6.0)]),
                assignment("b", SlotKind::Starter, &b, &[]),
            ],
            &catalog,
            &PassiveOptions::enabled(),
        );
        assert_eq!(impacts[&SlotId::from("b")].wall_df, -6.0);
    }

    #[test]
    fn reserves_never_source_effects() {
        let a = player(1, "Fire", "FW");
        let b = player(2, "Fire", "FW");
        let catalog = Catalog::builder()
            .passive(passive(1, EffectScope::Team, StatGroup::All, EffectMode::Flat))
            .build();

        let impacts = impacts_for(
            vec![
                assignment("a", SlotKind::Starter, &a, &[]),
                assignment("r", SlotKind::Reserve, &b, &[(1, 10.0)]),
            ],
            &catalog,
            &PassiveOptions::enabled(),
        );
        assert!(impacts.is_empty());
    }

    #[test]
    fn subbed_on_player_reaches_nobody() {
        let a = player(1, "Fire", "FW");
        let catalog = Catalog::builder()
            .passive(passive(1, EffectScope::SubbedOnPlayer, StatGroup::All, EffectMode::Flat))
            .build();

        let impacts = impacts_for(
            vec![assignment("a", SlotKind::Starter, &a, &[(1, 10.0)])],
            &catalog,
            &PassiveOptions::enabled(),
        );
        assert!(impacts.is_empty());
    }
}
