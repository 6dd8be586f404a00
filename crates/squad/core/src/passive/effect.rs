//! Passive effect definitions.
//!
//! Scope and stat group are closed enums matched exhaustively by the resolver.
//! Each carries an `Other(String)` catch-all so unrecognized dataset strings
//! parse without error and fall through to the documented fallback: scope
//! behaves like [`EffectScope::NearbyAllies`], stat group is ignored.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use super::condition::{ActiveConditions, ConditionKind};
use crate::stats::PowerStat;

/// Which squad members an effect targets, relative to its source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EffectScope {
    /// The source alone.
    SelfOnly,
    /// Every qualifying member, source included.
    Team,
    /// Every member except the source.
    NearbyAllies,
    AlliesSameElement,
    AlliesDifferentElement,
    AlliesSamePosition,
    AlliesDifferentPosition,
    /// Every midfielder, source included if it is one.
    AlliedMf,
    /// Every defender, source included if it is one.
    AlliedDf,
    /// Every goalkeeper, source included if it is one.
    AlliedGk,
    /// In-match substitutes; resolves to nobody.
    SubbedOnPlayer,
    Other(String),
}

impl EffectScope {
    const KNOWN: [EffectScope; 11] = [
        EffectScope::SelfOnly,
        EffectScope::Team,
        EffectScope::NearbyAllies,
        EffectScope::AlliesSameElement,
        EffectScope::AlliesDifferentElement,
        EffectScope::AlliesSamePosition,
        EffectScope::AlliesDifferentPosition,
        EffectScope::AlliedMf,
        EffectScope::AlliedDf,
        EffectScope::AlliedGk,
        EffectScope::SubbedOnPlayer,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            EffectScope::SelfOnly => "self",
            EffectScope::Team => "team",
            EffectScope::NearbyAllies => "nearbyAllies",
            EffectScope::AlliesSameElement => "alliesSameElement",
            EffectScope::AlliesDifferentElement => "alliesDifferentElement",
            EffectScope::AlliesSamePosition => "alliesSamePosition",
            EffectScope::AlliesDifferentPosition => "alliesDifferentPosition",
            EffectScope::AlliedMf => "alliedMF",
            EffectScope::AlliedDf => "alliedDF",
            EffectScope::AlliedGk => "alliedGK",
            EffectScope::SubbedOnPlayer => "subbedOnPlayer",
            EffectScope::Other(raw) => raw,
        }
    }
}

impl fmt::Display for EffectScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectScope {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::KNOWN
            .iter()
            .find(|scope| scope.as_str() == s)
            .cloned()
            .unwrap_or_else(|| EffectScope::Other(s.to_owned())))
    }
}

impl_string_serde!(EffectScope);

/// Which power stats an effect modifies.
///
/// Only the first eight groups touch power stats; the rest describe match
/// mechanics outside this engine and are ignored by the resolver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StatGroup {
    ShotAt,
    /// Focus AT and DF.
    Focus,
    /// Scramble AT and DF.
    Scramble,
    WallDf,
    /// Every attack key.
    Attack,
    /// Every defense key.
    Defense,
    KeeperPower,
    /// Every power key.
    All,
    RoughAttack,
    BondGain,
    BondLoss,
    TacticCooldown,
    BreachRate,
    BreachTensionRequirement,
    WallPierce,
    DirectShotAt,
    FoulRate,
    CommonDropRate,
    RareDropRate,
    Other(String),
}

impl StatGroup {
    const KNOWN: [StatGroup; 19] = [
        StatGroup::ShotAt,
        StatGroup::Focus,
        StatGroup::Scramble,
        StatGroup::WallDf,
        StatGroup::Attack,
        StatGroup::Defense,
        StatGroup::KeeperPower,
        StatGroup::All,
        StatGroup::RoughAttack,
        StatGroup::BondGain,
        StatGroup::BondLoss,
        StatGroup::TacticCooldown,
        StatGroup::BreachRate,
        StatGroup::BreachTensionRequirement,
        StatGroup::WallPierce,
        StatGroup::DirectShotAt,
        StatGroup::FoulRate,
        StatGroup::CommonDropRate,
        StatGroup::RareDropRate,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            StatGroup::ShotAt => "shotAT",
            StatGroup::Focus => "focus",
            StatGroup::Scramble => "scramble",
            StatGroup::WallDf => "wallDF",
            StatGroup::Attack => "AT",
            StatGroup::Defense => "DF",
            StatGroup::KeeperPower => "KP",
            StatGroup::All => "all",
            StatGroup::RoughAttack => "roughAttack",
            StatGroup::BondGain => "bondGain",
            StatGroup::BondLoss => "bondLoss",
            StatGroup::TacticCooldown => "tacticCooldown",
            StatGroup::BreachRate => "breachRate",
            StatGroup::BreachTensionRequirement => "breachTensionRequirement",
            StatGroup::WallPierce => "wallPierce",
            StatGroup::DirectShotAt => "directShotAT",
            StatGroup::FoulRate => "foulRate",
            StatGroup::CommonDropRate => "commonDropRate",
            StatGroup::RareDropRate => "rareDropRate",
            StatGroup::Other(raw) => raw,
        }
    }

    /// Power keys this group modifies, or `None` if the resolver ignores it.
    pub fn power_stats(&self) -> Option<&'static [PowerStat]> {
        const SHOT: &[PowerStat] = &[PowerStat::ShootAt];
        const FOCUS: &[PowerStat] = &[PowerStat::FocusAt, PowerStat::FocusDf];
        const SCRAMBLE: &[PowerStat] = &[PowerStat::ScrambleAt, PowerStat::ScrambleDf];
        const WALL: &[PowerStat] = &[PowerStat::WallDf];
        const ATTACK: &[PowerStat] = &PowerStat::ATTACK;
        const DEFENSE: &[PowerStat] = &PowerStat::DEFENSE;
        const KEEPER: &[PowerStat] = &[PowerStat::Kp];
        const ALL: &[PowerStat] = &PowerStat::ALL;

        match self {
            StatGroup::ShotAt => Some(SHOT),
            StatGroup::Focus => Some(FOCUS),
            StatGroup::Scramble => Some(SCRAMBLE),
            StatGroup::WallDf => Some(WALL),
            StatGroup::Attack => Some(ATTACK),
            StatGroup::Defense => Some(DEFENSE),
            StatGroup::KeeperPower => Some(KEEPER),
            StatGroup::All => Some(ALL),
            StatGroup::RoughAttack
            | StatGroup::BondGain
            | StatGroup::BondLoss
            | StatGroup::TacticCooldown
            | StatGroup::BreachRate
            | StatGroup::BreachTensionRequirement
            | StatGroup::WallPierce
            | StatGroup::DirectShotAt
            | StatGroup::FoulRate
            | StatGroup::CommonDropRate
            | StatGroup::RareDropRate
            | StatGroup::Other(_) => None,
        }
    }
}

impl fmt::Display for StatGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatGroup {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::KNOWN
            .iter()
            .find(|group| group.as_str() == s)
            .cloned()
            .unwrap_or_else(|| StatGroup::Other(s.to_owned())))
    }
}

impl_string_serde!(StatGroup);

/// How the magnitude is applied.
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
#[strum(serialize_all = "camelCase")]
pub enum EffectMode {
    /// Percentage of the target's pre-passive power.
    Percent,
    /// Added as-is.
    Flat,
}

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
#[strum(serialize_all = "camelCase")]
pub enum EffectDirection {
    Increase,
    Decrease,
}

impl EffectDirection {
    pub fn sign(self) -> f64 {
        match self {
            EffectDirection::Increase => 1.0,
            EffectDirection::Decrease => -1.0,
        }
    }
}

/// One effect of a passive ability.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveEffect {
    pub scope: EffectScope,
    pub stat: StatGroup,
    pub mode: EffectMode,
    pub direction: EffectDirection,
    /// All must hold for the effect to apply.
    #[cfg_attr(feature = "serde", serde(default))]
    pub conditions: Vec<ConditionKind>,
}

impl PassiveEffect {
    pub fn new(
        scope: EffectScope,
        stat: StatGroup,
        mode: EffectMode,
        direction: EffectDirection,
    ) -> Self {
        Self {
            scope,
            stat,
            mode,
            direction,
            conditions: Vec::new(),
        }
    }

    pub fn with_condition(mut self, condition: ConditionKind) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn is_active(&self, active: &ActiveConditions) -> bool {
        active.satisfies(&self.conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_identifiers_parse() {
        assert_eq!("self".parse::<EffectScope>(), Ok(EffectScope::SelfOnly));
        assert_eq!("alliedMF".parse::<EffectScope>(), Ok(EffectScope::AlliedMf));
        assert_eq!(
            "aroundBall".parse::<EffectScope>(),
            Ok(EffectScope::Other("aroundBall".to_owned()))
        );
        for scope in EffectScope::KNOWN {
            assert_eq!(scope.as_str().parse::<EffectScope>(), Ok(scope));
        }
    }

    #[test]
    fn stat_groups_map_to_power_keys() {
        assert_eq!(StatGroup::ShotAt.power_stats(), Some(&[PowerStat::ShootAt][..]));
        assert_eq!(
            StatGroup::Focus.power_stats(),
            Some(&[PowerStat::FocusAt, PowerStat::FocusDf][..])
        );
        assert_eq!(StatGroup::Attack.power_stats().map(<[_]>::len), Some(3));
        assert_eq!(StatGroup::Defense.power_stats().map(<[_]>::len), Some(3));
        assert_eq!(StatGroup::All.power_stats().map(<[_]>::len), Some(7));
        assert_eq!(StatGroup::RoughAttack.power_stats(), None);
        assert_eq!(StatGroup::Other("speed".to_owned()).power_stats(), None);
    }

    #[test]
    fn stat_group_identifiers_parse() {
        assert_eq!("AT".parse::<StatGroup>(), Ok(StatGroup::Attack));
        assert_eq!("KP".parse::<StatGroup>(), Ok(StatGroup::KeeperPower));
        assert_eq!("directShotAT".parse::<StatGroup>(), Ok(StatGroup::DirectShotAt));
        for group in StatGroup::KNOWN {
            assert_eq!(group.as_str().parse::<StatGroup>(), Ok(group));
        }
    }

    #[test]
    fn direction_sign() {
        assert_eq!(EffectDirection::Increase.sign(), 1.0);
        assert_eq!(EffectDirection::Decrease.sign(), -1.0);
        assert_eq!("decrease".parse::<EffectDirection>(), Ok(EffectDirection::Decrease));
        assert_eq!(EffectMode::Percent.to_string(), "percent");
    }
}
