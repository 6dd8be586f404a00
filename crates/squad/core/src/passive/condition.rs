//! Match conditions that gate passive effects.
//!
//! An effect applies only when every one of its conditions is present in the
//! caller-supplied [`ActiveConditions`]. The engine never infers conditions
//! from match state; the caller toggles them.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;
use std::collections::BTreeSet;

/// A named match predicate.
///
/// Unknown dataset strings are kept verbatim in [`ConditionKind::Other`]; such
/// a condition is satisfied only if the caller activates the same string.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConditionKind {
    ScoreNotLeading,
    NoFoulCommittedYet,
    FieldZoneOwnHalf,
    FieldZoneOpponentHalf,
    OutsideZoneArea,
    MatchTimeHalfFirst,
    MatchTimeHalfSecond,
    DistanceWithinRadius,
    SameElementAllyNearby,
    DifferentElementAllyNearby,
    NearbyAllySameElement,
    NearbyAllyDifferentElement,
    TeamBreachRateAtLeast15,
    TensionAtLeast50,
    TensionAt100,
    BondPowerAtLeast20,
    AfterBallRecoveryNoDirectCatch,
    WhileDashing,
    OnMarkedOrBlockedWhileDashing,
    NextRoughAttackOnly,
    OnOpponentFoul,
    AfterSubstitution,
    Other(String),
}

impl ConditionKind {
    /// Every known condition, in display order.
    pub const ALL: [ConditionKind; 22] = [
        ConditionKind::ScoreNotLeading,
        ConditionKind::NoFoulCommittedYet,
        ConditionKind::FieldZoneOwnHalf,
        ConditionKind::FieldZoneOpponentHalf,
        ConditionKind::OutsideZoneArea,
        ConditionKind::MatchTimeHalfFirst,
        ConditionKind::MatchTimeHalfSecond,
        ConditionKind::DistanceWithinRadius,
        ConditionKind::SameElementAllyNearby,
        ConditionKind::DifferentElementAllyNearby,
        ConditionKind::NearbyAllySameElement,
        ConditionKind::NearbyAllyDifferentElement,
        ConditionKind::TeamBreachRateAtLeast15,
        ConditionKind::TensionAtLeast50,
        ConditionKind::TensionAt100,
        ConditionKind::BondPowerAtLeast20,
        ConditionKind::AfterBallRecoveryNoDirectCatch,
        ConditionKind::WhileDashing,
        ConditionKind::OnMarkedOrBlockedWhileDashing,
        ConditionKind::NextRoughAttackOnly,
        ConditionKind::OnOpponentFoul,
        ConditionKind::AfterSubstitution,
    ];

    /// Dataset identifier.
    pub fn as_str(&self) -> &str {
        match self {
            ConditionKind::ScoreNotLeading => "scoreNotLeading",
            ConditionKind::NoFoulCommittedYet => "noFoulCommittedYet",
            ConditionKind::FieldZoneOwnHalf => "fieldZoneOwnHalf",
            ConditionKind::FieldZoneOpponentHalf => "fieldZoneOpponentHalf",
            ConditionKind::OutsideZoneArea => "outsideZoneArea",
            ConditionKind::MatchTimeHalfFirst => "matchTimeHalfFirst",
            ConditionKind::MatchTimeHalfSecond => "matchTimeHalfSecond",
            ConditionKind::DistanceWithinRadius => "distanceWithinRadius",
            ConditionKind::SameElementAllyNearby => "sameElementAllyNearby",
            ConditionKind::DifferentElementAllyNearby => "differentElementAllyNearby",
            ConditionKind::NearbyAllySameElement => "nearbyAllySameElement",
            ConditionKind::NearbyAllyDifferentElement => "nearbyAllyDifferentElement",
            ConditionKind::TeamBreachRateAtLeast15 => "teamBreachRateAtLeast15",
            ConditionKind::TensionAtLeast50 => "tensionAtLeast50",
            ConditionKind::TensionAt100 => "tensionAt100",
            ConditionKind::BondPowerAtLeast20 => "bondPowerAtLeast20",
            ConditionKind::AfterBallRecoveryNoDirectCatch => "afterBallRecoveryNoDirectCatch",
            ConditionKind::WhileDashing => "whileDashing",
            ConditionKind::OnMarkedOrBlockedWhileDashing => "onMarkedOrBlockedWhileDashing",
            ConditionKind::NextRoughAttackOnly => "nextRoughAttackOnly",
            ConditionKind::OnOpponentFoul => "onOpponentFoul",
            ConditionKind::AfterSubstitution => "afterSubstitution",
            ConditionKind::Other(raw) => raw,
        }
    }

    /// Short toggle label.
    pub fn label(&self) -> &str {
        match self {
            ConditionKind::ScoreNotLeading => "Not Leading",
            ConditionKind::NoFoulCommittedYet => "Clean Match",
            ConditionKind::FieldZoneOwnHalf => "Own Half",
            ConditionKind::FieldZoneOpponentHalf => "Opponent Half",
            ConditionKind::OutsideZoneArea => "Outside Area",
            ConditionKind::MatchTimeHalfFirst => "First Half",
            ConditionKind::MatchTimeHalfSecond => "Second Half",
            ConditionKind::DistanceWithinRadius => "Within Radius",
            ConditionKind::SameElementAllyNearby => "Same Element Nearby",
            ConditionKind::DifferentElementAllyNearby => "Different Element Nearby",
            ConditionKind::NearbyAllySameElement => "Same Element Close",
            ConditionKind::NearbyAllyDifferentElement => "Different Element Close",
            ConditionKind::TeamBreachRateAtLeast15 => "Breach ≥ 15%",
            ConditionKind::TensionAtLeast50 => "Tension ≥ 50",
            ConditionKind::TensionAt100 => "Tension Max",
            ConditionKind::BondPowerAtLeast20 => "Bond ≥ 20",
            ConditionKind::AfterBallRecoveryNoDirectCatch => "After Recovery",
            ConditionKind::WhileDashing => "While Dashing",
            ConditionKind::OnMarkedOrBlockedWhileDashing => "Blocked While Dashing",
            ConditionKind::NextRoughAttackOnly => "Next Rough Attack",
            ConditionKind::OnOpponentFoul => "After Opponent Foul",
            ConditionKind::AfterSubstitution => "After Substitution",
            ConditionKind::Other(raw) => raw,
        }
    }

    /// One-line explanation for the toggle.
    pub fn helper(&self) -> &str {
        match self {
            ConditionKind::ScoreNotLeading => "Team is trailing or tied",
            ConditionKind::NoFoulCommittedYet => "No fouls committed yet",
            ConditionKind::FieldZoneOwnHalf => "Player positioned on our half",
            ConditionKind::FieldZoneOpponentHalf => "Player positioned on opponent half",
            ConditionKind::OutsideZoneArea => "Player outside the area",
            ConditionKind::MatchTimeHalfFirst => "Effect active in first half",
            ConditionKind::MatchTimeHalfSecond => "Effect active in second half",
            ConditionKind::DistanceWithinRadius => "Nearby allies within range",
            ConditionKind::SameElementAllyNearby => "Needs an ally of same element nearby",
            ConditionKind::DifferentElementAllyNearby => {
                "Needs an ally of different element nearby"
            }
            ConditionKind::NearbyAllySameElement => "Close ally shares element",
            ConditionKind::NearbyAllyDifferentElement => "Close ally with different element",
            ConditionKind::TeamBreachRateAtLeast15 => "Team breach rate boosted",
            ConditionKind::TensionAtLeast50 => "Tension meter at least 50",
            ConditionKind::TensionAt100 => "Tension meter full",
            ConditionKind::BondPowerAtLeast20 => "Bond power at least 20",
            ConditionKind::AfterBallRecoveryNoDirectCatch => {
                "Immediately after recovering the ball"
            }
            ConditionKind::WhileDashing => "Player currently dashing",
            ConditionKind::OnMarkedOrBlockedWhileDashing => "Marked or blocked mid dash",
            ConditionKind::NextRoughAttackOnly => "Applies to the next rough attack",
            ConditionKind::OnOpponentFoul => "Triggered by an opponent foul",
            ConditionKind::AfterSubstitution => "Player just entered the pitch",
            ConditionKind::Other(_) => "",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .cloned()
            .unwrap_or_else(|| ConditionKind::Other(s.to_owned())))
    }
}

impl_string_serde!(ConditionKind);

/// The set of conditions the caller currently treats as true.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActiveConditions {
    conditions: BTreeSet<ConditionKind>,
}

impl ActiveConditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a condition as active. Returns false if it already was.
    pub fn insert(&mut self, kind: ConditionKind) -> bool {
        self.conditions.insert(kind)
    }

    /// Mark a condition as inactive. Returns false if it was not active.
    pub fn remove(&mut self, kind: &ConditionKind) -> bool {
        self.conditions.remove(kind)
    }

    pub fn contains(&self, kind: &ConditionKind) -> bool {
        self.conditions.contains(kind)
    }

    /// True when every condition in `required` is active (vacuously true for
    /// an empty list).
    pub fn satisfies(&self, required: &[ConditionKind]) -> bool {
        required.iter().all(|kind| self.contains(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConditionKind> {
        self.conditions.iter()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl FromIterator<ConditionKind> for ActiveConditions {
    fn from_iter<T: IntoIterator<Item = ConditionKind>>(iter: T) -> Self {
        Self {
            conditions: iter.into_iter().collect(),
        }
    }
}
