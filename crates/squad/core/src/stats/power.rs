//! Power stats - Layer 2 of the stat system.
//!
//! Battle power is a pure function of the seven base attributes. The same
//! [`compute_power`] is used for a player's unboosted power at load time and for
//! every slot's boosted power, so the two can never diverge.

use super::attributes::BaseStats;

/// One of the seven derived power stats.
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
pub enum PowerStat {
    #[strum(serialize = "shootAT")]
    #[cfg_attr(feature = "serde", serde(rename = "shootAT"))]
    ShootAt,
    #[strum(serialize = "focusAT")]
    #[cfg_attr(feature = "serde", serde(rename = "focusAT"))]
    FocusAt,
    #[strum(serialize = "focusDF")]
    #[cfg_attr(feature = "serde", serde(rename = "focusDF"))]
    FocusDf,
    #[strum(serialize = "wallDF")]
    #[cfg_attr(feature = "serde", serde(rename = "wallDF"))]
    WallDf,
    #[strum(serialize = "scrambleAT")]
    #[cfg_attr(feature = "serde", serde(rename = "scrambleAT"))]
    ScrambleAt,
    #[strum(serialize = "scrambleDF")]
    #[cfg_attr(feature = "serde", serde(rename = "scrambleDF"))]
    ScrambleDf,
    #[strum(serialize = "kp")]
    #[cfg_attr(feature = "serde", serde(rename = "kp"))]
    Kp,
}

impl PowerStat {
    pub const ALL: [PowerStat; 7] = [
        PowerStat::ShootAt,
        PowerStat::FocusAt,
        PowerStat::FocusDf,
        PowerStat::WallDf,
        PowerStat::ScrambleAt,
        PowerStat::ScrambleDf,
        PowerStat::Kp,
    ];

    /// Attack-side keys (generic "AT" group).
    pub const ATTACK: [PowerStat; 3] =
        [PowerStat::ShootAt, PowerStat::FocusAt, PowerStat::ScrambleAt];

    /// Defense-side keys (generic "DF" group).
    pub const DEFENSE: [PowerStat; 3] =
        [PowerStat::FocusDf, PowerStat::ScrambleDf, PowerStat::WallDf];
}

/// Derived battle statistics.
///
/// Never edited directly - always recomputed from base attributes and, for
/// `final_power`, from passive deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PowerStats {
    #[cfg_attr(feature = "serde", serde(rename = "shootAT"))]
    pub shoot_at: f64,
    #[cfg_attr(feature = "serde", serde(rename = "focusAT"))]
    pub focus_at: f64,
    #[cfg_attr(feature = "serde", serde(rename = "focusDF"))]
    pub focus_df: f64,
    #[cfg_attr(feature = "serde", serde(rename = "wallDF"))]
    pub wall_df: f64,
    #[cfg_attr(feature = "serde", serde(rename = "scrambleAT"))]
    pub scramble_at: f64,
    #[cfg_attr(feature = "serde", serde(rename = "scrambleDF"))]
    pub scramble_df: f64,
    pub kp: f64,
}

impl PowerStats {
    /// All-zero power stats (the identity for [`PowerStats::add`]).
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: PowerStat) -> f64 {
        match stat {
            PowerStat::ShootAt => self.shoot_at,
            PowerStat::FocusAt => self.focus_at,
            PowerStat::FocusDf => self.focus_df,
            PowerStat::WallDf => self.wall_df,
            PowerStat::ScrambleAt => self.scramble_at,
            PowerStat::ScrambleDf => self.scramble_df,
            PowerStat::Kp => self.kp,
        }
    }

    pub fn get_mut(&mut self, stat: PowerStat) -> &mut f64 {
        match stat {
            PowerStat::ShootAt => &mut self.shoot_at,
            PowerStat::FocusAt => &mut self.focus_at,
            PowerStat::FocusDf => &mut self.focus_df,
            PowerStat::WallDf => &mut self.wall_df,
            PowerStat::ScrambleAt => &mut self.scramble_at,
            PowerStat::ScrambleDf => &mut self.scramble_df,
            PowerStat::Kp => &mut self.kp,
        }
    }

    /// Elementwise sum.
    pub fn add(&self, other: &PowerStats) -> PowerStats {
        let mut sum = *self;
        sum.accumulate(other);
        sum
    }

    /// Elementwise in-place sum.
    pub fn accumulate(&mut self, other: &PowerStats) {
        for stat in PowerStat::ALL {
            *self.get_mut(stat) += other.get(stat);
        }
    }

    /// True when every key is exactly zero.
    pub fn is_zero(&self) -> bool {
        PowerStat::ALL.iter().all(|stat| self.get(*stat) == 0.0)
    }
}

/// Power Formula: maps base attributes to battle power.
///
/// Formulas (balance constants, applied identically everywhere):
/// - Shoot AT: Kick + Control × 0.5
/// - Focus AT: Technique + Control × 0.5
/// - Focus DF: Intelligence + Technique × 0.5
/// - Wall DF: Physical + Pressure × 0.5
/// - Scramble AT: Agility + Physical × 0.5
/// - Scramble DF: Pressure + Agility × 0.5
/// - KP: Physical + Intelligence × 0.5
///
/// Total function: any finite input produces a finite output.
pub fn compute_power(base: &BaseStats) -> PowerStats {
    PowerStats {
        shoot_at: base.kick + base.control * 0.5,
        focus_at: base.technique + base.control * 0.5,
        focus_df: base.intelligence + base.technique * 0.5,
        wall_df: base.physical + base.pressure * 0.5,
        scramble_at: base.agility + base.physical * 0.5,
        scramble_df: base.pressure + base.agility * 0.5,
        kp: base.physical + base.intelligence * 0.5,
    }
}
