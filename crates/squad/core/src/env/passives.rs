use core::fmt;
use core::str::FromStr;

use crate::passive::PassiveEffect;

/// Which passive pool a record belongs to.
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
#[strum(serialize_all = "camelCase")]
pub enum PassiveKind {
    Coordinator,
    Custom,
    Manager,
    Player,
}

/// Composite passive identifier, written `"{kind}-{number}"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassiveId {
    pub kind: PassiveKind,
    pub number: u32,
}

impl PassiveId {
    pub const fn new(kind: PassiveKind, number: u32) -> Self {
        Self { kind, number }
    }
}

impl fmt::Display for PassiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.number)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid passive id `{0}` (expected `<kind>-<number>`)")]
pub struct ParsePassiveIdError(pub String);

impl FromStr for PassiveId {
    type Err = ParsePassiveIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePassiveIdError(s.to_owned());
        let (kind, number) = s.rsplit_once('-').ok_or_else(invalid)?;
        let kind = kind.parse::<PassiveKind>().map_err(|_| invalid())?;
        let number = number.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self { kind, number })
    }
}

impl_string_serde!(PassiveId);

/// Immutable passive ability record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PassiveRecord {
    pub id: PassiveId,
    /// Build archetype ("tension", "bond"...); `None` for general passives.
    pub build_type: Option<String>,
    /// Display template; `+%` / `-%` mark where the magnitude goes.
    pub description: String,
    pub strong_value: Option<f64>,
    pub weak_value: Option<f64>,
    pub effects: Vec<PassiveEffect>,
}

impl PassiveRecord {
    pub fn new(id: PassiveId, description: impl Into<String>) -> Self {
        Self {
            id,
            build_type: None,
            description: description.into(),
            strong_value: None,
            weak_value: None,
            effects: Vec::new(),
        }
    }

    pub fn with_build_type(mut self, build_type: impl Into<String>) -> Self {
        self.build_type = Some(build_type.into());
        self
    }

    pub fn with_values(mut self, strong: Option<f64>, weak: Option<f64>) -> Self {
        self.strong_value = strong;
        self.weak_value = weak;
        self
    }

    pub fn with_effect(mut self, effect: PassiveEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn kind(&self) -> PassiveKind {
        self.id.kind
    }
}
