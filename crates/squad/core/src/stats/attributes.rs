//! Base attributes - Layer 1 of the stat system.
//!
//! The seven attributes are the only stats that come from the dataset. The
//! `total` is never stored: it is summed from the seven fields on demand so it
//! cannot drift from its inputs.

/// One of the seven base attributes of a character.
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
pub enum BaseAttribute {
    Kick,
    Control,
    Technique,
    Pressure,
    Physical,
    Agility,
    Intelligence,
}

impl BaseAttribute {
    /// All attributes in canonical order.
    pub const ALL: [BaseAttribute; 7] = [
        BaseAttribute::Kick,
        BaseAttribute::Control,
        BaseAttribute::Technique,
        BaseAttribute::Pressure,
        BaseAttribute::Physical,
        BaseAttribute::Agility,
        BaseAttribute::Intelligence,
    ];
}

/// The seven base attributes of a character.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub kick: f64,
    pub control: f64,
    pub technique: f64,
    pub pressure: f64,
    pub physical: f64,
    pub agility: f64,
    pub intelligence: f64,
}

impl BaseStats {
    /// Create base stats in canonical attribute order.
    pub fn new(
        kick: f64,
        control: f64,
        technique: f64,
        pressure: f64,
        physical: f64,
        agility: f64,
        intelligence: f64,
    ) -> Self {
        Self {
            kick,
            control,
            technique,
            pressure,
            physical,
            agility,
            intelligence,
        }
    }

    /// Build a stat set by evaluating `f` once per attribute.
    pub fn from_fn(mut f: impl FnMut(BaseAttribute) -> f64) -> Self {
        Self {
            kick: f(BaseAttribute::Kick),
            control: f(BaseAttribute::Control),
            technique: f(BaseAttribute::Technique),
            pressure: f(BaseAttribute::Pressure),
            physical: f(BaseAttribute::Physical),
            agility: f(BaseAttribute::Agility),
            intelligence: f(BaseAttribute::Intelligence),
        }
    }

    pub fn get(&self, attribute: BaseAttribute) -> f64 {
        match attribute {
            BaseAttribute::Kick => self.kick,
            BaseAttribute::Control => self.control,
            BaseAttribute::Technique => self.technique,
            BaseAttribute::Pressure => self.pressure,
            BaseAttribute::Physical => self.physical,
            BaseAttribute::Agility => self.agility,
            BaseAttribute::Intelligence => self.intelligence,
        }
    }

    pub fn get_mut(&mut self, attribute: BaseAttribute) -> &mut f64 {
        match attribute {
            BaseAttribute::Kick => &mut self.kick,
            BaseAttribute::Control => &mut self.control,
            BaseAttribute::Technique => &mut self.technique,
            BaseAttribute::Pressure => &mut self.pressure,
            BaseAttribute::Physical => &mut self.physical,
            BaseAttribute::Agility => &mut self.agility,
            BaseAttribute::Intelligence => &mut self.intelligence,
        }
    }

    /// Sum of the seven attributes, in canonical order.
    pub fn total(&self) -> f64 {
        BaseAttribute::ALL
            .iter()
            .fold(0.0, |sum, attribute| sum + self.get(*attribute))
    }
}

/// Flat per-attribute bonuses (equipment tallies, bean tallies).
pub type AttributeBonuses = BaseStats;

impl core::ops::Add for BaseStats {
    type Output = BaseStats;

    fn add(self, rhs: BaseStats) -> BaseStats {
        BaseStats::from_fn(|attribute| self.get(attribute) + rhs.get(attribute))
    }
}

impl core::ops::AddAssign for BaseStats {
    fn add_assign(&mut self, rhs: BaseStats) {
        for attribute in BaseAttribute::ALL {
            *self.get_mut(attribute) += rhs.get(attribute);
        }
    }
}
