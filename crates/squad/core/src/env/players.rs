use core::fmt;

use crate::stats::{BaseStats, PowerStats, compute_power};

/// Dataset identifier of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team position used for passive scoping.
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
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum TeamPosition {
    Gk,
    Df,
    Md,
    Fw,
    Reserve,
    Manager,
    Coordinator,
}

impl TeamPosition {
    /// Map a raw dataset position label onto a team position.
    ///
    /// Unrecognized labels fall back to midfield.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_uppercase();
        if normalized.starts_with("RESERVE") {
            return TeamPosition::Reserve;
        }
        if normalized == "MANAGER" {
            return TeamPosition::Manager;
        }
        if normalized.starts_with("COORDINATOR") {
            return TeamPosition::Coordinator;
        }
        match normalized.as_str() {
            "GK" => TeamPosition::Gk,
            "DF" => TeamPosition::Df,
            "FW" => TeamPosition::Fw,
            _ => TeamPosition::Md,
        }
    }
}

/// Lower-cased, trimmed element name used for element comparisons.
pub fn normalize_element(element: &str) -> String {
    element.trim().to_lowercase()
}

/// Immutable player record loaded once from the dataset.
///
/// `power` is the unboosted power computed by [`compute_power`] at
/// construction; build records through [`PlayerRecord::builder`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub nickname: String,
    pub image: String,
    pub game: String,
    /// Raw position label ("FW", "MF", "Coordinator"...).
    pub position: String,
    pub element: String,
    pub role: String,
    pub gender: String,
    pub age_group: String,
    pub year: String,
    pub how_to_obtain: String,
    /// Passive build type the player leans towards, lower-cased.
    pub affinity: String,
    pub stats: BaseStats,
    pub power: PowerStats,
}

impl PlayerRecord {
    pub fn builder(id: PlayerId, name: impl Into<String>) -> PlayerRecordBuilder {
        PlayerRecordBuilder::new(id, name)
    }

    pub fn team_position(&self) -> TeamPosition {
        TeamPosition::from_label(&self.position)
    }

    pub fn normalized_element(&self) -> String {
        normalize_element(&self.element)
    }

    /// Display name, preferring the nickname.
    pub fn display_name(&self) -> &str {
        if self.nickname.is_empty() {
            &self.name
        } else {
            &self.nickname
        }
    }
}

/// Builder for [`PlayerRecord`]; computes power on `build`.
#[derive(Clone, Debug)]
pub struct PlayerRecordBuilder {
    record: PlayerRecord,
}

impl PlayerRecordBuilder {
    fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            record: PlayerRecord {
                id,
                name: name.into(),
                nickname: String::new(),
                image: String::new(),
                game: String::new(),
                position: String::new(),
                element: String::new(),
                role: String::new(),
                gender: String::new(),
                age_group: String::new(),
                year: String::new(),
                how_to_obtain: String::new(),
                affinity: "unknown".to_owned(),
                stats: BaseStats::default(),
                power: PowerStats::zero(),
            },
        }
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.record.nickname = nickname.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.record.image = image.into();
        self
    }

    pub fn game(mut self, game: impl Into<String>) -> Self {
        self.record.game = game.into();
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.record.position = position.into();
        self
    }

    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.record.element = element.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.record.role = role.into();
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.record.gender = gender.into();
        self
    }

    pub fn age_group(mut self, age_group: impl Into<String>) -> Self {
        self.record.age_group = age_group.into();
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.record.year = year.into();
        self
    }

    pub fn how_to_obtain(mut self, text: impl Into<String>) -> Self {
        self.record.how_to_obtain = text.into();
        self
    }

    pub fn affinity(mut self, affinity: impl Into<String>) -> Self {
        self.record.affinity = affinity.into();
        self
    }

    pub fn stats(mut self, stats: BaseStats) -> Self {
        self.record.stats = stats;
        self
    }

    pub fn build(mut self) -> PlayerRecord {
        self.record.power = compute_power(&self.record.stats);
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_labels_map_to_team_positions() {
        assert_eq!(TeamPosition::from_label("GK"), TeamPosition::Gk);
        assert_eq!(TeamPosition::from_label(" df "), TeamPosition::Df);
        assert_eq!(TeamPosition::from_label("MF"), TeamPosition::Md);
        assert_eq!(TeamPosition::from_label("MD"), TeamPosition::Md);
        assert_eq!(TeamPosition::from_label("fw"), TeamPosition::Fw);
        assert_eq!(TeamPosition::from_label("Reserve 3"), TeamPosition::Reserve);
        assert_eq!(TeamPosition::from_label("Manager"), TeamPosition::Manager);
        assert_eq!(
            TeamPosition::from_label("Coordinator-2"),
            TeamPosition::Coordinator
        );
        assert_eq!(TeamPosition::from_label("Libero"), TeamPosition::Md);
        assert_eq!(TeamPosition::Gk.to_string(), "GK");
    }

    #[test]
    fn builder_derives_power_from_stats() {
        let stats = BaseStats::new(100.0, 50.0, 40.0, 30.0, 20.0, 10.0, 60.0);
        let player = PlayerRecord::builder(PlayerId(1), "Mark Evans")
            .element(" Mountain ")
            .stats(stats)
            .build();

        assert_eq!(player.power, compute_power(&stats));
        assert_eq!(player.normalized_element(), "mountain");
        assert_eq!(player.display_name(), "Mark Evans");
    }
}
