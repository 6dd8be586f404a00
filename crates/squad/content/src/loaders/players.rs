//! Player dataset loader.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use squad_core::{BaseStats, PlayerId, PlayerRecord};

use crate::loaders::{LoadResult, numeric, read_json_array};

/// Placeholder name used by the dataset for unreleased players.
const HIDDEN_PLAYER_NAME: &str = "???";

/// Raw record as scraped; keys keep the dataset's capitalisation.
#[derive(Debug, Deserialize)]
struct RawPlayerRecord {
    id: u32,
    #[serde(rename = "Image", default)]
    image: Value,
    #[serde(rename = "Name", default)]
    name: Value,
    #[serde(rename = "Nickname", default)]
    nickname: Value,
    #[serde(rename = "Game", default)]
    game: Value,
    #[serde(rename = "Position", default)]
    position: Value,
    #[serde(rename = "Element", default)]
    element: Value,
    #[serde(rename = "Kick", default)]
    kick: Value,
    #[serde(rename = "Control", default)]
    control: Value,
    #[serde(rename = "Technique", default)]
    technique: Value,
    #[serde(rename = "Pressure", default)]
    pressure: Value,
    #[serde(rename = "Physical", default)]
    physical: Value,
    #[serde(rename = "Agility", default)]
    agility: Value,
    #[serde(rename = "Intelligence", default)]
    intelligence: Value,
    #[serde(rename = "Age group", default)]
    age_group: Value,
    #[serde(rename = "Year", default)]
    year: Value,
    #[serde(rename = "Gender", default)]
    gender: Value,
    #[serde(rename = "Role", default)]
    role: Value,
    #[serde(rename = "HowToObtainMarkdown", default)]
    how_to_obtain: Option<String>,
    #[serde(rename = "Affinity", default)]
    affinity: Option<String>,
}

impl RawPlayerRecord {
    fn is_hidden(&self) -> bool {
        self.name.as_str() == Some(HIDDEN_PLAYER_NAME)
    }

    fn into_record(self) -> PlayerRecord {
        let stats = BaseStats::new(
            stat(&self.kick),
            stat(&self.control),
            stat(&self.technique),
            stat(&self.pressure),
            stat(&self.physical),
            stat(&self.agility),
            stat(&self.intelligence),
        );

        PlayerRecord::builder(PlayerId(self.id), sanitize(&self.name))
            .nickname(sanitize(&self.nickname))
            .image(self.image.as_str().map(str::trim).unwrap_or_default())
            .game(sanitize(&self.game))
            .position(sanitize(&self.position))
            .element(sanitize(&self.element))
            .role(sanitize(&self.role))
            .gender(sanitize(&self.gender))
            .age_group(sanitize(&self.age_group))
            .year(sanitize(&self.year))
            .how_to_obtain(self.how_to_obtain.as_deref().map(str::trim).unwrap_or_default())
            .affinity(normalize_affinity(self.affinity.as_deref()))
            .stats(stats)
            .build()
    }
}

/// Non-numeric stats count as zero.
fn stat(value: &Value) -> f64 {
    numeric(value).unwrap_or(0.0)
}

/// Trimmed text; empty or missing becomes `"Unknown"`.
fn sanitize(value: &Value) -> String {
    let text = match value {
        Value::String(text) => text.trim().to_owned(),
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    };
    if text.is_empty() {
        "Unknown".to_owned()
    } else {
        text
    }
}

fn normalize_affinity(value: Option<&str>) -> String {
    match value.map(|raw| raw.trim().to_lowercase()) {
        Some(affinity) if !affinity.is_empty() => affinity,
        _ => "unknown".to_owned(),
    }
}

/// Loader for the player dataset (`players.json`).
pub struct PlayerLoader;

impl PlayerLoader {
    /// Load players, dropping hidden placeholder entries.
    pub fn load(path: &Path) -> LoadResult<Vec<PlayerRecord>> {
        let raw: Vec<RawPlayerRecord> = read_json_array(path)?;
        let total = raw.len();

        let players: Vec<PlayerRecord> = raw
            .into_iter()
            .filter(|record| !record.is_hidden())
            .map(RawPlayerRecord::into_record)
            .collect();

        tracing::debug!(
            path = %path.display(),
            loaded = players.len(),
            skipped = total - players.len(),
            "loaded players"
        );
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squad_core::TeamPosition;
    use std::io::Write;

    fn write_players(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn normalizes_raw_players() {
        let file = write_players(
            r#"[
                {"id": 1, "Name": " Axel Blaze ", "Nickname": "Axel", "Position": "FW",
                 "Element": "Fire", "Kick": 120, "Control": "80", "Technique": "n/a",
                 "Pressure": 40, "Physical": 60, "Agility": 90, "Intelligence": 50,
                 "Age group": "", "Year": 2, "Affinity": " Tension "},
                {"id": 2, "Name": "???", "Kick": 1}
            ]"#,
        );

        let players = PlayerLoader::load(file.path()).unwrap();
        assert_eq!(players.len(), 1);

        let axel = &players[0];
        assert_eq!(axel.name, "Axel Blaze");
        assert_eq!(axel.stats.control, 80.0);
        assert_eq!(axel.stats.technique, 0.0);
        assert_eq!(axel.age_group, "Unknown");
        assert_eq!(axel.year, "2");
        assert_eq!(axel.game, "Unknown");
        assert_eq!(axel.affinity, "tension");
        assert_eq!(axel.team_position(), TeamPosition::Fw);
        assert_eq!(axel.power, squad_core::compute_power(&axel.stats));
    }

    #[test]
    fn missing_affinity_is_unknown() {
        let file = write_players(r#"[{"id": 5, "Name": "Mark"}]"#);
        let players = PlayerLoader::load(file.path()).unwrap();
        assert_eq!(players[0].affinity, "unknown");
        assert_eq!(players[0].how_to_obtain, "");
        assert_eq!(players[0].stats.total(), 0.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let file = write_players(r#"{"id": 1}"#);
        let error = PlayerLoader::load(file.path()).unwrap_err();
        assert!(format!("{error:#}").contains("Failed to parse JSON array"));
    }
}
