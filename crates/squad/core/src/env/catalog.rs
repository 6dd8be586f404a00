use std::collections::BTreeMap;

use super::{
    EquipmentCategory, EquipmentId, EquipmentOracle, EquipmentRecord, PassiveId, PassiveKind,
    PassiveOracle, PassiveRecord, PlayerId, PlayerOracle, PlayerRecord,
};

/// Immutable in-memory catalog of players, equipment and passives.
///
/// Built once through [`CatalogBuilder`] and shared by reference afterwards;
/// there is no way to mutate a finished catalog.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    players: BTreeMap<PlayerId, PlayerRecord>,
    equipment: BTreeMap<EquipmentId, EquipmentRecord>,
    passives: BTreeMap<PassiveId, PassiveRecord>,
    /// Passive ids sorted by (kind, description).
    passive_order: Vec<PassiveId>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Players in id order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.values()
    }

    pub fn equipment_in(
        &self,
        category: EquipmentCategory,
    ) -> impl Iterator<Item = &EquipmentRecord> {
        self.equipment
            .values()
            .filter(move |record| record.category == category)
    }

    /// Passives sorted by (kind, description).
    pub fn passives(&self) -> impl Iterator<Item = &PassiveRecord> {
        self.passive_order
            .iter()
            .filter_map(|id| self.passives.get(id))
    }

    pub fn passives_of(&self, kind: PassiveKind) -> impl Iterator<Item = &PassiveRecord> {
        self.passives().filter(move |record| record.kind() == kind)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn equipment_count(&self) -> usize {
        self.equipment.len()
    }

    pub fn passive_count(&self) -> usize {
        self.passives.len()
    }
}

impl PlayerOracle for Catalog {
    fn player(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.players.get(&id)
    }
}

impl EquipmentOracle for Catalog {
    fn equipment(&self, id: &EquipmentId) -> Option<&EquipmentRecord> {
        self.equipment.get(id)
    }
}

impl PassiveOracle for Catalog {
    fn passive(&self, id: &PassiveId) -> Option<&PassiveRecord> {
        self.passives.get(id)
    }
}

/// Collects records for a [`Catalog`]. Later records replace earlier ones
/// with the same id.
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    players: BTreeMap<PlayerId, PlayerRecord>,
    equipment: BTreeMap<EquipmentId, EquipmentRecord>,
    passives: BTreeMap<PassiveId, PassiveRecord>,
}

impl CatalogBuilder {
    pub fn player(mut self, record: PlayerRecord) -> Self {
        self.players.insert(record.id, record);
        self
    }

    pub fn players(mut self, records: impl IntoIterator<Item = PlayerRecord>) -> Self {
        self.players
            .extend(records.into_iter().map(|record| (record.id, record)));
        self
    }

    pub fn equipment(mut self, record: EquipmentRecord) -> Self {
        self.equipment.insert(record.id.clone(), record);
        self
    }

    pub fn equipments(mut self, records: impl IntoIterator<Item = EquipmentRecord>) -> Self {
        self.equipment
            .extend(records.into_iter().map(|record| (record.id.clone(), record)));
        self
    }

    pub fn passive(mut self, record: PassiveRecord) -> Self {
        self.passives.insert(record.id, record);
        self
    }

    pub fn passives(mut self, records: impl IntoIterator<Item = PassiveRecord>) -> Self {
        self.passives
            .extend(records.into_iter().map(|record| (record.id, record)));
        self
    }

    pub fn build(self) -> Catalog {
        let mut passive_order: Vec<&PassiveRecord> = self.passives.values().collect();
        passive_order.sort_by(|a, b| {
            a.kind()
                .cmp(&b.kind())
                .then_with(|| a.description.cmp(&b.description))
        });
        let passive_order = passive_order.into_iter().map(|record| record.id).collect();

        Catalog {
            players: self.players,
            equipment: self.equipment,
            passives: self.passives,
            passive_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::BaseStats;

    #[test]
    fn passives_are_listed_by_kind_then_description() {
        let catalog = Catalog::builder()
            .passive(PassiveRecord::new(PassiveId::new(PassiveKind::Player, 1), "Shot +%"))
            .passive(PassiveRecord::new(PassiveId::new(PassiveKind::Player, 2), "Focus +%"))
            .passive(PassiveRecord::new(PassiveId::new(PassiveKind::Manager, 1), "Wall +%"))
            .build();

        let ids: Vec<String> = catalog.passives().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, ["manager-1", "player-2", "player-1"]);
        assert_eq!(catalog.passives_of(PassiveKind::Player).count(), 2);
        assert_eq!(catalog.passives_of(PassiveKind::Custom).count(), 0);
    }

    #[test]
    fn lookups_go_through_oracles() {
        let catalog = Catalog::builder()
            .player(PlayerRecord::builder(PlayerId(3), "Jude Sharp").build())
            .equipment(EquipmentRecord::new(
                EquipmentId::from("b-1"),
                "Boots",
                EquipmentCategory::Boots,
                BaseStats::default(),
            ))
            .build();

        assert!(catalog.player(PlayerId(3)).is_some());
        assert!(catalog.player(PlayerId(4)).is_none());
        assert!(catalog.equipment(&EquipmentId::from("b-1")).is_some());
        assert_eq!(catalog.equipment_in(EquipmentCategory::Boots).count(), 1);
        assert_eq!(catalog.equipment_in(EquipmentCategory::Misc).count(), 0);
        assert!(
            catalog
                .passive(&PassiveId::new(PassiveKind::Custom, 1))
                .is_none()
        );
    }
}
