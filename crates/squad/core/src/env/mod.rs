//! Read-only static content consumed by the engine.
//!
//! The engine never owns datasets. It reads players, equipment and passives
//! through the oracle traits below; [`Catalog`] is the in-memory
//! implementation built once at startup by the content loaders.
mod catalog;
mod equipment;
mod passives;
mod players;

pub use catalog::{Catalog, CatalogBuilder};
pub use equipment::{EquipmentCategory, EquipmentId, EquipmentRecord};
pub use passives::{ParsePassiveIdError, PassiveId, PassiveKind, PassiveRecord};
pub use players::{PlayerId, PlayerRecord, PlayerRecordBuilder, TeamPosition, normalize_element};

pub trait PlayerOracle: Send + Sync {
    fn player(&self, id: PlayerId) -> Option<&PlayerRecord>;
}

pub trait EquipmentOracle: Send + Sync {
    fn equipment(&self, id: &EquipmentId) -> Option<&EquipmentRecord>;
}

pub trait PassiveOracle: Send + Sync {
    fn passive(&self, id: &PassiveId) -> Option<&PassiveRecord>;
}
