//! Data-driven content loaders for the squad planner.
//!
//! This crate reads the bundled datasets from a data directory:
//! - Players (JSON, scraped with capitalised keys)
//! - Equipment catalog (JSON)
//! - Passive pools (one JSON file per pool)
//! - Planner configuration (TOML)
//!
//! Everything is converted into squad-core records and assembled into an
//! immutable [`squad_core::Catalog`]. Content is loaded once and never
//! mutated afterwards.

pub mod loaders;

pub use loaders::{
    ConfigLoader, ContentFactory, EquipmentLoader, LoadResult, PassiveLoader, PlayerLoader,
};
