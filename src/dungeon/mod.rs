//! Dungeon layer - buildings, the building registry, and production

pub mod building;
pub mod production;
pub mod registry;

pub use building::{Building, BuildingKind, BuildingProfile};
pub use production::{tick_production, ProductionResult};
pub use registry::BuildingRegistry;
