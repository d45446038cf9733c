pub mod config;
pub mod error;
pub mod types;

pub use config::{ConfigError, PlacementBounds, SimulationConfig};
pub use error::{CoreError, Result};
pub use types::{BuildingId, CharacterId, KindCategory, Vec3};
