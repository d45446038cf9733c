//! The world container and its host-facing views

pub mod state;
pub mod view;

pub use state::World;
pub use view::{BuildingView, CharacterView, StateView, Statistics};
