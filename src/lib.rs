//! Dungeon Heart - simulation core for a dungeon-keeper style strategy game
//!
//! A [`World`](world::World) tracks the dungeon economy, the buildings and the
//! summoned creatures. Hosts drive it once per frame through
//! [`World::update`](world::World::update) or the tag-based
//! [`GameBridge`](bridge::GameBridge).

pub mod bridge;
pub mod core;
pub mod dungeon;
pub mod economy;
pub mod entity;
pub mod persistence;
pub mod simulation;
pub mod world;
