//! Read-only summaries of a world handed to the host

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::Vec3;
use crate::dungeon::Building;
use crate::entity::{ActionState, Character};

/// Compact per-frame state for the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateView {
    pub game_time: f64,
    /// Resource tag -> amount
    pub resources: BTreeMap<String, u64>,
    pub buildings_count: usize,
    pub characters_count: usize,
}

/// Aggregate counts over the whole game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub game_time: f64,
    pub total_resources: u64,
    pub buildings_count: usize,
    pub characters_count: usize,
    /// Dead characters are still counted in `characters_count`
    pub alive_characters: usize,
    pub built_buildings: usize,
}

/// Host-facing description of one building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingView {
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Vec3,
    pub health: u32,
    pub max_health: u32,
    pub is_built: bool,
}

impl From<&Building> for BuildingView {
    fn from(building: &Building) -> Self {
        Self {
            kind: building.kind.tag().to_string(),
            position: building.position,
            health: building.health,
            max_health: building.max_health,
            is_built: building.is_built,
        }
    }
}

/// Host-facing description of one character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterView {
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Vec3,
    pub health: u32,
    pub max_health: u32,
    pub is_alive: bool,
    pub current_action: ActionState,
}

impl From<&Character> for CharacterView {
    fn from(character: &Character) -> Self {
        Self {
            kind: character.kind.tag().to_string(),
            position: character.position,
            health: character.health,
            max_health: character.max_health,
            is_alive: character.is_alive,
            current_action: character.current_action(),
        }
    }
}
