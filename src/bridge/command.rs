//! Commands and events exchanged with the host engine

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::types::Vec3;

fn default_save_file() -> PathBuf {
    PathBuf::from("save.json")
}

/// A command sent by the host as JSON, discriminated by its `type` field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostCommand {
    BuildBuilding {
        building_type: String,
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
        #[serde(default)]
        z: f32,
    },
    SummonCharacter {
        character_type: String,
        #[serde(default)]
        x: f32,
        #[serde(default)]
        y: f32,
        #[serde(default)]
        z: f32,
    },
    GetResource {
        resource_type: String,
    },
    SaveGame {
        #[serde(default = "default_save_file")]
        filename: PathBuf,
    },
    LoadGame {
        #[serde(default = "default_save_file")]
        filename: PathBuf,
    },
}

/// Answer to a host command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandReply {
    /// Whether the command took effect
    Done(bool),
    /// Resource amount for `get_resource`
    Amount(u64),
}

impl CommandReply {
    pub fn succeeded(&self) -> bool {
        match self {
            CommandReply::Done(ok) => *ok,
            CommandReply::Amount(_) => true,
        }
    }
}

/// Which host callback an event goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEventKind {
    BuildingCreated,
    CharacterCreated,
    GameSaved,
    GameLoaded,
}

impl HostEventKind {
    /// Callback name on the host side
    pub fn name(&self) -> &'static str {
        match self {
            HostEventKind::BuildingCreated => "on_building_created",
            HostEventKind::CharacterCreated => "on_character_created",
            HostEventKind::GameSaved => "on_game_saved",
            HostEventKind::GameLoaded => "on_game_loaded",
        }
    }
}

/// Notification pushed to the host after a successful operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    BuildingCreated { kind: String, position: Vec3 },
    CharacterCreated { kind: String, position: Vec3 },
    GameSaved { path: PathBuf },
    GameLoaded { path: PathBuf },
}

impl HostEvent {
    pub fn kind(&self) -> HostEventKind {
        match self {
            HostEvent::BuildingCreated { .. } => HostEventKind::BuildingCreated,
            HostEvent::CharacterCreated { .. } => HostEventKind::CharacterCreated,
            HostEvent::GameSaved { .. } => HostEventKind::GameSaved,
            HostEvent::GameLoaded { .. } => HostEventKind::GameLoaded,
        }
    }
}
