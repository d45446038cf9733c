//! JSON schema types for save files
//!
//! Version 0 is the original unversioned layout: game time, a resource map and
//! the two entity lists. Version 1 adds the `version` field itself and the
//! optional `generation_rates` map. Every field added after version 0 must be
//! optional so older saves stay readable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::Vec3;

/// Schema version written by this build
pub const SCHEMA_VERSION: u32 = 1;

/// Root structure of a save file
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SaveDocument {
    /// Schema version; absent in legacy saves, which read as 0
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub game_time: f64,
    /// Resource tag -> amount
    #[serde(default)]
    pub resources: BTreeMap<String, u64>,
    /// Resource tag -> units per second. Only non-zero rates are written.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub generation_rates: BTreeMap<String, f64>,
    #[serde(default)]
    pub buildings: Vec<BuildingRecord>,
    #[serde(default)]
    pub characters: Vec<CharacterRecord>,
}

/// A saved building
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BuildingRecord {
    /// Building kind tag
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Vec3,
    pub health: u32,
    pub is_built: bool,
}

/// A saved character
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CharacterRecord {
    /// Character kind tag
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Vec3,
    pub health: u32,
    pub is_alive: bool,
}
