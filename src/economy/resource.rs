//! Resource kinds and per-kind accounts
//!
//! Resource kinds travel through save files, config files and host commands
//! as short string tags, so the tag is the serialized form.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::core::error::CoreError;
use crate::core::types::KindCategory;

/// Type of resource tracked by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Gold,
    Mana,
    Food,
    /// Unrefined gold dug out of the rock
    RawMaterial,
    /// Number of creatures summoned so far
    CreatureCount,
}

impl ResourceKind {
    /// Every kind, in ledger order
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Gold,
        ResourceKind::Mana,
        ResourceKind::Food,
        ResourceKind::RawMaterial,
        ResourceKind::CreatureCount,
    ];

    /// Stable tag used in saves, config and host commands
    pub fn tag(&self) -> &'static str {
        match self {
            ResourceKind::Gold => "gold",
            ResourceKind::Mana => "mana",
            ResourceKind::Food => "food",
            ResourceKind::RawMaterial => "raw_gold",
            ResourceKind::CreatureCount => "creatures",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| CoreError::unknown(KindCategory::Resource, s))
    }
}

impl Serialize for ResourceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for ResourceKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(de::Error::custom)
    }
}

/// A single resource account in the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceAccount {
    pub kind: ResourceKind,
    /// Current stock. Unsigned, so it can never go negative.
    pub amount: u64,
    /// Passive generation, units per second
    pub generation_rate: f64,
}

impl ResourceAccount {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            amount: 0,
            generation_rate: 0.0,
        }
    }
}
