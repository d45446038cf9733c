//! Building kinds, their base stats, and building instances

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::core::error::CoreError;
use crate::core::types::{BuildingId, KindCategory, Vec3};
use crate::economy::ResourceKind;

/// Type of building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuildingKind {
    /// The core structure every dungeon starts with
    DungeonHeart,
    Treasury,
    DemonLair,
    OrcLair,
    ArcaneTower,
    ArrowTower,
}

/// Static base stats shared by every building of a kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingProfile {
    pub max_health: u32,
    /// Units per second credited while the building stands
    pub production: &'static [(ResourceKind, f64)],
    pub storage: &'static [(ResourceKind, u64)],
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 6] = [
        BuildingKind::DungeonHeart,
        BuildingKind::Treasury,
        BuildingKind::DemonLair,
        BuildingKind::OrcLair,
        BuildingKind::ArcaneTower,
        BuildingKind::ArrowTower,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            BuildingKind::DungeonHeart => "dungeon_heart",
            BuildingKind::Treasury => "treasury",
            BuildingKind::DemonLair => "demon_lair",
            BuildingKind::OrcLair => "orc_lair",
            BuildingKind::ArcaneTower => "arcane_tower",
            BuildingKind::ArrowTower => "arrow_tower",
        }
    }

    pub fn profile(&self) -> BuildingProfile {
        match self {
            BuildingKind::DungeonHeart => BuildingProfile {
                max_health: 1000,
                production: &[(ResourceKind::Mana, 2.0)],
                storage: &[],
            },
            BuildingKind::Treasury => BuildingProfile {
                max_health: 500,
                production: &[],
                storage: &[(ResourceKind::Gold, 10_000)],
            },
            BuildingKind::DemonLair => BuildingProfile {
                max_health: 800,
                production: &[(ResourceKind::Food, 1.0)],
                storage: &[],
            },
            BuildingKind::OrcLair => BuildingProfile {
                max_health: 600,
                production: &[(ResourceKind::Food, 0.5)],
                storage: &[],
            },
            BuildingKind::ArcaneTower => BuildingProfile {
                max_health: 400,
                production: &[],
                storage: &[],
            },
            BuildingKind::ArrowTower => BuildingProfile {
                max_health: 300,
                production: &[],
                storage: &[],
            },
        }
    }
}

impl std::fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BuildingKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildingKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| CoreError::unknown(KindCategory::Building, s))
    }
}

/// A constructed building
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub id: BuildingId,
    pub kind: BuildingKind,
    pub position: Vec3,
    pub health: u32,
    pub max_health: u32,
    /// Only built buildings produce
    pub is_built: bool,
    /// Per-instance production, seeded from the kind profile
    pub production_rates: BTreeMap<ResourceKind, f64>,
}

impl Building {
    /// Instantiate from the kind's profile at full health, not yet built
    pub fn from_profile(id: BuildingId, kind: BuildingKind, position: Vec3) -> Self {
        let profile = kind.profile();
        Self {
            id,
            kind,
            position,
            health: profile.max_health,
            max_health: profile.max_health,
            is_built: false,
            production_rates: profile.production.iter().copied().collect(),
        }
    }

    /// Storage this building adds for a resource
    pub fn storage_capacity(&self, resource: ResourceKind) -> u64 {
        self.kind
            .profile()
            .storage
            .iter()
            .filter(|(kind, _)| *kind == resource)
            .map(|(_, capacity)| *capacity)
            .sum()
    }
}
