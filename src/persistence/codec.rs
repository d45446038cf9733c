//! Convert worlds to and from save documents
//!
//! Loading is tolerant of content it does not recognise: unknown resource,
//! building or character tags are skipped with a warning. It is strict about
//! structure: a file that is missing, unreadable or not a save document fails
//! as a whole and nothing is returned.

use std::path::Path;

use crate::core::config::SimulationConfig;
use crate::dungeon::{BuildingKind, BuildingRegistry};
use crate::economy::{ResourceKind, ResourceLedger};
use crate::entity::{CharacterKind, CharacterRegistry};
use crate::persistence::document::{
    BuildingRecord, CharacterRecord, SaveDocument, SCHEMA_VERSION,
};
use crate::persistence::PersistenceError;
use crate::simulation::SimulationClock;
use crate::world::World;

/// Snapshot a world
pub fn serialize(world: &World) -> SaveDocument {
    let ledger = world.ledger();

    SaveDocument {
        version: SCHEMA_VERSION,
        game_time: world.game_time(),
        resources: ledger
            .iter()
            .map(|a| (a.kind.tag().to_string(), a.amount))
            .collect(),
        generation_rates: ledger
            .iter()
            .filter(|a| a.generation_rate > 0.0)
            .map(|a| (a.kind.tag().to_string(), a.generation_rate))
            .collect(),
        buildings: world
            .buildings()
            .iter()
            .map(|b| BuildingRecord {
                kind: b.kind.tag().to_string(),
                position: b.position,
                health: b.health,
                is_built: b.is_built,
            })
            .collect(),
        characters: world
            .characters()
            .iter()
            .map(|c| CharacterRecord {
                kind: c.kind.tag().to_string(),
                position: c.position,
                health: c.health,
                is_alive: c.is_alive,
            })
            .collect(),
    }
}

/// Rebuild a world from a snapshot using the default config
pub fn deserialize(document: &SaveDocument) -> Result<World, PersistenceError> {
    deserialize_with(document, SimulationConfig::default())
}

/// Rebuild a world from a snapshot.
///
/// `config` is carried by the new world; its starting resources are not
/// applied, the snapshot's amounts are. Version 0 saves carry no generation
/// rates, so they take the configured rates instead.
pub fn deserialize_with(
    document: &SaveDocument,
    config: SimulationConfig,
) -> Result<World, PersistenceError> {
    if document.version > SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: document.version,
            supported: SCHEMA_VERSION,
        });
    }

    let mut ledger = ResourceLedger::new();
    for (tag, amount) in &document.resources {
        match tag.parse::<ResourceKind>() {
            Ok(kind) => ledger.set(kind, *amount),
            Err(_) => tracing::warn!("Skipping unknown resource type in save: {}", tag),
        }
    }
    if document.version == 0 {
        for (kind, rate) in &config.generation_rates {
            if let Err(e) = ledger.set_generation_rate(*kind, *rate) {
                tracing::warn!("Ignoring configured rate: {}", e);
            }
        }
    }
    for (tag, rate) in &document.generation_rates {
        let Ok(kind) = tag.parse::<ResourceKind>() else {
            tracing::warn!("Skipping generation rate for unknown resource: {}", tag);
            continue;
        };
        if let Err(e) = ledger.set_generation_rate(kind, *rate) {
            tracing::warn!("Skipping saved generation rate: {}", e);
        }
    }

    let mut buildings = BuildingRegistry::new();
    for record in &document.buildings {
        match record.kind.parse::<BuildingKind>() {
            Ok(kind) => {
                buildings.restore(kind, record.position, record.health, record.is_built);
            }
            Err(_) => tracing::warn!("Skipping unknown building type in save: {}", record.kind),
        }
    }

    let mut characters = CharacterRegistry::new();
    for record in &document.characters {
        match record.kind.parse::<CharacterKind>() {
            Ok(kind) => {
                characters.restore(kind, record.position, record.health, record.is_alive);
            }
            Err(_) => tracing::warn!("Skipping unknown character type in save: {}", record.kind),
        }
    }

    Ok(World::from_parts(
        config,
        ledger,
        buildings,
        characters,
        SimulationClock::restore(document.game_time),
    ))
}

/// Serialize a world to pretty-printed JSON
pub fn to_json(world: &World) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(&serialize(world))?)
}

/// Parse a world from JSON using the default config
pub fn from_json(json: &str) -> Result<World, PersistenceError> {
    let document: SaveDocument = serde_json::from_str(json)?;
    deserialize(&document)
}

/// Write a world to a JSON file.
///
/// Synchronous I/O; keep it off the per-frame path.
pub fn save(world: &World, path: &Path) -> Result<(), PersistenceError> {
    let json = to_json(world)?;
    std::fs::write(path, json)?;
    tracing::info!("Game saved to {}", path.display());
    Ok(())
}

/// Read a world from a JSON file using the default config
pub fn load(path: &Path) -> Result<World, PersistenceError> {
    load_with(path, SimulationConfig::default())
}

/// Read a world from a JSON file
pub fn load_with(path: &Path, config: SimulationConfig) -> Result<World, PersistenceError> {
    let content = std::fs::read_to_string(path)?;
    let document: SaveDocument = serde_json::from_str(&content)?;
    let world = deserialize_with(&document, config)?;
    tracing::info!(
        "Game loaded from {} (schema v{}, {} buildings, {} characters)",
        path.display(),
        document.version,
        world.buildings().len(),
        world.characters().len()
    );
    Ok(world)
}
