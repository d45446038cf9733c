//! Host bridge - the call-in/call-out surface a game engine talks to
//!
//! The host addresses everything by string tag and plain coordinates and gets
//! back booleans, amounts and serializable views. Errors are logged here and
//! reported as `false` or an empty answer, never raised into the host.

use ahash::AHashMap;
use std::collections::BTreeMap;
use std::path::Path;

use crate::bridge::command::{CommandReply, HostCommand, HostEvent, HostEventKind};
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::Vec3;
use crate::dungeon::BuildingKind;
use crate::economy::ResourceKind;
use crate::entity::CharacterKind;
use crate::simulation::TickReport;
use crate::world::{BuildingView, CharacterView, StateView, Statistics, World};

/// Host callback for one event kind
pub type HostCallback = Box<dyn FnMut(&HostEvent) + Send>;

/// Owns a world on behalf of the host engine
pub struct GameBridge {
    world: World,
    callbacks: AHashMap<HostEventKind, HostCallback>,
}

impl Default for GameBridge {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl GameBridge {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            world: World::new(config),
            callbacks: AHashMap::new(),
        }
    }

    /// Idempotent; returns false if the world was already initialized
    pub fn initialize(&mut self) -> bool {
        self.world.initialize()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Register the callback for an event kind, replacing any previous one
    pub fn register_callback<F>(&mut self, kind: HostEventKind, callback: F)
    where
        F: FnMut(&HostEvent) + Send + 'static,
    {
        tracing::debug!("Registered host callback {}", kind.name());
        self.callbacks.insert(kind, Box::new(callback));
    }

    fn notify(&mut self, event: HostEvent) {
        match self.callbacks.get_mut(&event.kind()) {
            Some(callback) => callback(&event),
            None => tracing::debug!("No host callback for {}", event.kind().name()),
        }
    }

    pub fn update(&mut self, delta: f64) -> Result<TickReport> {
        self.world.update(delta)
    }

    /// Build by tag; false for an unknown tag or an unaffordable building
    pub fn build(&mut self, building_type: &str, x: f32, y: f32, z: f32) -> bool {
        let position = Vec3::new(x, y, z);
        let result = building_type
            .parse::<BuildingKind>()
            .and_then(|kind| self.world.build(kind, position));
        match result {
            Ok(_) => {
                self.notify(HostEvent::BuildingCreated {
                    kind: building_type.to_string(),
                    position,
                });
                true
            }
            Err(e) => {
                tracing::warn!("Build rejected: {}", e);
                false
            }
        }
    }

    /// Summon by tag; false for an unknown tag or an unaffordable character
    pub fn summon(&mut self, character_type: &str, x: f32, y: f32, z: f32) -> bool {
        let position = Vec3::new(x, y, z);
        let result = character_type
            .parse::<CharacterKind>()
            .and_then(|kind| self.world.summon(kind, position));
        match result {
            Ok(_) => {
                self.notify(HostEvent::CharacterCreated {
                    kind: character_type.to_string(),
                    position,
                });
                true
            }
            Err(e) => {
                tracing::warn!("Summon rejected: {}", e);
                false
            }
        }
    }

    /// Amount of a resource by tag; 0 for an unknown tag
    pub fn get_resource(&self, resource_type: &str) -> u64 {
        match resource_type.parse::<ResourceKind>() {
            Ok(kind) => self.world.resource(kind),
            Err(e) => {
                tracing::warn!("{}", e);
                0
            }
        }
    }

    pub fn get_state(&self) -> StateView {
        self.world.state_view()
    }

    pub fn statistics(&self) -> Statistics {
        self.world.statistics()
    }

    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.world.save(path)?;
        self.notify(HostEvent::GameSaved { path: path.to_path_buf() });
        Ok(())
    }

    /// Replace the world with a save; on failure the current world is kept
    pub fn load(&mut self, path: &Path) -> Result<()> {
        self.world.load_from(path)?;
        self.notify(HostEvent::GameLoaded { path: path.to_path_buf() });
        Ok(())
    }

    /// Dispatch a JSON command from the host
    pub fn process_input(&mut self, input: serde_json::Value) -> CommandReply {
        let command = match serde_json::from_value::<HostCommand>(input) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("Rejected host input: {}", e);
                return CommandReply::Done(false);
            }
        };

        match command {
            HostCommand::BuildBuilding { building_type, x, y, z } => {
                CommandReply::Done(self.build(&building_type, x, y, z))
            }
            HostCommand::SummonCharacter { character_type, x, y, z } => {
                CommandReply::Done(self.summon(&character_type, x, y, z))
            }
            HostCommand::GetResource { resource_type } => {
                CommandReply::Amount(self.get_resource(&resource_type))
            }
            HostCommand::SaveGame { filename } => CommandReply::Done(self.log_failure(
                "Save",
                |bridge| bridge.save(&filename),
            )),
            HostCommand::LoadGame { filename } => CommandReply::Done(self.log_failure(
                "Load",
                |bridge| bridge.load(&filename),
            )),
        }
    }

    /// Dispatch a command given as a JSON string
    pub fn process_json(&mut self, input: &str) -> CommandReply {
        match serde_json::from_str(input) {
            Ok(value) => self.process_input(value),
            Err(e) => {
                tracing::warn!("Rejected host input: {}", e);
                CommandReply::Done(false)
            }
        }
    }

    fn log_failure<F>(&mut self, what: &str, op: F) -> bool
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        match op(self) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{} failed: {}", what, e);
                false
            }
        }
    }

    /// Every resource kind with its amount, including empty ones
    pub fn all_resources(&self) -> BTreeMap<String, u64> {
        ResourceKind::ALL
            .into_iter()
            .map(|kind| (kind.tag().to_string(), self.world.resource(kind)))
            .collect()
    }

    pub fn all_buildings(&self) -> Vec<BuildingView> {
        self.world.buildings().iter().map(BuildingView::from).collect()
    }

    pub fn all_characters(&self) -> Vec<CharacterView> {
        self.world.characters().iter().map(CharacterView::from).collect()
    }

    /// Whether the host may place something at this position
    pub fn validate_position(&self, x: f32, y: f32, z: f32) -> bool {
        self.world.config().placement.contains(Vec3::new(x, y, z))
    }

    /// Cost by tag; empty for an unknown tag
    pub fn building_cost(&self, building_type: &str) -> BTreeMap<String, u64> {
        building_type
            .parse::<BuildingKind>()
            .map(|kind| self.world.costs().building_cost(kind).to_tag_map())
            .unwrap_or_default()
    }

    /// Cost by tag; empty for an unknown tag
    pub fn character_cost(&self, character_type: &str) -> BTreeMap<String, u64> {
        character_type
            .parse::<CharacterKind>()
            .map(|kind| self.world.costs().character_cost(kind).to_tag_map())
            .unwrap_or_default()
    }

    pub fn can_afford_building(&self, building_type: &str) -> bool {
        building_type
            .parse::<BuildingKind>()
            .map(|kind| self.world.can_afford_building(kind))
            .unwrap_or(false)
    }

    pub fn can_afford_character(&self, character_type: &str) -> bool {
        character_type
            .parse::<CharacterKind>()
            .map(|kind| self.world.can_afford_character(kind))
            .unwrap_or(false)
    }
}
