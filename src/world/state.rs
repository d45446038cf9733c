//! World - owns the ledger, both registries, and the clock for one game

use std::path::Path;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{BuildingId, CharacterId, Vec3};
use crate::dungeon::{BuildingKind, BuildingRegistry};
use crate::economy::{CostTable, ResourceKind, ResourceLedger};
use crate::entity::{Character, CharacterKind, CharacterRegistry};
use crate::persistence;
use crate::simulation::{run_simulation_tick, SimulationClock, TickReport};
use crate::world::view::{StateView, Statistics};

/// One independent simulation.
///
/// Every mutating entry point takes `&mut self`; a host driving the world from
/// several threads wraps it in a single lock.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) ledger: ResourceLedger,
    pub(crate) buildings: BuildingRegistry,
    pub(crate) characters: CharacterRegistry,
    pub(crate) clock: SimulationClock,
    costs: CostTable,
    config: SimulationConfig,
    initialized: bool,
}

impl Default for World {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl World {
    /// Create an empty, uninitialized world. All accounts start at zero.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            ledger: ResourceLedger::new(),
            buildings: BuildingRegistry::new(),
            characters: CharacterRegistry::new(),
            clock: SimulationClock::new(),
            costs: CostTable::standard(),
            config,
            initialized: false,
        }
    }

    /// Assemble an already-running world, e.g. from a snapshot
    pub(crate) fn from_parts(
        config: SimulationConfig,
        ledger: ResourceLedger,
        buildings: BuildingRegistry,
        characters: CharacterRegistry,
        clock: SimulationClock,
    ) -> Self {
        Self {
            ledger,
            buildings,
            characters,
            clock,
            costs: CostTable::standard(),
            config,
            initialized: true,
        }
    }

    /// Stock the starting resources and place the dungeon heart.
    ///
    /// Idempotent: returns false and changes nothing on an initialized world.
    pub fn initialize(&mut self) -> bool {
        if self.initialized {
            return false;
        }

        for (kind, amount) in &self.config.starting_resources {
            self.ledger.add(*kind, *amount);
        }
        for (kind, rate) in &self.config.generation_rates {
            if let Err(e) = self.ledger.set_generation_rate(*kind, *rate) {
                tracing::warn!("Ignoring configured rate: {}", e);
            }
        }
        let heart = self
            .buildings
            .spawn(BuildingKind::DungeonHeart, self.config.heart_position);

        self.initialized = true;
        tracing::info!(
            "World initialized: heart {:?} at {}, gold {}, mana {}",
            heart,
            self.config.heart_position,
            self.ledger.get(ResourceKind::Gold),
            self.ledger.get(ResourceKind::Mana)
        );
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Advance the simulation by `delta` seconds.
    ///
    /// Does nothing before `initialize`.
    pub fn update(&mut self, delta: f64) -> Result<TickReport> {
        if !self.initialized {
            SimulationClock::validate_delta(delta)?;
            return Ok(TickReport {
                game_time: self.clock.game_time(),
                ..TickReport::default()
            });
        }
        run_simulation_tick(self, delta)
    }

    /// Pay for and place a building
    pub fn build(&mut self, kind: BuildingKind, position: Vec3) -> Result<BuildingId> {
        self.buildings.build(kind, position, &mut self.ledger, &self.costs)
    }

    /// Pay for and summon a character
    pub fn summon(&mut self, kind: CharacterKind, position: Vec3) -> Result<CharacterId> {
        self.characters.summon(kind, position, &mut self.ledger, &self.costs)
    }

    pub fn can_afford_building(&self, kind: BuildingKind) -> bool {
        CostTable::can_afford(&self.ledger, self.costs.building_cost(kind))
    }

    pub fn can_afford_character(&self, kind: CharacterKind) -> bool {
        CostTable::can_afford(&self.ledger, self.costs.character_cost(kind))
    }

    pub fn resource(&self, kind: ResourceKind) -> u64 {
        self.ledger.get(kind)
    }

    pub fn game_time(&self) -> f64 {
        self.clock.game_time()
    }

    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    /// Direct ledger access for credits, debits and generation rates
    pub fn ledger_mut(&mut self) -> &mut ResourceLedger {
        &mut self.ledger
    }

    pub fn buildings(&self) -> &BuildingRegistry {
        &self.buildings
    }

    pub fn characters(&self) -> &CharacterRegistry {
        &self.characters
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(id)
    }

    pub fn costs(&self) -> &CostTable {
        &self.costs
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Compact state for the host
    pub fn state_view(&self) -> StateView {
        StateView {
            game_time: self.game_time(),
            resources: self
                .ledger
                .iter()
                .map(|a| (a.kind.tag().to_string(), a.amount))
                .collect(),
            buildings_count: self.buildings.len(),
            characters_count: self.characters.len(),
        }
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            game_time: self.game_time(),
            total_resources: self.ledger.total(),
            buildings_count: self.buildings.len(),
            characters_count: self.characters.len(),
            alive_characters: self.characters.alive_count(),
            built_buildings: self.buildings.built_count(),
        }
    }

    /// Write a snapshot of this world to disk
    pub fn save(&self, path: &Path) -> Result<()> {
        persistence::save(self, path)?;
        Ok(())
    }

    /// Replace this world with the snapshot at `path`.
    ///
    /// On any failure the current world is left exactly as it was.
    pub fn load_from(&mut self, path: &Path) -> Result<()> {
        let loaded = persistence::load_with(path, self.config.clone())?;
        *self = loaded;
        Ok(())
    }
}
