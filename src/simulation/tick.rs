//! Tick system - orchestrates one frame of simulation
//!
//! Each tick, in order:
//! 1. Advance the game clock by `delta`
//! 2. Credit passive resource generation
//! 3. Credit production from every built building
//! 4. Visit living characters (behavior hook, no state change yet)

use crate::core::error::Result;
use crate::core::types::BuildingId;
use crate::dungeon::production::tick_production;
use crate::economy::ResourceKind;
use crate::entity::CharacterRegistry;
use crate::world::World;

/// Events generated during a simulation tick
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent {
    /// Passive generation paid out
    ResourceGenerated { resource: ResourceKind, amount: u64 },
    /// A building paid out its production
    ProductionComplete {
        building_id: BuildingId,
        resource: ResourceKind,
        amount: u64,
    },
}

/// Outcome of one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Game time after the tick
    pub game_time: f64,
    pub events: Vec<SimulationEvent>,
    /// Living characters passed through the behavior hook
    pub characters_visited: usize,
}

impl TickReport {
    /// Total credited to a resource this tick, from any source
    pub fn credited(&self, kind: ResourceKind) -> u64 {
        self.events
            .iter()
            .map(|event| match event {
                SimulationEvent::ResourceGenerated { resource, amount }
                | SimulationEvent::ProductionComplete { resource, amount, .. }
                    if *resource == kind =>
                {
                    *amount
                }
                _ => 0,
            })
            .sum()
    }
}

/// Run a single simulation tick of `delta` seconds.
///
/// A rejected delta leaves the world untouched. A zero delta advances time by
/// zero and credits nothing.
pub fn run_simulation_tick(world: &mut World, delta: f64) -> Result<TickReport> {
    let game_time = world.clock.advance(delta)?;
    let mut events = Vec::new();

    for (resource, amount) in world.ledger.accrue_generation(delta) {
        events.push(SimulationEvent::ResourceGenerated { resource, amount });
    }

    for result in tick_production(&world.buildings, &mut world.ledger, delta) {
        tracing::debug!(
            "Production: building {:?} produced {} {}",
            result.building_id,
            result.amount,
            result.resource
        );
        events.push(SimulationEvent::ProductionComplete {
            building_id: result.building_id,
            resource: result.resource,
            amount: result.amount,
        });
    }

    let characters_visited = tick_behavior(&world.characters, delta);

    Ok(TickReport {
        game_time,
        events,
        characters_visited,
    })
}

/// Per-character behavior hook.
///
/// Takes the registry by shared reference: nothing here may change state until
/// a behavior model drives `Character::transition`.
fn tick_behavior(characters: &CharacterRegistry, _delta: f64) -> usize {
    characters.iter_alive().count()
}
