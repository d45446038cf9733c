pub mod clock;
pub mod tick;

pub use clock::SimulationClock;
pub use tick::{run_simulation_tick, SimulationEvent, TickReport};
