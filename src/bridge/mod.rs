//! Boundary between the simulation core and a host game engine

pub mod command;
pub mod host;

pub use command::{CommandReply, HostCommand, HostEvent, HostEventKind};
pub use host::{GameBridge, HostCallback};
