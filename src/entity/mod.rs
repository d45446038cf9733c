//! Entity layer - characters, their action states, and the character registry

pub mod action;
pub mod character;
pub mod registry;

pub use action::ActionState;
pub use character::{Character, CharacterKind, CharacterProfile};
pub use registry::CharacterRegistry;
