use thiserror::Error;

use crate::core::config::ConfigError;
use crate::core::types::{KindCategory, Vec3};
use crate::economy::ResourceKind;
use crate::entity::ActionState;
use crate::persistence::PersistenceError;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown {category} kind: {tag}")]
    UnknownKind { category: KindCategory, tag: String },

    #[error("Insufficient resources for {0}")]
    InsufficientResources(String),

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(#[from] PersistenceError),

    #[error("Invalid position: {0}")]
    InvalidPosition(Vec3),

    #[error("Invalid time step: {0}")]
    InvalidDelta(f64),

    #[error("Invalid generation rate {rate} for {kind:?}")]
    InvalidRate { kind: ResourceKind, rate: f64 },

    #[error("Illegal action transition: {from:?} -> {to:?}")]
    InvalidTransition { from: ActionState, to: ActionState },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl CoreError {
    pub fn unknown(category: KindCategory, tag: impl Into<String>) -> Self {
        CoreError::UnknownKind { category, tag: tag.into() }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
