//! Save and load whole worlds as versioned JSON documents

pub mod codec;
pub mod document;

use thiserror::Error;

pub use codec::{
    deserialize, deserialize_with, from_json, load, load_with, save, serialize, to_json,
};
pub use document::{BuildingRecord, CharacterRecord, SaveDocument, SCHEMA_VERSION};

/// Errors that can occur when saving or loading a world
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File missing or unreadable/unwritable
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Not a valid save document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Written by a newer build
    #[error("Save schema v{found} is newer than supported v{supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
