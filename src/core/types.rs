//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// 3D world position
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ORIGIN: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Unique building identifier (insertion index in the building registry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BuildingId(pub u32);

impl BuildingId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unique character identifier (insertion index in the character registry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub u32);

impl CharacterId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which family of entity kind a tag was meant to name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindCategory {
    Resource,
    Building,
    Character,
}

impl std::fmt::Display for KindCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            KindCategory::Resource => "resource",
            KindCategory::Building => "building",
            KindCategory::Character => "character",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_display() {
        assert_eq!(Vec3::new(1.0, 0.0, -2.5).to_string(), "(1, 0, -2.5)");
    }

    #[test]
    fn test_vec3_serializes_as_xyz_object() {
        let json = serde_json::to_string(&Vec3::new(1.0, 2.5, -3.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.5,"z":-3.0}"#);
    }

    #[test]
    fn test_vec3_is_finite() {
        assert!(Vec3::ORIGIN.is_finite());
        assert!(!Vec3::new(f32::NAN, 0.0, 0.0).is_finite());
    }

    #[test]
    fn test_ids_index() {
        assert_eq!(BuildingId(3).index(), 3);
        assert_eq!(CharacterId(0).index(), 0);
        assert!(BuildingId(1) < BuildingId(2));
    }
}
