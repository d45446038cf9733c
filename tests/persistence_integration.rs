//! Integration tests for save and load
//!
//! These tests go through real files:
//! - A saved world loads back with the same economy and entities
//! - A missing or malformed file leaves the running world untouched
//! - Legacy unversioned saves still load

use std::path::PathBuf;

use dungeon_heart::core::error::CoreError;
use dungeon_heart::core::types::Vec3;
use dungeon_heart::dungeon::BuildingKind;
use dungeon_heart::economy::ResourceKind;
use dungeon_heart::entity::CharacterKind;
use dungeon_heart::persistence::{self, PersistenceError};
use dungeon_heart::world::World;

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dungeon_heart_{}_{}.json", std::process::id(), name))
}

fn busy_world() -> World {
    let mut world = World::default();
    world.initialize();
    world.build(BuildingKind::Treasury, Vec3::new(3.0, 0.0, 4.0)).unwrap();
    world.build(BuildingKind::DemonLair, Vec3::new(-6.0, 1.0, 2.0)).unwrap();
    let imp = world.summon(CharacterKind::Imp, Vec3::new(1.0, 0.0, 1.0)).unwrap();
    world.summon(CharacterKind::Archer, Vec3::new(0.0, 0.0, -3.0)).unwrap();
    world.character_mut(imp).unwrap().take_damage(15);
    for _ in 0..5 {
        world.update(0.5).unwrap();
    }
    world
}

#[test]
fn test_save_and_load_roundtrip() {
    let path = scratch_file("roundtrip");
    let world = busy_world();
    world.save(&path).unwrap();

    let mut loaded = World::default();
    loaded.load_from(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.game_time(), world.game_time());
    for kind in ResourceKind::ALL {
        assert_eq!(loaded.resource(kind), world.resource(kind), "{}", kind);
    }

    assert_eq!(loaded.buildings().len(), 3);
    for (a, b) in world.buildings().iter().zip(loaded.buildings().iter()) {
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.position, b.position);
        assert_eq!(a.health, b.health);
        assert_eq!(a.is_built, b.is_built);
    }

    assert_eq!(loaded.characters().len(), 2);
    for (a, b) in world.characters().iter().zip(loaded.characters().iter()) {
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.position, b.position);
        assert_eq!(a.health, b.health);
        assert_eq!(a.is_alive, b.is_alive);
    }
}

#[test]
fn test_loaded_world_keeps_ticking() {
    let path = scratch_file("keeps_ticking");
    busy_world().save(&path).unwrap();

    let mut loaded = World::default();
    loaded.load_from(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let mana = loaded.resource(ResourceKind::Mana);
    let time = loaded.game_time();
    loaded.update(1.0).unwrap();

    assert_eq!(loaded.game_time(), time + 1.0);
    assert_eq!(loaded.resource(ResourceKind::Mana), mana + 2);
    // Initialize on a loaded world must not add a second heart
    assert!(!loaded.initialize());
    assert_eq!(loaded.buildings().count_of(BuildingKind::DungeonHeart), 1);
}

#[test]
fn test_missing_file_leaves_world_untouched() {
    let mut world = busy_world();
    let before = world.state_view();

    let result = world.load_from(&scratch_file("does_not_exist"));

    assert!(matches!(
        result,
        Err(CoreError::PersistenceUnavailable(PersistenceError::Io(_)))
    ));
    assert_eq!(world.state_view(), before);
}

#[test]
fn test_malformed_file_leaves_world_untouched() {
    let path = scratch_file("malformed");
    std::fs::write(&path, "{\"game_time\": \"soon\"").unwrap();

    let mut world = busy_world();
    let before = world.state_view();
    let result = world.load_from(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(
        result,
        Err(CoreError::PersistenceUnavailable(PersistenceError::Json(_)))
    ));
    assert_eq!(world.state_view(), before);
    assert_eq!(world.characters().len(), 2);
}

#[test]
fn test_legacy_save_loads() {
    let path = scratch_file("legacy");
    std::fs::write(
        &path,
        r#"{
            "game_time": 42.0,
            "resources": {"gold": 640, "mana": 310, "food": 180, "raw_gold": 5, "creatures": 1},
            "buildings": [
                {"type": "dungeon_heart", "position": {"x": 0.0, "y": 0.0, "z": 0.0}, "health": 1000, "is_built": true}
            ],
            "characters": [
                {"type": "goblin_engineer", "position": {"x": 2.0, "y": 0.0, "z": 2.0}, "health": 80, "is_alive": true}
            ]
        }"#,
    )
    .unwrap();

    let loaded = persistence::load(&path);
    std::fs::remove_file(&path).ok();
    let world = loaded.unwrap();

    assert_eq!(world.game_time(), 42.0);
    assert_eq!(world.resource(ResourceKind::Gold), 640);
    assert_eq!(world.resource(ResourceKind::RawMaterial), 5);
    assert_eq!(world.buildings().len(), 1);
    assert_eq!(world.characters().iter().next().unwrap().kind, CharacterKind::GoblinEngineer);
}
