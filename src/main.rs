//! Dungeon Heart - headless runner
//!
//! Builds a world from an optional TOML config or save file, applies the
//! requested builds and summons, runs a fixed number of ticks and prints the
//! final state as JSON.

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use dungeon_heart::core::config::SimulationConfig;
use dungeon_heart::core::error::Result;
use dungeon_heart::core::types::Vec3;
use dungeon_heart::dungeon::BuildingKind;
use dungeon_heart::entity::CharacterKind;
use dungeon_heart::persistence::PersistenceError;
use dungeon_heart::world::World;

/// Run the dungeon simulation without a host engine
#[derive(Parser, Debug)]
#[command(name = "dungeon-heart")]
#[command(about = "Run the dungeon simulation headless and print its final state")]
struct Args {
    /// TOML simulation config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from this save file instead of a fresh world
    #[arg(long)]
    load: Option<PathBuf>,

    /// Write the final world to this save file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 60)]
    ticks: u32,

    /// Seconds of game time per tick
    #[arg(long, default_value_t = 1.0)]
    delta: f64,

    /// Building to place before the run, as kind@x,y,z (repeatable)
    #[arg(long = "build", value_parser = parse_placement::<BuildingKind>)]
    builds: Vec<Placement<BuildingKind>>,

    /// Character to summon before the run, as kind@x,y,z (repeatable)
    #[arg(long = "summon", value_parser = parse_placement::<CharacterKind>)]
    summons: Vec<Placement<CharacterKind>>,

    /// Print aggregate statistics instead of the state view
    #[arg(long, default_value_t = false)]
    stats: bool,
}

/// A kind tag with an optional position
#[derive(Debug, Clone)]
struct Placement<K> {
    kind: K,
    position: Vec3,
}

fn parse_placement<K>(arg: &str) -> std::result::Result<Placement<K>, String>
where
    K: FromStr,
    K::Err: std::fmt::Display,
{
    let (tag, coords) = match arg.split_once('@') {
        Some((tag, coords)) => (tag, Some(coords)),
        None => (arg, None),
    };
    let kind = tag.parse::<K>().map_err(|e| e.to_string())?;

    let position = match coords {
        None => Vec3::ORIGIN,
        Some(coords) => {
            let parts = coords
                .split(',')
                .map(|p| p.trim().parse::<f32>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| format!("bad coordinate in '{}': {}", coords, e))?;
            match parts.as_slice() {
                [x, y, z] => Vec3::new(*x, *y, *z),
                _ => return Err(format!("expected x,y,z after '@', got '{}'", coords)),
            }
        }
    };

    Ok(Placement { kind, position })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dungeon_heart=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::load_from_toml(path)?,
        None => SimulationConfig::default(),
    };

    let mut world = World::new(config);
    world.initialize();
    if let Some(path) = &args.load {
        world.load_from(path)?;
    }

    for placement in &args.builds {
        if let Err(e) = world.build(placement.kind, placement.position) {
            tracing::warn!("Skipping build of {}: {}", placement.kind, e);
        }
    }
    for placement in &args.summons {
        if let Err(e) = world.summon(placement.kind, placement.position) {
            tracing::warn!("Skipping summon of {}: {}", placement.kind, e);
        }
    }

    for _ in 0..args.ticks {
        world.update(args.delta)?;
    }
    tracing::info!("Ran {} ticks, game time {:.1}s", args.ticks, world.game_time());

    if let Some(path) = &args.save {
        world.save(path)?;
    }

    let output = if args.stats {
        serde_json::to_string_pretty(&world.statistics())
    } else {
        serde_json::to_string_pretty(&world.state_view())
    }
    .map_err(PersistenceError::from)?;
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_placement_with_position() {
        let p = parse_placement::<BuildingKind>("treasury@1,0,-2.5").unwrap();
        assert_eq!(p.kind, BuildingKind::Treasury);
        assert_eq!(p.position, Vec3::new(1.0, 0.0, -2.5));
    }

    #[test]
    fn test_parse_placement_defaults_to_origin() {
        let p = parse_placement::<CharacterKind>("imp").unwrap();
        assert_eq!(p.kind, CharacterKind::Imp);
        assert_eq!(p.position, Vec3::ORIGIN);
    }

    #[test]
    fn test_parse_placement_rejects_bad_input() {
        assert!(parse_placement::<BuildingKind>("castle@0,0,0").is_err());
        assert!(parse_placement::<BuildingKind>("treasury@1,2").is_err());
        assert!(parse_placement::<CharacterKind>("imp@a,b,c").is_err());
    }
}
