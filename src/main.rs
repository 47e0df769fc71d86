//! Event tremble headless runner.
//!
//! Builds a small map (a player and a few events), makes one character
//! tremble and prints its rendered horizontal position every tick. The
//! world can be written to and restored from a JSON save file, which
//! re-arms persisted trembles the same way a game load would.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --target -1 --amplitude 8 --speed 0.8 --ticks 20
//! cargo run -- --cycles 2 --save save.json
//! cargo run -- --load save.json --ticks 10
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;

use eventtremble::components::screenposition::ScreenPosition;
use eventtremble::components::tremble::Tremble;
use eventtremble::game::{build_update_schedule, init_world, setup_demo_map, tick};
use eventtremble::resources::characterregistry::CharacterRegistry;
use eventtremble::resources::framesnapshot::FrameSnapshot;
use eventtremble::resources::gameconfig::GameConfig;
use eventtremble::resources::worldtime::WorldTime;
use eventtremble::save::{extract_save_contents, read_save, restore_save_contents, write_save};
use eventtremble::tremble;

const TICK_SECONDS: f32 = 1.0 / 60.0;

/// Event tremble runner
#[derive(Parser)]
#[command(version, about = "Headless runner for the character tremble effect")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    create_config: bool,

    /// Character to tremble: negative for the player, otherwise a map event id.
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    target: i32,

    /// Ticks to simulate (overrides config).
    #[arg(long)]
    ticks: Option<u64>,

    /// Tremble amplitude in pixels (overrides config).
    #[arg(long, allow_negative_numbers = true)]
    amplitude: Option<f64>,

    /// Phase speed in radians per tick (overrides config).
    #[arg(long, allow_negative_numbers = true)]
    speed: Option<f64>,

    /// Cycles before the tremble stops by itself (overrides config).
    #[arg(long)]
    cycles: Option<f64>,

    /// Restore this save file instead of building the demo map.
    #[arg(long, value_name = "PATH")]
    load: Option<PathBuf>,

    /// Save the world after the run.
    /// Optionally provide a path (default: the config's save path).
    #[arg(long, value_name = "PATH")]
    save: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::debug!("{e}, using defaults");
    }
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }
    if let Some(amplitude) = cli.amplitude {
        config.amplitude = amplitude;
    }
    if let Some(speed) = cli.speed {
        config.speed = speed;
    }
    if cli.cycles.is_some() {
        config.cycles = cli.cycles;
    }

    // Early-exit: write config and quit
    if cli.create_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    let mut world = init_world(config.map_id);
    match &cli.load {
        Some(path) => match read_save(path) {
            Ok(save) => {
                restore_save_contents(&mut world, &save);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => {
            setup_demo_map(&mut world);
            if !tremble::start(
                &mut world,
                cli.target,
                config.amplitude,
                config.speed,
                config.cycles,
            ) {
                log::warn!("No character with id {}", cli.target);
            }
        }
    }

    log::info!(
        "One cycle takes {:.2} ticks at speed {}",
        tremble::cycles_to_frames(config.speed),
        config.speed
    );

    let mut update = build_update_schedule();

    println!("tick\tx\toffset");
    for _ in 0..config.ticks {
        tick(&mut world, &mut update, TICK_SECONDS);
        let frame = world.resource::<FrameSnapshot>().frame;
        let Some(entity) = world.resource::<CharacterRegistry>().resolve(cli.target) else {
            continue;
        };
        let (x, offset) = rendered(&world, entity);
        println!("{frame}\t{x}\t{offset}");
    }
    let time = world.resource::<WorldTime>();
    log::info!(
        "Simulated {} ticks ({:.2}s of game time)",
        time.frame_count,
        time.elapsed
    );

    if let Some(maybe_path) = cli.save {
        let path = maybe_path.unwrap_or_else(|| config.save_path.clone());
        let save = extract_save_contents(&world);
        if let Err(e) = write_save(&path, &save) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Save written to {}", path.display());
    }
}

fn rendered(world: &World, entity: Entity) -> (f32, i32) {
    let tremble = world.get::<Tremble>(entity);
    let x = world
        .get::<ScreenPosition>(entity)
        .map(|pos| pos.rendered_x(tremble))
        .unwrap_or_default();
    (x, tremble.map(|t| t.offset).unwrap_or(0))
}
