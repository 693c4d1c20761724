//! Headless BARRAGE session: loads config and theatre, runs the game loop
//! with a scripted defender and prints the final snapshot as JSON.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;

use barrage_app::demo::DemoPilot;
use barrage_app::session;
use barrage_app::state::AppState;
use barrage_core::commands::PlayerCommand;
use barrage_core::config::GameConfig;
use barrage_core::enums::GamePhase;
use barrage_core::error::GameError;
use barrage_core::events::GameEvent;
use barrage_sim::assets::{AssetCache, StaticAssets};
use barrage_sim::layout::TheatreLayout;
use barrage_sim::SimulationEngine;

/// How often the runner polls for a fresh snapshot.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(name = "barrage")]
#[command(about = "Run a headless missile-defence session with a scripted defender")]
struct Args {
    /// TOML game config; any subset of keys, the rest default
    config: Option<PathBuf>,
    /// Theatre layout (.json or .toml); the built-in theatre if omitted
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Wall-clock seconds to run
    #[arg(long, default_value_t = 10.0)]
    secs: f64,
    /// Override the config's RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_toml_str(&read(path, GameError::Config)?)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let layout = match &args.layout {
        Some(path) => load_layout(path)?,
        None => TheatreLayout::default_theatre(),
    };

    let assets = AssetCache::load(&StaticAssets::complete())?;
    let mut pilot = DemoPilot::new(0.5, config.enemy_missile_speed);
    let engine = SimulationEngine::new(config, assets, layout)?;

    let state = AppState::new();
    let events = session::start_simulation(&state, engine)?;
    session::send_command(&state, PlayerCommand::StartSession)?;

    let deadline = Instant::now() + Duration::from_secs_f64(args.secs.max(0.0));
    while Instant::now() < deadline {
        std::thread::sleep(POLL_INTERVAL);

        for event in events.try_iter() {
            match event {
                GameEvent::BuildingDestroyed { handle, .. } => log::info!("house {handle} lost"),
                GameEvent::ScoreChanged { total, .. } => log::info!("score {total}"),
                other => log::debug!("{other:?}"),
            }
        }

        let Some(snapshot) = session::get_snapshot(&state)? else {
            continue;
        };
        if snapshot.phase == GamePhase::GameOver {
            log::info!("city destroyed");
            break;
        }
        for command in pilot.plan(&snapshot) {
            session::send_command(&state, command)?;
        }
    }

    session::stop_simulation(&state)?;
    if let Some(snapshot) = session::get_snapshot(&state)? {
        println!("{}", serde_json::to_string_pretty(&snapshot.score)?);
    }
    Ok(())
}

fn read(path: &Path, wrap: fn(String) -> GameError) -> Result<String, GameError> {
    std::fs::read_to_string(path).map_err(|e| wrap(format!("{}: {e}", path.display())))
}

fn load_layout(path: &Path) -> Result<TheatreLayout, GameError> {
    let contents = read(path, GameError::Layout)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => TheatreLayout::from_toml_str(&contents),
        _ => TheatreLayout::from_json_str(&contents),
    }
}
