//! Host-facing command handlers.
//!
//! These bridge host requests to the game loop thread via channels, the same
//! way a UI front end would call into the runner.

use std::sync::mpsc;

use barrage_core::commands::PlayerCommand;
use barrage_core::events::GameEvent;
use barrage_core::state::GameStateSnapshot;
use barrage_core::types::SceneHandle;
use barrage_sim::SimulationEngine;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the game loop with `engine`. Returns the receiver for effect events.
pub fn start_simulation(
    state: &AppState,
    engine: SimulationEngine,
) -> Result<mpsc::Receiver<GameEvent>, String> {
    let mut thread = state.loop_thread.lock().map_err(|e| e.to_string())?;
    if thread.is_some() {
        return Err("Simulation already running".into());
    }

    let (events_tx, events_rx) = mpsc::channel();
    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(engine, state.latest_snapshot.clone(), events_tx)
            .map_err(|e| format!("Failed to spawn game loop thread: {e}"))?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *thread = Some(handle);

    Ok(events_rx)
}

fn send(state: &AppState, message: GameLoopCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(message)
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Simulation not started".into()),
    }
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    send(state, GameLoopCommand::PlayerCommand(command))
}

/// Forward a contact from the host's physics world.
pub fn report_contact(state: &AppState, a: SceneHandle, b: SceneHandle) -> Result<(), String> {
    send(state, GameLoopCommand::Contact { a, b })
}

/// Get the latest snapshot (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), String> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|e| e.to_string())?
        .take()
        .ok_or_else(|| String::from("Simulation not started"))?;
    // The loop also stops on disconnect, so a failed send is harmless.
    let _ = tx.send(GameLoopCommand::Shutdown);
    drop(tx);

    let handle = state.loop_thread.lock().map_err(|e| e.to_string())?.take();
    if let Some(handle) = handle {
        handle
            .join()
            .map_err(|_| String::from("Game loop thread panicked"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use barrage_core::config::GameConfig;
    use barrage_core::enums::GamePhase;
    use barrage_sim::assets::{AssetCache, StaticAssets};
    use barrage_sim::layout::TheatreLayout;

    fn engine() -> SimulationEngine {
        let assets = AssetCache::load(&StaticAssets::complete()).unwrap();
        SimulationEngine::new(GameConfig::default(), assets, TheatreLayout::default()).unwrap()
    }

    #[test]
    fn test_commands_before_start_fail() {
        let state = AppState::new();
        assert!(send_command(&state, PlayerCommand::Pause).is_err());
        assert!(stop_simulation(&state).is_err());
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_send_stop() {
        let state = AppState::new();
        let _events = start_simulation(&state, engine()).unwrap();
        assert!(state.is_running());
        assert!(start_simulation(&state, engine()).is_err());

        send_command(&state, PlayerCommand::StartSession).unwrap();
        std::thread::sleep(game_loop::TICK_DURATION * 10);
        stop_simulation(&state).unwrap();

        assert!(!state.is_running());
        let snapshot = get_snapshot(&state).unwrap().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(send_command(&state, PlayerCommand::Pause).is_err());
    }
}
