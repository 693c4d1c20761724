//! Application state shared between the host side and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use barrage_core::commands::PlayerCommand;
use barrage_core::state::GameStateSnapshot;
use barrage_core::types::SceneHandle;

/// Messages sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// A contact reported by the host's physics world.
    Contact { a: SceneHandle, b: SceneHandle },
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state is `Sync`
/// - `Mutex<Option<...>>` holds what only exists once the loop is started
/// - `Arc<Mutex<...>>` holds the latest snapshot, shared with the loop thread
pub struct AppState {
    /// Channel to the game loop thread. `None` before `start_simulation`.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Game loop thread, joined on stop.
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.loop_thread
            .lock()
            .map(|thread| thread.is_some())
            .unwrap_or(false)
    }
}
