//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! Commands and contact reports arrive via `mpsc` channel and are handed to
//! the engine at the tick boundary. Each snapshot's effect events are
//! forwarded to the host; the snapshot itself is stored in shared state for
//! polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use barrage_core::constants::{DT, TICK_RATE};
use barrage_core::events::GameEvent;
use barrage_core::state::GameStateSnapshot;
use barrage_sim::SimulationEngine;

use crate::state::GameLoopCommand;

/// Wall-clock duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread, taking ownership of the engine.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    events_tx: mpsc::Sender<GameEvent>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("barrage-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot, &events_tx);
        })?;

    Ok((cmd_tx, handle))
}

/// Hand every pending message to the engine. Returns `false` once the loop
/// should stop.
pub fn drain_commands(engine: &mut SimulationEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                engine.queue_command(cmd);
            }
            Ok(GameLoopCommand::Contact { a, b }) => {
                engine.report_contact(a, b);
            }
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    events_tx: &mpsc::Sender<GameEvent>,
) {
    let mut next_tick_time = Instant::now();
    log::info!("game loop started at {TICK_RATE}Hz");

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            break;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick(DT);

        // 3. Forward effect events to the host; a closed receiver is fine
        for event in &snapshot.events {
            let _ = events_tx.send(event.clone());
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }

    log::info!("game loop stopped after {} ticks", engine.time().tick);
}
