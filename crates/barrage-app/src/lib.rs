//! BARRAGE headless runner.
//!
//! Runs the simulation engine on its own thread and exposes a small command
//! surface (start, send, contact, snapshot, stop) a host front end can drive.

pub mod demo;
pub mod game_loop;
pub mod session;
pub mod state;

pub use barrage_core as core;
