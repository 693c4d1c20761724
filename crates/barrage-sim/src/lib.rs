//! Simulation engine for BARRAGE.
//!
//! Owns the hecs ECS world, drains player commands and contact reports once
//! per frame, runs the fire-control / heat / collision / explosion systems and
//! produces `GameStateSnapshot`s for the host.

pub mod assets;
pub mod bridge;
pub mod engine;
pub mod input;
pub mod layout;
pub mod links;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use barrage_core as core;
pub use engine::SimulationEngine;
