//! Core types and definitions for the BARRAGE missile-command logic.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, configuration, errors
//! and constants. It has no dependency on the ECS or on any host engine.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::{GameError, Result};

#[cfg(test)]
mod tests;
