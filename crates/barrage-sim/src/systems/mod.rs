//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or is passed in.

pub mod cleanup;
pub mod collision;
pub mod contact;
pub mod enemy_fire;
pub mod explosion;
pub mod fire_control;
pub mod heat;
pub mod minimap;
pub mod movement;
pub mod placement;
pub mod snapshot;
