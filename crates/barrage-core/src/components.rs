//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Fixed launch point for player missiles with its own heat state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Battery {
    /// Index in layout order (stable for the whole session).
    pub index: usize,
    /// Accumulated heat, always within `[0, max_temp]`.
    pub heat: f32,
    /// Latched when a shot would overheat; cleared when heat is back to 0.
    pub overheated: bool,
}

/// A missile in the air (or exploding).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub origin: Vec3,
    pub target: Vec3,
    pub speed: f32,
    pub owner: Owner,
    pub state: ProjectileState,
}

/// Blast attached to a projectile once it enters `Exploding`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    /// Simulation time (seconds) at which the blast started.
    pub started_at: f64,
    /// Current blast radius.
    pub radius: f32,
}

/// A house in the defended city.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Building {
    pub alive: bool,
}

/// Aim point a player missile flies towards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetMarker;

/// Contact shape used by the built-in detector and by the router's tagging.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionBody {
    pub category: CollisionCategory,
    /// Categories (bitwise OR) this body reports contacts with.
    pub contact_mask: u32,
    pub radius: f32,
}
