//! Fundamental geometric and simulation types.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 3D position in theatre space (scene units, y = up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// 3D velocity in theatre space (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Opaque id the host maps onto its own scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SceneHandle(pub u64);

/// Id of a template asset resolved by the host at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Straight-line distance to another position.
    pub fn range_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Unit vector pointing at `other`, or zero when the points coincide.
    pub fn direction_to(&self, other: &Position) -> Vec3 {
        (other.0 - self.0).normalize_or_zero()
    }
}

impl From<Vec3> for Position {
    fn from(v: Vec3) -> Self {
        Self(v)
    }
}

impl Velocity {
    /// Velocity of magnitude `speed` from `from` towards `to`.
    pub fn towards(from: &Position, to: &Position, speed: f32) -> Self {
        Self(from.direction_to(to) * speed)
    }

    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

impl fmt::Display for SceneHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
