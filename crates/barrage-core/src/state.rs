//! Game state snapshot: the complete visible state handed to the UI overlay
//! after each tick.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{SceneHandle, SimTime};

/// Complete game state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub battery_selection: BatterySelection,
    pub batteries: Vec<BatteryView>,
    pub projectiles: Vec<ProjectileView>,
    pub buildings: Vec<BuildingView>,
    pub minimap: Vec<MinimapMarker>,
    /// Grid cell of the ghost house awaiting confirmation, if any.
    pub pending_placement: Option<Vec3>,
    /// Events produced since the previous snapshot.
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}

/// Battery heat gauge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryView {
    pub index: usize,
    pub handle: SceneHandle,
    pub position: Vec3,
    pub heat: f32,
    /// `heat / max_temp`, for the gauge fill.
    pub heat_fraction: f32,
    pub overheated: bool,
}

/// A live projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub handle: SceneHandle,
    pub owner: Owner,
    pub state: ProjectileState,
    pub position: Vec3,
    pub target: Vec3,
    /// Blast radius while exploding.
    pub explosion_radius: Option<f32>,
}

/// A standing house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingView {
    pub handle: SceneHandle,
    pub position: Vec3,
}

/// A marker on the minimap plane (overlay points).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimapMarker {
    pub handle: SceneHandle,
    pub kind: EntityKind,
    pub position: Vec2,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: i64,
    pub enemy_missiles_destroyed: u32,
    pub buildings_lost: u32,
    pub buildings_remaining: u32,
    pub player_missiles_fired: u32,
    pub misfires: u32,
}
