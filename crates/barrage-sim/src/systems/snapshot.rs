//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only: never modifies the world.

use glam::Vec3;
use hecs::World;

use barrage_core::components::*;
use barrage_core::config::GameConfig;
use barrage_core::enums::*;
use barrage_core::events::GameEvent;
use barrage_core::state::*;
use barrage_core::types::{Position, SceneHandle, SimTime};

use crate::score::ScoreState;
use crate::systems::minimap;

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    config: &GameConfig,
    time: &SimTime,
    phase: GamePhase,
    battery_selection: BatterySelection,
    score: &ScoreState,
    pending_placement: Option<Vec3>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let buildings = build_buildings(world);
    let buildings_remaining = buildings.len() as u32;
    GameStateSnapshot {
        time: *time,
        phase,
        battery_selection,
        batteries: build_batteries(world, config),
        projectiles: build_projectiles(world),
        buildings,
        minimap: minimap::markers(world, &config.minimap),
        pending_placement,
        events,
        score: score.view(buildings_remaining),
    }
}

fn build_batteries(world: &World, config: &GameConfig) -> Vec<BatteryView> {
    let mut views: Vec<BatteryView> = world
        .query::<(&Battery, &Position, &SceneHandle)>()
        .iter()
        .map(|(_, (battery, pos, handle))| BatteryView {
            index: battery.index,
            handle: *handle,
            position: pos.0,
            heat: battery.heat,
            heat_fraction: (battery.heat / config.max_temp).clamp(0.0, 1.0),
            overheated: battery.overheated,
        })
        .collect();
    views.sort_by_key(|v| v.index);
    views
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &SceneHandle, Option<&Explosion>)>()
        .iter()
        .map(|(_, (proj, pos, handle, explosion))| ProjectileView {
            handle: *handle,
            owner: proj.owner,
            state: proj.state,
            position: pos.0,
            target: proj.target,
            explosion_radius: explosion.map(|e| e.radius),
        })
        .collect();
    views.sort_by_key(|v| v.handle);
    views
}

fn build_buildings(world: &World) -> Vec<BuildingView> {
    let mut views: Vec<BuildingView> = world
        .query::<(&Building, &Position, &SceneHandle)>()
        .iter()
        .filter(|(_, (building, _, _))| building.alive)
        .map(|(_, (_, pos, handle))| BuildingView {
            handle: *handle,
            position: pos.0,
        })
        .collect();
    views.sort_by_key(|v| v.handle);
    views
}
