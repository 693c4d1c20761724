//! Edit mode: placing new houses on the floor grid.

use glam::Vec3;
use hecs::{Entity, World};

use barrage_core::config::GameConfig;

use crate::bridge::SceneBridge;
use crate::world_setup;

/// Snap a floor point to the centre of its grid cell.
///
/// The coordinate is truncated to a cell boundary (towards zero) and then
/// moved half a cell away from zero; `y` is untouched. Zero counts as
/// negative.
pub fn snap_to_grid(point: Vec3, grid: f32) -> Vec3 {
    let snap = |v: f32| {
        let base = v - v % grid;
        if v <= 0.0 {
            base - grid / 2.0
        } else {
            base + grid / 2.0
        }
    };
    Vec3::new(snap(point.x), point.y, snap(point.z))
}

/// Place a house at the grid cell containing `position`.
pub fn place_building(
    world: &mut World,
    bridge: &mut SceneBridge,
    config: &GameConfig,
    position: Vec3,
) -> Entity {
    let snapped = snap_to_grid(position, config.grid_size);
    log::info!("placing building at {snapped} (requested {position})");
    world_setup::spawn_building(world, bridge, config, snapped)
}

/// Two-step placement: a ghost cell is chosen first, then confirmed or
/// cancelled.
#[derive(Debug, Clone, Default)]
pub struct PendingPlacement {
    cell: Option<Vec3>,
}

impl PendingPlacement {
    pub fn begin(&mut self, config: &GameConfig, position: Vec3) -> Vec3 {
        let cell = snap_to_grid(position, config.grid_size);
        self.cell = Some(cell);
        cell
    }

    pub fn cancel(&mut self) {
        self.cell = None;
    }

    pub fn cell(&self) -> Option<Vec3> {
        self.cell
    }

    /// Build the pending house. `None` if nothing was pending.
    pub fn confirm(
        &mut self,
        world: &mut World,
        bridge: &mut SceneBridge,
        config: &GameConfig,
    ) -> Option<Entity> {
        let cell = self.cell.take()?;
        log::info!("placing building at {cell}");
        Some(world_setup::spawn_building(world, bridge, config, cell))
    }
}
