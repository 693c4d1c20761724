//! Enemy fire: launches a missile at a random standing house every
//! `enemy_fire_interval` seconds from a random point on the spawn strip.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use barrage_core::components::Building;
use barrage_core::config::GameConfig;
use barrage_core::types::{Position, SceneHandle};

use crate::bridge::SceneBridge;
use crate::layout::SpawnStrip;
use crate::world_setup;

/// Launch clock. The first interval is measured from the first tick seen.
#[derive(Debug, Clone, Default)]
pub struct EnemyFireState {
    last_launch: Option<f64>,
}

impl EnemyFireState {
    pub fn reset(&mut self) {
        self.last_launch = None;
    }
}

/// Run the enemy controller for the tick ending at `now`.
pub fn run(
    world: &mut World,
    bridge: &mut SceneBridge,
    rng: &mut ChaCha8Rng,
    state: &mut EnemyFireState,
    strip: &SpawnStrip,
    config: &GameConfig,
    now: f64,
) -> Option<SceneHandle> {
    let last = *state.last_launch.get_or_insert(now);
    if now - last <= config.enemy_fire_interval {
        return None;
    }
    state.last_launch = Some(now);

    let Some(target) = pick_target(world, rng) else {
        log::warn!("no house to target");
        return None;
    };
    let origin = strip.sample(rng);
    let (_missile, handle) = world_setup::spawn_enemy_missile(world, bridge, config, origin, target);
    log::debug!("enemy launched {handle} at {target}");
    Some(handle)
}

/// Uniformly random standing house.
fn pick_target(world: &World, rng: &mut ChaCha8Rng) -> Option<Vec3> {
    let mut targets: Vec<(SceneHandle, Vec3)> = world
        .query::<(&Building, &Position, &SceneHandle)>()
        .iter()
        .filter(|(_, (building, _, _))| building.alive)
        .map(|(_, (_, pos, handle))| (*handle, pos.0))
        .collect();
    if targets.is_empty() {
        return None;
    }
    targets.sort_by_key(|(handle, _)| *handle);
    Some(targets[rng.gen_range(0..targets.len())].1)
}
