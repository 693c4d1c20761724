//! Fire control: picks a battery, charges its heat and launches a player
//! missile at the requested point.
//!
//! An overheated battery is a silent misfire: the request is logged and
//! dropped, nothing is spawned, and the caller just gets `None` back.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use barrage_core::components::Battery;
use barrage_core::config::GameConfig;
use barrage_core::enums::BatterySelection;
use barrage_core::error::{GameError, Result};
use barrage_core::types::{Position, SceneHandle};

use crate::bridge::SceneBridge;
use crate::score::ScoreState;
use crate::world_setup;

/// Chooses which battery answers the next fire request.
#[derive(Debug, Clone, Default)]
pub struct BatterySelector {
    pub policy: BatterySelection,
    cursor: usize,
}

impl BatterySelector {
    pub fn new(policy: BatterySelection) -> Self {
        Self { policy, cursor: 0 }
    }

    /// Index into a registry of `count` batteries. `count` must be non-zero.
    pub fn pick(&mut self, count: usize, rng: &mut ChaCha8Rng) -> usize {
        match self.policy {
            BatterySelection::Random => rng.gen_range(0..count),
            BatterySelection::RoundRobin => {
                let index = self.cursor % count;
                self.cursor = (index + 1) % count;
                index
            }
        }
    }
}

/// Charge heat on the battery at `index` and return its position.
pub fn charge_battery(
    world: &mut World,
    batteries: &[Entity],
    index: usize,
    config: &GameConfig,
) -> Result<Vec3> {
    let entity = *batteries.get(index).ok_or(GameError::UnknownBattery {
        index,
        count: batteries.len(),
    })?;
    let mut query = world
        .query_one::<(&mut Battery, &Position)>(entity)
        .map_err(|_| GameError::UnknownBattery {
            index,
            count: batteries.len(),
        })?;
    let (battery, position) = query.get().ok_or(GameError::UnknownBattery {
        index,
        count: batteries.len(),
    })?;
    crate::systems::heat::try_fire(battery, config)?;
    Ok(position.0)
}

/// Fire a player missile at `target`. Returns the missile's scene handle, or
/// `None` on a misfire.
#[allow(clippy::too_many_arguments)]
pub fn fire_at(
    world: &mut World,
    bridge: &mut SceneBridge,
    batteries: &[Entity],
    selector: &mut BatterySelector,
    rng: &mut ChaCha8Rng,
    score: &mut ScoreState,
    config: &GameConfig,
    target: Vec3,
) -> Option<SceneHandle> {
    if batteries.is_empty() {
        log::warn!("fire request at {target} ignored: {}", GameError::NoBatteries);
        return None;
    }

    let index = selector.pick(batteries.len(), rng);
    match charge_battery(world, batteries, index, config) {
        Ok(origin) => {
            let (_missile, handle) =
                world_setup::spawn_player_missile(world, bridge, config, origin, target);
            score.player_missiles_fired += 1;
            log::debug!("battery {index} fired {handle} at {target}");
            Some(handle)
        }
        Err(err @ GameError::Overheated { .. }) => {
            score.misfires += 1;
            log::debug!("misfire: {err}");
            None
        }
        Err(err) => {
            score.misfires += 1;
            log::warn!("misfire: {err}");
            None
        }
    }
}
