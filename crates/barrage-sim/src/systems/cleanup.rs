//! Cleanup system: removes finished, destroyed and out-of-bounds entities.

use hecs::{Entity, World};

use barrage_core::components::{Building, Projectile, TargetMarker};
use barrage_core::config::GameConfig;
use barrage_core::enums::ProjectileState;
use barrage_core::types::Position;

use crate::bridge::SceneBridge;
use crate::links::{MarkerOwner, TargetLink};

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    bridge: &mut SceneBridge,
    config: &GameConfig,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let extent = config.world_half_extent;

    for (entity, (proj, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        let finished = proj.state == ProjectileState::Finished;
        let lost = proj.state == ProjectileState::InFlight && pos.0.abs().max_element() > extent;
        if finished || lost {
            if lost {
                log::debug!("missile left the theatre at {}", pos.0);
            }
            despawn_buffer.push(entity);
        }
    }

    for (entity, building) in world.query_mut::<&Building>() {
        if !building.alive {
            despawn_buffer.push(entity);
        }
    }

    // Markers of missiles being removed go with them.
    let mut markers: Vec<Entity> = Vec::new();
    for &entity in despawn_buffer.iter() {
        if let Ok(link) = world.get::<&TargetLink>(entity) {
            markers.push(link.marker);
        }
    }
    despawn_buffer.extend(markers);

    // Markers whose missile no longer exists.
    for (entity, (_marker, owner)) in world.query::<(&TargetMarker, &MarkerOwner)>().iter() {
        if !world.contains(owner.projectile) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        bridge.despawn(world, entity);
    }
}
