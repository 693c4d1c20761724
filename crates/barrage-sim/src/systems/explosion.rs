//! Explosion lifecycle: InFlight → Exploding → Finished.
//!
//! `detonate` is the only way into `Exploding`; `run` grows the blast and
//! moves it to `Finished` once its lifespan is over. Finished projectiles
//! are removed by cleanup in the same tick.

use glam::Vec3;
use hecs::{Entity, World};

use barrage_core::components::{CollisionBody, Explosion, Projectile};
use barrage_core::config::GameConfig;
use barrage_core::enums::{CollisionCategory, ProjectileState};
use barrage_core::events::GameEvent;
use barrage_core::types::{Position, SceneHandle, Velocity};

use crate::bridge::SceneBridge;
use crate::links::TargetLink;
use crate::world_setup::EXPLOSION_CONTACTS;

/// Start a projectile's explosion, optionally moving it to `at` first.
///
/// Returns `false` (and changes nothing) unless the projectile was InFlight.
pub fn detonate(
    world: &mut World,
    bridge: &mut SceneBridge,
    config: &GameConfig,
    projectile: Entity,
    at: Option<Vec3>,
    now: f64,
) -> bool {
    let (owner, position, handle, marker) = {
        let Ok(mut query) = world.query_one::<(
            &mut Projectile,
            &mut Position,
            &mut CollisionBody,
            &SceneHandle,
            Option<&TargetLink>,
        )>(projectile) else {
            return false;
        };
        let Some((proj, pos, body, handle, link)) = query.get() else {
            return false;
        };
        if !proj.state.can_advance_to(ProjectileState::Exploding) {
            return false;
        }
        proj.state = ProjectileState::Exploding;
        if let Some(at) = at {
            pos.0 = at;
        }
        *body = CollisionBody {
            category: CollisionCategory::ExplosionVolume,
            contact_mask: EXPLOSION_CONTACTS,
            radius: config.explosion_radius_start,
        };
        (proj.owner, pos.0, *handle, link.map(|l| l.marker))
    };

    // Explosion radius is driven by `run`; the body no longer moves.
    let blast = Explosion {
        started_at: now,
        radius: config.explosion_radius_start,
    };
    // The entity was queried above, so this only fails if it was despawned.
    if world.insert(projectile, (blast, Velocity::default())).is_err() {
        log::warn!("projectile {handle} vanished while detonating");
        return false;
    }

    if let Some(marker) = marker {
        bridge.despawn(world, marker);
    }

    bridge.emit(GameEvent::Explosion {
        handle,
        owner,
        position,
        particles: bridge.assets().explosion_particles,
    });
    true
}

/// Blast radius `elapsed` seconds into an explosion.
pub fn radius_at(elapsed: f64, config: &GameConfig) -> f32 {
    let t = (elapsed / config.explosion_lifespan).clamp(0.0, 1.0) as f32;
    config.explosion_radius_start + (config.explosion_radius_end - config.explosion_radius_start) * t
}

/// Grow every blast and finish the ones past their lifespan.
pub fn run(world: &mut World, config: &GameConfig, now: f64) {
    for (_entity, (proj, explosion, body)) in
        world.query_mut::<(&mut Projectile, &mut Explosion, &mut CollisionBody)>()
    {
        if proj.state != ProjectileState::Exploding {
            continue;
        }
        let elapsed = now - explosion.started_at;
        if elapsed >= config.explosion_lifespan {
            proj.state = ProjectileState::Finished;
            continue;
        }
        explosion.radius = radius_at(elapsed, config);
        body.radius = explosion.radius;
    }
}
