//! Collision router: turns raw contact pairs into game events.
//!
//! Contacts are queued by the host (or the built-in detector) and drained
//! here once per tick. Each pair is classified by the bodies' *current*
//! category tags, order-independently, and at most one rule applies:
//!
//! | missile        | other                 | effect                              |
//! |----------------|-----------------------|-------------------------------------|
//! | player         | its own target marker | explode at marker, marker removed   |
//! | enemy          | standing house        | house destroyed, −10, explode       |
//! | enemy          | target marker         | intercepted, +1, explode            |
//! | any            | explosion volume      | chained detonation                  |
//! | any            | floor                 | ground impact                       |
//!
//! Only InFlight missiles react, so duplicate reports within a frame are
//! harmless.

use glam::Vec3;
use hecs::{Entity, World};

use barrage_core::components::{Building, CollisionBody, Projectile};
use barrage_core::config::GameConfig;
use barrage_core::enums::{CollisionCategory, ProjectileState};
use barrage_core::events::GameEvent;
use barrage_core::types::{Position, SceneHandle};

use crate::bridge::SceneBridge;
use crate::links::MarkerOwner;
use crate::score::ScoreState;
use crate::systems::contact::Contact;
use crate::systems::explosion;

/// The semantic meaning of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// A player missile reached its own aim point.
    ReachedTarget { missile: Entity, marker: Entity },
    /// An enemy missile hit a house.
    BuildingHit { missile: Entity, building: Entity },
    /// An enemy missile flew into a player's aim point.
    Intercepted { missile: Entity },
    /// A missile was caught in a blast.
    ChainDetonation { missile: Entity },
    /// A missile hit the floor.
    GroundImpact { missile: Entity },
}

fn category(world: &World, entity: Entity) -> Option<CollisionCategory> {
    world.get::<&CollisionBody>(entity).ok().map(|b| b.category)
}

/// Classify a contact pair. `None` for pairs no rule covers.
pub fn classify(world: &World, contact: Contact) -> Option<Collision> {
    let cat_a = category(world, contact.a)?;
    let cat_b = category(world, contact.b)?;

    let (missile, missile_cat, other, other_cat) = if cat_a.is_missile() {
        (contact.a, cat_a, contact.b, cat_b)
    } else if cat_b.is_missile() {
        (contact.b, cat_b, contact.a, cat_a)
    } else {
        return None;
    };

    use CollisionCategory::*;
    match (missile_cat, other_cat) {
        (PlayerMissile, TargetMarker) => {
            let owner = world.get::<&MarkerOwner>(other).ok()?.projectile;
            (owner == missile).then_some(Collision::ReachedTarget {
                missile,
                marker: other,
            })
        }
        (EnemyMissile, Building) => Some(Collision::BuildingHit {
            missile,
            building: other,
        }),
        (EnemyMissile, TargetMarker) => Some(Collision::Intercepted { missile }),
        (_, ExplosionVolume) => Some(Collision::ChainDetonation { missile }),
        (_, Floor) => Some(Collision::GroundImpact { missile }),
        _ => None,
    }
}

fn in_flight(world: &World, missile: Entity) -> bool {
    world
        .get::<&Projectile>(missile)
        .map(|p| p.state == ProjectileState::InFlight)
        .unwrap_or(false)
}

fn position(world: &World, entity: Entity) -> Option<Vec3> {
    world.get::<&Position>(entity).ok().map(|p| p.0)
}

/// Apply one contact. Returns whether anything changed.
pub fn resolve(
    world: &mut World,
    bridge: &mut SceneBridge,
    score: &mut ScoreState,
    config: &GameConfig,
    contact: Contact,
    now: f64,
) -> bool {
    let Some(collision) = classify(world, contact) else {
        return false;
    };
    log::trace!("contact {:?} -> {collision:?}", (contact.a, contact.b));

    match collision {
        Collision::ReachedTarget { missile, marker } => {
            if !in_flight(world, missile) {
                return false;
            }
            let at = position(world, marker);
            // Detonation removes the linked marker.
            explosion::detonate(world, bridge, config, missile, at, now)
        }
        Collision::BuildingHit { missile, building } => {
            if !in_flight(world, missile) {
                return false;
            }
            let destroyed = match world.get::<&mut Building>(building) {
                Ok(mut b) if b.alive => {
                    b.alive = false;
                    true
                }
                _ => false,
            };
            if !destroyed {
                return false;
            }
            let handle = world.get::<&SceneHandle>(building).ok().map(|h| *h);
            let at = position(world, building).unwrap_or_default();
            if let Some(handle) = handle {
                bridge.emit(GameEvent::BuildingDestroyed {
                    handle,
                    position: at,
                });
                log::info!("building {handle} destroyed");
            }
            score.building_lost(bridge);
            explosion::detonate(world, bridge, config, missile, None, now)
        }
        Collision::Intercepted { missile } => {
            if !explosion::detonate(world, bridge, config, missile, None, now) {
                return false;
            }
            score.enemy_destroyed(bridge);
            true
        }
        Collision::ChainDetonation { missile } | Collision::GroundImpact { missile } => {
            explosion::detonate(world, bridge, config, missile, None, now)
        }
    }
}

/// Drain the contact queue.
pub fn run(
    world: &mut World,
    bridge: &mut SceneBridge,
    score: &mut ScoreState,
    config: &GameConfig,
    contacts: &mut Vec<Contact>,
    now: f64,
) {
    for contact in contacts.drain(..) {
        resolve(world, bridge, score, config, contact, now);
    }
}
