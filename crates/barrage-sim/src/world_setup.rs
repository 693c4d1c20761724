//! Theatre setup and entity spawn helpers.

use glam::Vec3;
use hecs::{Entity, World};

use barrage_core::components::*;
use barrage_core::config::GameConfig;
use barrage_core::enums::*;
use barrage_core::events::GameEvent;
use barrage_core::types::{Position, SceneHandle, Velocity};

use crate::bridge::SceneBridge;
use crate::layout::TheatreLayout;
use crate::links::{MarkerOwner, TargetLink};

/// Contacts every in-flight missile reports.
const MISSILE_CONTACTS: u32 = CollisionCategory::ExplosionVolume as u32
    | CollisionCategory::TargetMarker as u32
    | CollisionCategory::Floor as u32;

/// Enemy missiles additionally report houses.
const ENEMY_MISSILE_CONTACTS: u32 = MISSILE_CONTACTS | CollisionCategory::Building as u32;

/// What an explosion volume reports.
pub const EXPLOSION_CONTACTS: u32 = CollisionCategory::EnemyMissile as u32;

/// Build a fresh theatre. Returns the battery entities in layout order.
pub fn setup_theatre(
    world: &mut World,
    bridge: &mut SceneBridge,
    layout: &TheatreLayout,
    config: &GameConfig,
) -> Vec<Entity> {
    spawn_floor(world, bridge, config);
    spawn_target_pane(world, bridge);

    let batteries = layout
        .batteries
        .iter()
        .enumerate()
        .map(|(index, &pos)| spawn_battery(world, bridge, index, pos))
        .collect();

    for &pos in &layout.buildings {
        spawn_building(world, bridge, config, pos);
    }

    log::info!(
        "theatre loaded: {} batteries, {} buildings",
        layout.batteries.len(),
        layout.buildings.len()
    );
    batteries
}

pub fn spawn_floor(world: &mut World, bridge: &mut SceneBridge, config: &GameConfig) -> Entity {
    let (entity, _) = bridge.spawn(
        world,
        EntityKind::Floor,
        Vec3::new(0.0, config.floor_y, 0.0),
        (CollisionBody {
            category: CollisionCategory::Floor,
            contact_mask: 0,
            radius: 0.0,
        },),
    );
    entity
}

/// The pane the host hit-tests taps against. It takes part in no contacts.
pub fn spawn_target_pane(world: &mut World, bridge: &mut SceneBridge) -> Entity {
    let (entity, _) = bridge.spawn(
        world,
        EntityKind::TargetPane,
        Vec3::ZERO,
        (CollisionBody {
            category: CollisionCategory::TargetPane,
            contact_mask: 0,
            radius: 0.0,
        },),
    );
    entity
}

pub fn spawn_battery(
    world: &mut World,
    bridge: &mut SceneBridge,
    index: usize,
    position: Vec3,
) -> Entity {
    let (entity, _) = bridge.spawn(
        world,
        EntityKind::Battery,
        position,
        (Battery {
            index,
            heat: 0.0,
            overheated: false,
        },),
    );
    entity
}

pub fn spawn_building(
    world: &mut World,
    bridge: &mut SceneBridge,
    config: &GameConfig,
    position: Vec3,
) -> Entity {
    let (entity, _) = bridge.spawn(
        world,
        EntityKind::Building,
        position,
        (
            Building { alive: true },
            CollisionBody {
                category: CollisionCategory::Building,
                contact_mask: 0,
                radius: config.building_radius,
            },
        ),
    );
    entity
}

/// Spawn a player missile together with the marker it homes on.
/// Returns the missile entity and its handle.
pub fn spawn_player_missile(
    world: &mut World,
    bridge: &mut SceneBridge,
    config: &GameConfig,
    origin: Vec3,
    target: Vec3,
) -> (Entity, SceneHandle) {
    let missile = world.reserve_entity();

    let (marker, _) = bridge.spawn(
        world,
        EntityKind::TargetMarker,
        target,
        (
            TargetMarker,
            MarkerOwner {
                projectile: missile,
            },
            CollisionBody {
                category: CollisionCategory::TargetMarker,
                contact_mask: 0,
                radius: config.target_marker_radius,
            },
        ),
    );

    let speed = config.player_missile_speed;
    let handle = bridge.spawn_at(
        world,
        missile,
        EntityKind::PlayerMissile,
        origin,
        (
            Projectile {
                origin,
                target,
                speed,
                owner: Owner::Player,
                state: ProjectileState::InFlight,
            },
            Velocity::towards(&Position(origin), &Position(target), speed),
            TargetLink { marker },
            CollisionBody {
                category: CollisionCategory::PlayerMissile,
                contact_mask: MISSILE_CONTACTS,
                radius: config.missile_radius,
            },
        ),
    );
    bridge.emit(GameEvent::Launched {
        handle,
        owner: Owner::Player,
        origin,
        target,
    });
    (missile, handle)
}

pub fn spawn_enemy_missile(
    world: &mut World,
    bridge: &mut SceneBridge,
    config: &GameConfig,
    origin: Vec3,
    target: Vec3,
) -> (Entity, SceneHandle) {
    let speed = config.enemy_missile_speed;
    let (missile, handle) = bridge.spawn(
        world,
        EntityKind::EnemyMissile,
        origin,
        (
            Projectile {
                origin,
                target,
                speed,
                owner: Owner::Enemy,
                state: ProjectileState::InFlight,
            },
            Velocity::towards(&Position(origin), &Position(target), speed),
            CollisionBody {
                category: CollisionCategory::EnemyMissile,
                contact_mask: ENEMY_MISSILE_CONTACTS,
                radius: config.missile_radius,
            },
        ),
    );
    bridge.emit(GameEvent::Launched {
        handle,
        owner: Owner::Enemy,
        origin,
        target,
    });
    (missile, handle)
}
