//! Minimap projection onto the overlay's theatre plane.

use glam::{Vec2, Vec3};
use hecs::World;

use barrage_core::components::{Building, Projectile};
use barrage_core::config::MinimapConfig;
use barrage_core::enums::{EntityKind, ProjectileState};
use barrage_core::state::MinimapMarker;
use barrage_core::types::{Position, SceneHandle};

/// Map a world point to minimap coordinates (x across, y = height).
pub fn project(config: &MinimapConfig, point: Vec3) -> Vec2 {
    Vec2::new(
        (point.x - config.world_min_x) / config.world_width * config.width,
        point.y / config.world_height * config.height,
    )
}

/// Markers for batteries, standing houses and missiles in flight.
pub fn markers(world: &World, config: &MinimapConfig) -> Vec<MinimapMarker> {
    let mut markers = Vec::new();
    let mut query = world.query::<(&EntityKind, &Position, &SceneHandle, Option<&Building>, Option<&Projectile>)>();
    for (_entity, (kind, pos, handle, building, projectile)) in query.iter() {
        let shown = match kind {
            EntityKind::Battery => true,
            EntityKind::Building => building.is_some_and(|b| b.alive),
            EntityKind::PlayerMissile | EntityKind::EnemyMissile => {
                projectile.is_some_and(|p| p.state == ProjectileState::InFlight)
            }
            EntityKind::TargetMarker | EntityKind::Floor | EntityKind::TargetPane => false,
        };
        if shown {
            markers.push(MinimapMarker {
                handle: *handle,
                kind: *kind,
                position: project(config, pos.0),
            });
        }
    }
    markers.sort_by_key(|m| m.handle);
    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_theatre_corners() {
        let config = MinimapConfig::default();
        assert_eq!(project(&config, Vec3::new(-14.0, 0.0, 3.0)), Vec2::ZERO);
        let far = project(&config, Vec3::new(12.0, 9.0, 0.0));
        assert!((far.x - 400.0).abs() < 1e-3);
        assert!((far.y - 200.0).abs() < 1e-3);
        let mid = project(&config, Vec3::new(-1.0, 4.5, 0.0));
        assert!((mid.x - 200.0).abs() < 1e-3);
        assert!((mid.y - 100.0).abs() < 1e-3);
    }
}
