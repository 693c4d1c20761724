//! Scripted defender for the headless demo session.
//!
//! Watches snapshots and fires at incoming enemy missiles, aiming a little
//! ahead along their flight path.

use glam::Vec3;

use barrage_core::commands::PlayerCommand;
use barrage_core::enums::{Owner, ProjectileState};
use barrage_core::state::GameStateSnapshot;
use barrage_core::types::SceneHandle;

#[derive(Debug, Clone)]
pub struct DemoPilot {
    /// Seconds of enemy travel to lead the aim point by.
    pub lead_secs: f32,
    pub enemy_speed: f32,
    engaged: Vec<SceneHandle>,
}

impl DemoPilot {
    pub fn new(lead_secs: f32, enemy_speed: f32) -> Self {
        Self {
            lead_secs,
            enemy_speed,
            engaged: Vec::new(),
        }
    }

    /// Commands for newly seen enemy missiles. Each missile is engaged once.
    pub fn plan(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let live: Vec<SceneHandle> = snapshot.projectiles.iter().map(|p| p.handle).collect();
        self.engaged.retain(|h| live.contains(h));

        let mut commands = Vec::new();
        for p in &snapshot.projectiles {
            if p.owner != Owner::Enemy
                || p.state != ProjectileState::InFlight
                || self.engaged.contains(&p.handle)
            {
                continue;
            }
            let heading = (p.target - p.position).normalize_or_zero();
            let target = lead_point(p.position, heading, self.enemy_speed * self.lead_secs, p.target);
            commands.push(PlayerCommand::FireAt { target });
            self.engaged.push(p.handle);
        }
        commands
    }
}

/// Point `distance` ahead along `heading`, never past the missile's own target.
fn lead_point(position: Vec3, heading: Vec3, distance: f32, target: Vec3) -> Vec3 {
    let remaining = position.distance(target);
    position + heading * distance.min(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use barrage_core::state::ProjectileView;

    fn enemy(handle: u64, position: Vec3, target: Vec3) -> ProjectileView {
        ProjectileView {
            handle: SceneHandle(handle),
            owner: Owner::Enemy,
            state: ProjectileState::InFlight,
            position,
            target,
            explosion_radius: None,
        }
    }

    #[test]
    fn engages_each_enemy_once() {
        let mut pilot = DemoPilot::new(1.0, 2.0);
        let snapshot = GameStateSnapshot {
            projectiles: vec![enemy(7, Vec3::new(-10.0, 8.0, 0.0), Vec3::new(10.0, 8.0, 0.0))],
            ..Default::default()
        };

        let commands = pilot.plan(&snapshot);
        assert_eq!(commands.len(), 1);
        match &commands[0] {
            PlayerCommand::FireAt { target } => assert_eq!(*target, Vec3::new(-8.0, 8.0, 0.0)),
            other => panic!("unexpected command {other:?}"),
        }
        assert!(pilot.plan(&snapshot).is_empty());
    }

    #[test]
    fn ignores_player_and_exploding_missiles() {
        let mut pilot = DemoPilot::new(1.0, 2.0);
        let mut own = enemy(1, Vec3::ZERO, Vec3::Y);
        own.owner = Owner::Player;
        let mut blast = enemy(2, Vec3::ZERO, Vec3::Y);
        blast.state = ProjectileState::Exploding;
        let snapshot = GameStateSnapshot {
            projectiles: vec![own, blast],
            ..Default::default()
        };
        assert!(pilot.plan(&snapshot).is_empty());
    }

    #[test]
    fn lead_stops_at_target() {
        let p = lead_point(Vec3::ZERO, Vec3::X, 5.0, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(p, Vec3::new(2.0, 0.0, 0.0));
    }
}
