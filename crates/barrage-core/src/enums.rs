//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side launched a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// Projectile lifecycle. Only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectileState {
    #[default]
    InFlight,
    Exploding,
    Finished,
}

impl ProjectileState {
    /// Whether `next` is the immediate successor of `self`.
    pub fn can_advance_to(self, next: ProjectileState) -> bool {
        matches!(
            (self, next),
            (ProjectileState::InFlight, ProjectileState::Exploding)
                | (ProjectileState::Exploding, ProjectileState::Finished)
        )
    }
}

/// Contact category tag. Discriminants are the physics category bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionCategory {
    /// Also used for general static bodies.
    Floor = 1 << 0,
    PlayerMissile = 1 << 1,
    EnemyMissile = 1 << 2,
    Building = 1 << 3,
    TargetMarker = 1 << 4,
    ExplosionVolume = 1 << 5,
    /// Invisible plane taps are projected onto; never routed.
    TargetPane = 1 << 6,
}

impl CollisionCategory {
    pub fn bit(self) -> u32 {
        self as u32
    }

    pub fn is_missile(self) -> bool {
        matches!(
            self,
            CollisionCategory::PlayerMissile | CollisionCategory::EnemyMissile
        )
    }
}

/// Kind of entity announced to the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Floor,
    Battery,
    Building,
    PlayerMissile,
    EnemyMissile,
    TargetMarker,
    /// Plane taps are projected onto.
    TargetPane,
}

/// How fire-control picks the launching battery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatterySelection {
    /// Uniform random index from the seeded RNG.
    #[default]
    Random,
    /// Cycle through batteries in layout order.
    RoundRobin,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Every building has been destroyed.
    GameOver,
}
