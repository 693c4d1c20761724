//! Events emitted by the simulation for the host scene, audio and particles.
//!
//! Fire-and-forget: the core never reads anything back from the host.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, Owner};
use crate::types::{AssetId, SceneHandle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Host should create a node for this handle.
    Spawned {
        handle: SceneHandle,
        kind: EntityKind,
        /// Template node to clone, if this kind has one.
        template: Option<AssetId>,
        position: Vec3,
    },
    /// Host should remove the node for this handle.
    Despawned { handle: SceneHandle },
    /// Missile away (rocket audio loop starts).
    Launched {
        handle: SceneHandle,
        owner: Owner,
        origin: Vec3,
        target: Vec3,
    },
    /// A missile started exploding (particles + explosion audio).
    Explosion {
        handle: SceneHandle,
        owner: Owner,
        position: Vec3,
        /// Particle system to attach.
        particles: AssetId,
    },
    /// A house was hit and removed from the city.
    BuildingDestroyed { handle: SceneHandle, position: Vec3 },
    /// Score moved by `delta`.
    ScoreChanged { delta: i64, total: i64 },
}
