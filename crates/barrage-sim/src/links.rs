//! Entity links between a player missile and its target marker.
//!
//! These reference hecs entities, so they live here rather than in
//! `barrage_core::components`.

use hecs::Entity;

/// On a player missile: the marker it is flying towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLink {
    pub marker: Entity,
}

/// On a target marker: the missile that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerOwner {
    pub projectile: Entity,
}
