//! Template asset cache.
//!
//! Every template the theatre needs is resolved once, before the first tick,
//! and the resulting cache is handed to the engine. A missing template aborts
//! initialisation with `GameError::AssetMissing`.

use std::collections::HashMap;

use barrage_core::enums::EntityKind;
use barrage_core::error::{GameError, Result};
use barrage_core::types::AssetId;

pub const MISSILE: &str = "missile";
pub const HOUSE: &str = "house";
pub const EXPLOSION_PARTICLES: &str = "explosion_particles";
pub const FLOOR: &str = "floor";
pub const TARGET_PLANE: &str = "target_plane";

/// Names that must resolve for a theatre to load.
pub const REQUIRED_ASSETS: [&str; 5] = [MISSILE, HOUSE, EXPLOSION_PARTICLES, FLOOR, TARGET_PLANE];

/// Host-side asset lookup (scene files, reference nodes, ...).
pub trait AssetSource {
    fn resolve(&self, name: &str) -> Option<AssetId>;
}

/// Resolved template ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetCache {
    pub missile: AssetId,
    pub house: AssetId,
    pub explosion_particles: AssetId,
    pub floor: AssetId,
    pub target_plane: AssetId,
}

impl AssetCache {
    /// Resolve every required template, failing on the first missing one.
    pub fn load(source: &dyn AssetSource) -> Result<Self> {
        let get = |name: &str| {
            source.resolve(name).ok_or_else(|| GameError::AssetMissing {
                name: name.to_string(),
            })
        };
        let cache = Self {
            missile: get(MISSILE)?,
            house: get(HOUSE)?,
            explosion_particles: get(EXPLOSION_PARTICLES)?,
            floor: get(FLOOR)?,
            target_plane: get(TARGET_PLANE)?,
        };
        log::info!("asset cache loaded ({} templates)", REQUIRED_ASSETS.len());
        Ok(cache)
    }

    /// Template node the host clones for a given entity kind.
    pub fn template_for(&self, kind: EntityKind) -> Option<AssetId> {
        match kind {
            EntityKind::PlayerMissile | EntityKind::EnemyMissile => Some(self.missile),
            EntityKind::Building => Some(self.house),
            EntityKind::Floor => Some(self.floor),
            EntityKind::TargetPane => Some(self.target_plane),
            EntityKind::Battery | EntityKind::TargetMarker => None,
        }
    }
}

/// In-memory asset table, for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    table: HashMap<String, AssetId>,
}

impl StaticAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table containing every required template.
    pub fn complete() -> Self {
        let mut assets = Self::new();
        for (i, name) in REQUIRED_ASSETS.iter().enumerate() {
            assets.insert(name, AssetId(i as u32));
        }
        assets
    }

    pub fn insert(&mut self, name: &str, id: AssetId) {
        self.table.insert(name.to_string(), id);
    }

    pub fn remove(&mut self, name: &str) {
        self.table.remove(name);
    }
}

impl AssetSource for StaticAssets {
    fn resolve(&self, name: &str) -> Option<AssetId> {
        self.table.get(name).copied()
    }
}
