//! Runtime game configuration.
//!
//! [`GameConfig`] mirrors the tunables in [`crate::constants`]. Every field
//! has a default, so a TOML file only needs the keys it wants to override.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::BatterySelection;
use crate::error::{GameError, Result};

/// Minimap projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    pub world_min_x: f32,
    pub world_width: f32,
    pub world_height: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            world_min_x: MINIMAP_WORLD_MIN_X,
            world_width: MINIMAP_WORLD_WIDTH,
            world_height: MINIMAP_WORLD_HEIGHT,
            width: MINIMAP_WIDTH,
            height: MINIMAP_HEIGHT,
        }
    }
}

/// Runtime-tunable gameplay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,

    // -- Heat --
    pub max_temp: f32,
    pub heat_per_missile: f32,
    pub battery_selection: BatterySelection,

    // -- Missiles --
    pub player_missile_speed: f32,
    pub enemy_missile_speed: f32,
    pub missile_radius: f32,
    pub target_marker_radius: f32,
    pub building_radius: f32,

    // -- Explosions --
    pub explosion_lifespan: f64,
    pub explosion_radius_start: f32,
    pub explosion_radius_end: f32,

    // -- Enemy --
    pub enemy_fire_interval: f64,

    // -- World --
    pub floor_y: f32,
    pub world_half_extent: f32,
    pub grid_size: f32,
    pub minimap: MinimapConfig,

    /// Integrate motion and detect contacts in-engine. Hosts that run their
    /// own physics turn this off and call `report_contact`.
    pub builtin_physics: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_temp: MAX_TEMP,
            heat_per_missile: HEAT_PER_MISSILE,
            battery_selection: BatterySelection::default(),
            player_missile_speed: PLAYER_MISSILE_SPEED,
            enemy_missile_speed: ENEMY_MISSILE_SPEED,
            missile_radius: MISSILE_RADIUS,
            target_marker_radius: TARGET_MARKER_RADIUS,
            building_radius: BUILDING_RADIUS,
            explosion_lifespan: EXPLOSION_LIFE_SPAN,
            explosion_radius_start: EXPLOSION_RADIUS_START,
            explosion_radius_end: EXPLOSION_RADIUS_END,
            enemy_fire_interval: ENEMY_FIRE_INTERVAL,
            floor_y: FLOOR_Y,
            world_half_extent: WORLD_HALF_EXTENT,
            grid_size: GRID_SIZE,
            minimap: MinimapConfig::default(),
            builtin_physics: true,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) TOML document and validate it.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GameConfig =
            toml::from_str(contents).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the systems cannot work with.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("max_temp", self.max_temp as f64),
            ("heat_per_missile", self.heat_per_missile as f64),
            ("player_missile_speed", self.player_missile_speed as f64),
            ("enemy_missile_speed", self.enemy_missile_speed as f64),
            ("explosion_lifespan", self.explosion_lifespan),
            ("enemy_fire_interval", self.enemy_fire_interval),
            ("world_half_extent", self.world_half_extent as f64),
            ("grid_size", self.grid_size as f64),
            ("minimap.world_width", self.minimap.world_width as f64),
            ("minimap.world_height", self.minimap.world_height as f64),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(GameError::Config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.heat_per_missile > self.max_temp {
            return Err(GameError::Config(format!(
                "heat_per_missile {} exceeds max_temp {}; no battery could ever fire",
                self.heat_per_missile, self.max_temp
            )));
        }
        if self.explosion_radius_start < 0.0
            || self.explosion_radius_end < self.explosion_radius_start
        {
            return Err(GameError::Config(format!(
                "explosion radius must grow from a non-negative start ({} -> {})",
                self.explosion_radius_start, self.explosion_radius_end
            )));
        }
        Ok(())
    }
}
