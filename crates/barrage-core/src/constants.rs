//! Simulation constants and tuning parameters.
//!
//! These are the authoritative defaults behind `GameConfig::default()`.

/// Nominal frame rate of the host renderer (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal frame rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Heat ---

/// Heat a battery may carry before it refuses to fire.
pub const MAX_TEMP: f32 = 5.0;

/// Heat added per shot; also the cooling rate per second.
pub const HEAT_PER_MISSILE: f32 = 1.0;

// --- Missiles ---

/// Player missile speed (units/s).
pub const PLAYER_MISSILE_SPEED: f32 = 5.0;

/// Enemy missile speed (units/s).
pub const ENEMY_MISSILE_SPEED: f32 = 2.0;

/// Contact radius of a missile body.
pub const MISSILE_RADIUS: f32 = 0.15;

/// Contact radius of a target marker.
pub const TARGET_MARKER_RADIUS: f32 = 0.1;

/// Contact radius of a house.
pub const BUILDING_RADIUS: f32 = 0.6;

// --- Explosions ---

/// Seconds an explosion lasts.
pub const EXPLOSION_LIFE_SPAN: f64 = 0.5;

/// Blast radius when the explosion starts.
pub const EXPLOSION_RADIUS_START: f32 = 0.1;

/// Blast radius when the explosion ends.
pub const EXPLOSION_RADIUS_END: f32 = 1.5;

// --- Enemy ---

/// Seconds between enemy launches.
pub const ENEMY_FIRE_INTERVAL: f64 = 2.0;

// --- Score ---

/// Awarded for intercepting an enemy missile.
pub const SCORE_ENEMY_DESTROYED: i64 = 1;

/// Charged for every house lost.
pub const SCORE_BUILDING_LOST: i64 = -10;

// --- World ---

/// Height of the floor plane.
pub const FLOOR_Y: f32 = 0.0;

/// Missiles further than this from the origin (on any axis) are culled.
pub const WORLD_HALF_EXTENT: f32 = 40.0;

/// Edge length of one floor grid cell used for building placement.
pub const GRID_SIZE: f32 = 2.0;

// --- Minimap ---

/// World x mapped to the left edge of the minimap.
pub const MINIMAP_WORLD_MIN_X: f32 = -14.0;

/// World width covered by the minimap.
pub const MINIMAP_WORLD_WIDTH: f32 = 26.0;

/// World height covered by the minimap.
pub const MINIMAP_WORLD_HEIGHT: f32 = 9.0;

/// Minimap plane size in overlay points.
pub const MINIMAP_WIDTH: f32 = 400.0;
pub const MINIMAP_HEIGHT: f32 = 200.0;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
