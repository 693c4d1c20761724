//! Theatre layout: the fixed positions a play-field is built from.
//!
//! A layout normally comes from the host's scene file; it can also be read
//! from JSON or TOML, and [`TheatreLayout::default_theatre`] provides a
//! ready-made one for headless runs.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use barrage_core::error::{GameError, Result};

/// Strip along the z axis enemy missiles launch from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnStrip {
    pub x: f32,
    pub y: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl SpawnStrip {
    /// Uniformly random point on the strip.
    pub fn sample(&self, rng: &mut impl Rng) -> Vec3 {
        let t: f32 = rng.gen();
        Vec3::new(self.x, self.y, self.min_z + t * (self.max_z - self.min_z))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheatreLayout {
    /// Missile batteries, in selection order.
    pub batteries: Vec<Vec3>,
    /// Houses of the defended city.
    pub buildings: Vec<Vec3>,
    pub enemy_spawn: SpawnStrip,
}

impl TheatreLayout {
    /// Three batteries in front of a ten-house city, enemy strip above.
    pub fn default_theatre() -> Self {
        let mut buildings = Vec::new();
        for z in [-4.0, -2.0, 0.0, 2.0, 4.0] {
            buildings.push(Vec3::new(5.0, 0.0, z));
            buildings.push(Vec3::new(9.0, 0.0, z));
        }
        Self {
            batteries: vec![
                Vec3::new(1.0, 0.5, -5.0),
                Vec3::new(1.0, 0.5, 0.0),
                Vec3::new(1.0, 0.5, 5.0),
            ],
            buildings,
            enemy_spawn: SpawnStrip {
                x: -12.0,
                y: 8.0,
                min_z: -6.0,
                max_z: 6.0,
            },
        }
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let layout: TheatreLayout =
            serde_json::from_str(contents).map_err(|e| GameError::Layout(e.to_string()))?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let layout: TheatreLayout =
            toml::from_str(contents).map_err(|e| GameError::Layout(e.to_string()))?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batteries.is_empty() {
            return Err(GameError::NoBatteries);
        }
        let strip = &self.enemy_spawn;
        if !(strip.min_z <= strip.max_z) {
            return Err(GameError::Layout(format!(
                "enemy spawn strip has min_z {} above max_z {}",
                strip.min_z, strip.max_z
            )));
        }
        Ok(())
    }
}

impl Default for TheatreLayout {
    fn default() -> Self {
        Self::default_theatre()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn default_theatre_is_valid() {
        let layout = TheatreLayout::default_theatre();
        assert!(layout.validate().is_ok());
        assert_eq!(layout.batteries.len(), 3);
        assert_eq!(layout.buildings.len(), 10);
    }

    #[test]
    fn spawn_points_stay_on_strip() {
        let strip = TheatreLayout::default_theatre().enemy_spawn;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let p = strip.sample(&mut rng);
            assert_eq!(p.x, strip.x);
            assert_eq!(p.y, strip.y);
            assert!(p.z >= strip.min_z && p.z <= strip.max_z);
        }
    }

    #[test]
    fn toml_layout_parses() {
        let layout = TheatreLayout::from_toml_str(
            r#"
            batteries = [[0.0, 0.0, 0.0]]
            buildings = [[4.0, 0.0, 1.0], [4.0, 0.0, -1.0]]

            [enemy_spawn]
            x = -10.0
            y = 6.0
            min_z = -3.0
            max_z = 3.0
            "#,
        )
        .unwrap();
        assert_eq!(layout.batteries, vec![Vec3::ZERO]);
        assert_eq!(layout.buildings.len(), 2);
    }

    #[test]
    fn layout_without_batteries_rejected() {
        let json = r#"{
            "batteries": [],
            "buildings": [[1.0, 0.0, 0.0]],
            "enemy_spawn": { "x": 0.0, "y": 5.0, "min_z": 0.0, "max_z": 1.0 }
        }"#;
        assert_eq!(
            TheatreLayout::from_json_str(json).unwrap_err(),
            GameError::NoBatteries
        );
    }

    #[test]
    fn inverted_strip_rejected() {
        let mut layout = TheatreLayout::default_theatre();
        layout.enemy_spawn.min_z = 10.0;
        assert!(matches!(layout.validate(), Err(GameError::Layout(_))));
    }
}
