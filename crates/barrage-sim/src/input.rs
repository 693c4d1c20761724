//! Tap input. The host knows the camera; the engine only needs to know
//! where on the target pane a tap landed.

use glam::{Vec2, Vec3};

/// Host-side screen to world conversion.
pub trait TransformProvider {
    /// World point where `screen` hits the target pane, or `None` when the
    /// tap missed it.
    fn screen_to_world(&self, screen: Vec2) -> Option<Vec3>;
}

/// Vertical target pane at a fixed depth, viewed by an orthographic camera.
/// Used for headless runs and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPane {
    /// Screen size in pixels.
    pub viewport: Vec2,
    /// World extent (x, y) the viewport covers, lower-left corner first.
    pub world_min: Vec2,
    pub world_max: Vec2,
    /// Depth of the pane along the z axis.
    pub depth: f32,
}

impl TransformProvider for FixedPane {
    fn screen_to_world(&self, screen: Vec2) -> Option<Vec3> {
        if screen.x < 0.0 || screen.y < 0.0 || screen.x > self.viewport.x || screen.y > self.viewport.y {
            return None;
        }
        // Screen y grows downward.
        let t = Vec2::new(screen.x / self.viewport.x, 1.0 - screen.y / self.viewport.y);
        let world = self.world_min + t * (self.world_max - self.world_min);
        Some(Vec3::new(world.x, world.y, self.depth))
    }
}
