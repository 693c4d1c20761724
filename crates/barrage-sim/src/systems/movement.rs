//! Kinematic integration for in-flight missiles.
//!
//! Stand-in for the host physics engine: position += velocity * dt.

use hecs::World;

use barrage_core::components::Projectile;
use barrage_core::enums::ProjectileState;
use barrage_core::types::{Position, Velocity};

pub fn run(world: &mut World, dt: f64) {
    let dt = dt as f32;
    for (_entity, (pos, vel, projectile)) in
        world.query_mut::<(&mut Position, &Velocity, &Projectile)>()
    {
        if projectile.state == ProjectileState::InFlight {
            pos.0 += vel.0 * dt;
        }
    }
}
