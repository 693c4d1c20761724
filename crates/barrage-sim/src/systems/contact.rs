//! Built-in contact detection: stand-in for the host physics world.
//!
//! Bodies are spheres, except the floor which is the plane `y = floor`.
//! A pair is reported when either body's contact mask includes the other's
//! category, mirroring contact-test bitmask semantics. Reports are queued
//! for the collision router; nothing is resolved here.

use glam::Vec3;
use hecs::{Entity, World};

use barrage_core::components::CollisionBody;
use barrage_core::enums::CollisionCategory;
use barrage_core::types::Position;

/// One contact report: an unordered pair of entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: Entity,
    pub b: Entity,
}

/// Whether two bodies report contacts with each other at all.
pub fn interested(a: &CollisionBody, b: &CollisionBody) -> bool {
    a.contact_mask & b.category.bit() != 0 || b.contact_mask & a.category.bit() != 0
}

fn touching(a: (&CollisionBody, Vec3), b: (&CollisionBody, Vec3)) -> bool {
    match (a.0.category, b.0.category) {
        (CollisionCategory::Floor, _) => b.1.y - b.0.radius <= a.1.y,
        (_, CollisionCategory::Floor) => a.1.y - a.0.radius <= b.1.y,
        _ => a.1.distance(b.1) <= a.0.radius + b.0.radius,
    }
}

/// Detect all touching pairs and append them to `contacts`.
pub fn run(world: &World, contacts: &mut Vec<Contact>) {
    let bodies: Vec<(Entity, CollisionBody, Vec3)> = world
        .query::<(&CollisionBody, &Position)>()
        .iter()
        .map(|(entity, (body, pos))| (entity, *body, pos.0))
        .collect();

    for (i, &(ea, ba, pa)) in bodies.iter().enumerate() {
        for &(eb, bb, pb) in &bodies[i + 1..] {
            if interested(&ba, &bb) && touching((&ba, pa), (&bb, pb)) {
                contacts.push(Contact { a: ea, b: eb });
            }
        }
    }
}
