//! Scene bridge: pairs hecs entities with the host's opaque scene handles.
//!
//! Every entity the simulation creates is announced to the host through a
//! `GameEvent::Spawned`, and every removal through `GameEvent::Despawned`.
//! Contact reports coming back from the host are translated from handles to
//! entities here.

use std::collections::HashMap;

use glam::Vec3;
use hecs::{DynamicBundle, Entity, EntityBuilder, World};

use barrage_core::enums::EntityKind;
use barrage_core::events::GameEvent;
use barrage_core::types::{Position, SceneHandle};

use crate::assets::AssetCache;

pub struct SceneBridge {
    assets: AssetCache,
    next_handle: u64,
    entities: HashMap<SceneHandle, Entity>,
    events: Vec<GameEvent>,
}

impl SceneBridge {
    pub fn new(assets: AssetCache) -> Self {
        Self {
            assets,
            next_handle: 1,
            entities: HashMap::new(),
            events: Vec::new(),
        }
    }

    pub fn assets(&self) -> &AssetCache {
        &self.assets
    }

    /// Spawn an entity with `components` plus its handle, kind and position.
    pub fn spawn(
        &mut self,
        world: &mut World,
        kind: EntityKind,
        position: Vec3,
        components: impl DynamicBundle,
    ) -> (Entity, SceneHandle) {
        let entity = world.reserve_entity();
        let handle = self.spawn_at(world, entity, kind, position, components);
        (entity, handle)
    }

    /// Like [`spawn`](Self::spawn) but for an entity id obtained from
    /// `World::reserve_entity`, so links can point at it before it exists.
    pub fn spawn_at(
        &mut self,
        world: &mut World,
        entity: Entity,
        kind: EntityKind,
        position: Vec3,
        components: impl DynamicBundle,
    ) -> SceneHandle {
        let handle = SceneHandle(self.next_handle);
        self.next_handle += 1;

        let mut builder = EntityBuilder::new();
        builder
            .add_bundle(components)
            .add(handle)
            .add(kind)
            .add(Position(position));
        world.spawn_at(entity, builder.build());

        self.entities.insert(handle, entity);
        self.events.push(GameEvent::Spawned {
            handle,
            kind,
            template: self.assets.template_for(kind),
            position,
        });
        handle
    }

    /// Remove an entity and tell the host. No-op for entities already gone.
    pub fn despawn(&mut self, world: &mut World, entity: Entity) {
        let handle = world.get::<&SceneHandle>(entity).ok().map(|h| *h);
        if world.despawn(entity).is_err() {
            return;
        }
        if let Some(handle) = handle {
            self.entities.remove(&handle);
            self.events.push(GameEvent::Despawned { handle });
        }
    }

    /// Despawn everything the bridge knows about.
    pub fn despawn_all(&mut self, world: &mut World) {
        let mut handles: Vec<(SceneHandle, Entity)> = self.entities.drain().collect();
        handles.sort_by_key(|(handle, _)| *handle);
        for (handle, entity) in handles {
            if world.despawn(entity).is_ok() {
                self.events.push(GameEvent::Despawned { handle });
            }
        }
    }

    /// Entity currently bound to a host handle.
    pub fn entity(&self, handle: SceneHandle) -> Option<Entity> {
        self.entities.get(&handle).copied()
    }

    pub fn live_count(&self) -> usize {
        self.entities.len()
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::StaticAssets;
    use barrage_core::components::Building;

    fn bridge() -> SceneBridge {
        SceneBridge::new(AssetCache::load(&StaticAssets::complete()).unwrap())
    }

    #[test]
    fn spawn_announces_and_binds_handle() {
        let mut world = World::new();
        let mut bridge = bridge();
        let (entity, handle) = bridge.spawn(
            &mut world,
            EntityKind::Building,
            Vec3::new(1.0, 0.0, 2.0),
            (Building { alive: true },),
        );

        assert_eq!(bridge.entity(handle), Some(entity));
        assert_eq!(*world.get::<&SceneHandle>(entity).unwrap(), handle);
        assert_eq!(world.get::<&Position>(entity).unwrap().0, Vec3::new(1.0, 0.0, 2.0));

        let events = bridge.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            GameEvent::Spawned {
                kind: EntityKind::Building,
                template: Some(_),
                ..
            }
        ));
        assert!(bridge.drain_events().is_empty());
    }

    #[test]
    fn despawn_twice_emits_once() {
        let mut world = World::new();
        let mut bridge = bridge();
        let (entity, handle) =
            bridge.spawn(&mut world, EntityKind::Battery, Vec3::ZERO, ());
        bridge.drain_events();

        bridge.despawn(&mut world, entity);
        bridge.despawn(&mut world, entity);

        assert_eq!(bridge.drain_events(), vec![GameEvent::Despawned { handle }]);
        assert_eq!(bridge.entity(handle), None);
        assert_eq!(bridge.live_count(), 0);
    }
}
