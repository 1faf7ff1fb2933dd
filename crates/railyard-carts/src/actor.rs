//! Stand-in actors for automated world interaction.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::components::Actor;
use crate::identity::OwnerIdentity;

/// Actor entities created for automation, one per profile.
#[derive(Resource, Debug, Default)]
pub struct FakeActors {
    by_profile: FxHashMap<OwnerIdentity, Entity>,
}

impl FakeActors {
    pub fn get(&self, profile: &OwnerIdentity) -> Option<Entity> {
        self.by_profile.get(profile).copied()
    }

    pub fn len(&self) -> usize {
        self.by_profile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_profile.is_empty()
    }
}

/// Returns the synthetic actor entity for `profile`, spawning it on first use
/// or if the previous one was despawned.
pub fn fake_actor(world: &mut World, profile: &OwnerIdentity) -> Entity {
    let cached = world
        .get_resource::<FakeActors>()
        .and_then(|actors| actors.get(profile))
        .filter(|&entity| world.get::<Actor>(entity).is_some());
    if let Some(entity) = cached {
        return entity;
    }

    let entity = world.spawn(Actor::synthetic(profile.clone())).id();
    debug!(?entity, %profile, "spawned fake actor");
    world
        .get_resource_or_insert_with(FakeActors::default)
        .by_profile
        .insert(profile.clone(), entity);
    entity
}
