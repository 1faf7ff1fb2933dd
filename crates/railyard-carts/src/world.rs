//! World setup and the authoritative/remote side split.

use bevy_ecs::prelude::*;
use railyard_config::CartConfig;

use crate::actor::FakeActors;
use crate::items::ItemRegistry;
use crate::settings::CartSettings;

/// Which copy of the world this is.
///
/// Only the authoritative side mutates persistent cart state. A remote side
/// mirrors it and must leave writes to the authority.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorldSide {
    #[default]
    Authoritative,
    Remote,
}

impl WorldSide {
    pub fn is_authoritative(self) -> bool {
        self == Self::Authoritative
    }
}

/// The side of `world`. A world without a [`WorldSide`] is authoritative.
pub fn world_side(world: &World) -> WorldSide {
    world.get_resource::<WorldSide>().copied().unwrap_or_default()
}

/// Installs the resources every cart operation expects.
///
/// Collaborator services (track detection, linkage, transfer) are left to
/// the host.
pub fn register_cart_resources(world: &mut World, config: &CartConfig) {
    let side = if config.remote {
        WorldSide::Remote
    } else {
        WorldSide::Authoritative
    };
    world.insert_resource(side);
    world.insert_resource(CartSettings::from(config));
    world.insert_resource(ItemRegistry::with_standard_carts());
    world.init_resource::<FakeActors>();
}

/// Creates a new world with the cart resources registered.
pub fn create_world(config: &CartConfig) -> World {
    let mut world = World::new();
    register_cart_resources(&mut world, config);
    world
}
