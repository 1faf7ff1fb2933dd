//! Cart ownership tags stored in each cart's persistent data.
//!
//! The owner's name lives under [`OWNER_KEY`] and its UUID, as text, under
//! [`OWNER_ID_KEY`]. A cart is "owned" once a name has been written.

use bevy_ecs::prelude::*;
use tracing::debug;
use uuid::Uuid;

use crate::components::Actor;
use crate::data::EntityData;
use crate::error::CartError;
use crate::identity::{OwnerIdentity, UNKNOWN_OWNER_NAME};
use crate::world::world_side;

pub const OWNER_KEY: &str = "owner";
pub const OWNER_ID_KEY: &str = "ownerId";

/// Tags `cart` with `owner`.
///
/// Present fields overwrite the stored ones; absent fields leave them
/// untouched. On a remote side this does nothing.
///
/// # Errors
///
/// [`CartError::NoSuchCart`] if `cart` carries no [`EntityData`].
pub fn set_cart_owner(
    world: &mut World,
    cart: Entity,
    owner: &OwnerIdentity,
) -> Result<(), CartError> {
    if !world_side(world).is_authoritative() {
        debug!(?cart, %owner, "skipping owner write on remote side");
        return Ok(());
    }
    let mut data = world
        .get_mut::<EntityData>(cart)
        .ok_or(CartError::NoSuchCart(cart))?;

    if let Some(name) = &owner.name {
        if data.get_string(OWNER_KEY) != Some(name.as_str()) {
            data.set_string(OWNER_KEY, name.as_str());
        }
    }
    if let Some(id) = owner.id {
        let id = id.to_string();
        if data.get_string(OWNER_ID_KEY) != Some(id.as_str()) {
            data.set_string(OWNER_ID_KEY, id);
        }
    }
    Ok(())
}

/// Tags `cart` with the profile of `actor`.
///
/// # Errors
///
/// [`CartError::NoSuchActor`] if `actor` has no [`Actor`] component, plus
/// anything [`set_cart_owner`] returns.
pub fn set_cart_owner_from_actor(
    world: &mut World,
    cart: Entity,
    actor: Entity,
) -> Result<(), CartError> {
    let profile = world
        .get::<Actor>(actor)
        .map(|actor| actor.profile.clone())
        .ok_or(CartError::NoSuchActor(actor))?;
    set_cart_owner(world, cart, &profile)
}

/// Reads the owner tag of `cart`.
///
/// An untagged cart reads as [`UNKNOWN_OWNER_NAME`] with no id.
///
/// # Errors
///
/// [`CartError::NoSuchCart`] if `cart` carries no [`EntityData`],
/// [`CartError::MalformedOwnerId`] if the stored id is not a UUID.
pub fn cart_owner(world: &World, cart: Entity) -> Result<OwnerIdentity, CartError> {
    let data = world
        .get::<EntityData>(cart)
        .ok_or(CartError::NoSuchCart(cart))?;

    let name = if data.contains_key(OWNER_KEY) {
        data.get_string(OWNER_KEY).unwrap_or_default().to_string()
    } else {
        UNKNOWN_OWNER_NAME.to_string()
    };

    let id = if data.contains_key(OWNER_ID_KEY) {
        let raw = data.get_string(OWNER_ID_KEY).unwrap_or_default();
        let id = Uuid::parse_str(raw).map_err(|source| CartError::MalformedOwnerId {
            raw: raw.to_string(),
            source,
        })?;
        Some(id)
    } else {
        None
    };

    Ok(OwnerIdentity {
        name: Some(name),
        id,
    })
}

/// Returns `true` once a name has been written to `cart`. An id alone does
/// not count.
pub fn cart_has_owner(world: &World, cart: Entity) -> bool {
    world
        .get::<EntityData>(cart)
        .is_some_and(|data| data.contains_key(OWNER_KEY))
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::components::CartBundle;
    use crate::data::DataValue;
    use crate::kind::CartKind;
    use crate::world::WorldSide;

    fn world_with_cart() -> (World, Entity) {
        let mut world = World::new();
        let cart = world.spawn(CartBundle::new(CartKind::Basic, DVec3::ZERO)).id();
        (world, cart)
    }

    #[test]
    fn test_round_trip() {
        let (mut world, cart) = world_with_cart();
        let owner = OwnerIdentity::new("alice", Uuid::from_u128(7));
        set_cart_owner(&mut world, cart, &owner).unwrap();
        assert_eq!(cart_owner(&world, cart).unwrap(), owner);
        assert!(cart_has_owner(&world, cart));
    }

    #[test]
    fn test_untagged_reads_unknown() {
        let (world, cart) = world_with_cart();
        assert_eq!(cart_owner(&world, cart).unwrap(), OwnerIdentity::unknown());
        assert!(!cart_has_owner(&world, cart));
    }

    #[test]
    fn test_partial_identity_keeps_stored_fields() {
        let (mut world, cart) = world_with_cart();
        let id = Uuid::from_u128(42);
        set_cart_owner(&mut world, cart, &OwnerIdentity::new("alice", id)).unwrap();
        set_cart_owner(&mut world, cart, &OwnerIdentity::named("bob")).unwrap();
        let owner = cart_owner(&world, cart).unwrap();
        assert_eq!(owner.name.as_deref(), Some("bob"));
        assert_eq!(owner.id, Some(id));
    }

    #[test]
    fn test_id_only_is_not_owned() {
        let (mut world, cart) = world_with_cart();
        let owner = OwnerIdentity {
            name: None,
            id: Some(Uuid::from_u128(1)),
        };
        set_cart_owner(&mut world, cart, &owner).unwrap();
        assert!(!cart_has_owner(&world, cart));
        let read = cart_owner(&world, cart).unwrap();
        assert_eq!(read.display_name(), UNKNOWN_OWNER_NAME);
        assert_eq!(read.id, owner.id);
    }

    #[test]
    fn test_malformed_id_is_an_error() {
        let (mut world, cart) = world_with_cart();
        world
            .get_mut::<EntityData>(cart)
            .unwrap()
            .set_string(OWNER_ID_KEY, "not-a-uuid");
        let err = cart_owner(&world, cart).unwrap_err();
        assert!(matches!(err, CartError::MalformedOwnerId { raw, .. } if raw == "not-a-uuid"));
    }

    #[test]
    fn test_non_string_id_is_malformed() {
        let (mut world, cart) = world_with_cart();
        world
            .get_mut::<EntityData>(cart)
            .unwrap()
            .set(OWNER_ID_KEY, DataValue::Int(3));
        assert!(matches!(
            cart_owner(&world, cart),
            Err(CartError::MalformedOwnerId { .. })
        ));
    }

    #[test]
    fn test_remote_side_skips_write() {
        let (mut world, cart) = world_with_cart();
        world.insert_resource(WorldSide::Remote);
        set_cart_owner(&mut world, cart, &OwnerIdentity::named("alice")).unwrap();
        assert!(!cart_has_owner(&world, cart));
    }

    #[test]
    fn test_missing_data_is_error() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        assert!(matches!(
            set_cart_owner(&mut world, entity, &OwnerIdentity::named("x")),
            Err(CartError::NoSuchCart(_))
        ));
        assert!(matches!(cart_owner(&world, entity), Err(CartError::NoSuchCart(_))));
    }

    #[test]
    fn test_owner_from_actor() {
        let (mut world, cart) = world_with_cart();
        let profile = OwnerIdentity::new("carol", Uuid::from_u128(9));
        let actor = world.spawn(Actor::player(profile.clone())).id();
        set_cart_owner_from_actor(&mut world, cart, actor).unwrap();
        assert_eq!(cart_owner(&world, cart).unwrap(), profile);

        assert!(matches!(
            set_cart_owner_from_actor(&mut world, cart, cart),
            Err(CartError::NoSuchActor(_))
        ));
    }
}
