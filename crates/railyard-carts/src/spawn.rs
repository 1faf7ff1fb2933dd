//! Placing carts on behalf of an owner.

use bevy_ecs::prelude::*;
use glam::DVec3;
use railyard_math::{BlockPos, Direction};
use tracing::{debug, warn};

use crate::actor::fake_actor;
use crate::identity::{OwnerIdentity, synthetic_actor};
use crate::interaction::use_item_on;
use crate::items::{ItemBehavior, ItemRegistry, ItemStack};
use crate::locator::carts_at;
use crate::ownership::set_cart_owner;
use crate::settings::CartSettings;

/// Places a cart from `item` at `pos` and tags it with `owner`.
///
/// The caller's stack is never touched; placement consumes from a copy.
/// Items with their own placement capability are delegated to and their
/// result returned as is. Plain cart items go through the generic item-use
/// pathway as the synthetic actor. Returns `None` when there is no item, the
/// item does not place carts, or nothing could be placed.
pub fn place_cart(
    world: &mut World,
    owner: &OwnerIdentity,
    item: Option<&ItemStack>,
    pos: BlockPos,
) -> Option<Entity> {
    let mut stack = item?.clone();
    let behavior = world
        .get_resource::<ItemRegistry>()
        .and_then(|registry| registry.behavior(stack.item))
        .cloned()?;

    match behavior {
        ItemBehavior::Placer(placer) => placer.place_cart(world, owner, &mut stack, pos),
        ItemBehavior::Cart(_) => place_generic(world, owner, &mut stack, pos),
        ItemBehavior::Plain => None,
    }
}

fn place_generic(
    world: &mut World,
    owner: &OwnerIdentity,
    stack: &mut ItemStack,
    pos: BlockPos,
) -> Option<Entity> {
    let actor = fake_actor(world, synthetic_actor());
    match use_item_on(world, actor, stack, pos, Direction::Down, DVec3::ZERO) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(err) => {
            debug!(%pos, %err, "generic cart placement failed");
            return None;
        }
    }

    let sensitivity = CartSettings::of(world).spawn_search_sensitivity;
    let cart = carts_at(world, pos, sensitivity).into_iter().next()?;
    if let Err(err) = set_cart_owner(world, cart, owner) {
        warn!(?cart, %err, "placed cart could not be tagged");
    }
    Some(cart)
}
