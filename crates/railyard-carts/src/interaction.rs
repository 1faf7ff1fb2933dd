//! The generic "use an item on a block" pathway for plain cart items.

use bevy_ecs::prelude::*;
use glam::DVec3;
use railyard_math::{BlockPos, Direction};
use thiserror::Error;
use tracing::trace;

use crate::components::{Actor, CartBundle, CustomName};
use crate::items::{ItemBehavior, ItemId, ItemRegistry, ItemStack};
use crate::track::is_track_at;
use crate::world::world_side;

/// Height above the cell floor at which a placed cart sits on its rail.
pub const CART_RAIL_OFFSET_Y: f64 = 0.0625;

/// Why an item use could not be carried out.
#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("entity {0:?} is not an actor")]
    UnknownActor(Entity),
    #[error("item {0:?} is not registered")]
    UnregisteredItem(ItemId),
    #[error("item `{0}` does not place carts")]
    NotACartItem(String),
    #[error("cannot use an empty stack")]
    EmptyStack,
}

/// `actor` uses one item from `stack` on the `face` of the cell at `pos`.
///
/// On track this places a cart of the item's kind at the rail height of the
/// cell, named after the stack if it carries a custom name, and consumes one
/// item. The cart only appears on the authoritative side; the item is
/// consumed on both. Returns `Ok(false)` when there is no track at `pos`.
///
/// # Errors
///
/// Fails if `actor` is not an actor, the stack is empty, or the item is not
/// a plain cart item.
pub fn use_item_on(
    world: &mut World,
    actor: Entity,
    stack: &mut ItemStack,
    pos: BlockPos,
    face: Direction,
    hit: DVec3,
) -> Result<bool, InteractionError> {
    if world.get::<Actor>(actor).is_none() {
        return Err(InteractionError::UnknownActor(actor));
    }
    if stack.is_empty() {
        return Err(InteractionError::EmptyStack);
    }
    let def = world
        .get_resource::<ItemRegistry>()
        .and_then(|registry| registry.get(stack.item))
        .ok_or(InteractionError::UnregisteredItem(stack.item))?;
    let ItemBehavior::Cart(kind) = def.behavior else {
        return Err(InteractionError::NotACartItem(def.name.clone()));
    };

    trace!(?actor, %pos, ?face, ?hit, %kind, "use item on block");
    if !is_track_at(world, pos) {
        return Ok(false);
    }

    if world_side(world).is_authoritative() {
        let at = pos.bottom_center() + DVec3::new(0.0, CART_RAIL_OFFSET_Y, 0.0);
        let mut cart = world.spawn(CartBundle::new(kind, at));
        if let Some(name) = &stack.custom_name {
            cart.insert(CustomName(name.clone()));
        }
    }
    stack.shrink(1);
    Ok(true)
}
