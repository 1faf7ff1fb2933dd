//! Handing items to carts, and dropping what they refuse.

use bevy_ecs::prelude::*;
use glam::DVec3;
use tracing::{debug, warn};

use crate::components::{DroppedItem, Motion, Position};
use crate::items::ItemStack;
use crate::settings::CartSettings;

/// Moves items into carts and their trains.
pub trait TransferHelper: Send + Sync {
    /// Offers `stack` to `cart`. Returns what was not accepted.
    fn push_stack(&self, world: &mut World, cart: Entity, stack: ItemStack) -> Option<ItemStack>;
}

/// The world's item transfer service.
#[derive(Resource)]
pub struct TransferService(pub Box<dyn TransferHelper>);

impl TransferService {
    pub fn new(helper: impl TransferHelper + 'static) -> Self {
        Self(Box::new(helper))
    }
}

/// Offers `stack` to `cart` and drops whatever is refused above the cart.
///
/// Without a [`TransferService`] the whole stack is refused. Returns the
/// dropped item entity, if anything was dropped.
pub fn offer_or_drop_item(world: &mut World, cart: Entity, stack: ItemStack) -> Option<Entity> {
    let remainder = if world.contains_resource::<TransferService>() {
        world.resource_scope(|world, service: Mut<TransferService>| {
            service.0.push_stack(world, cart, stack)
        })
    } else {
        warn!(?cart, "no transfer service installed, dropping stack");
        Some(stack)
    };

    let remainder = remainder.filter(|stack| !stack.is_empty())?;
    let offset = CartSettings::of(world).drop_offset_y;
    drop_item_from(world, cart, remainder, offset)
}

/// Spawns `stack` as a dropped item `offset_y` above `cart`, at rest.
/// Returns `None` if `cart` has no position.
pub fn drop_item_from(
    world: &mut World,
    cart: Entity,
    stack: ItemStack,
    offset_y: f64,
) -> Option<Entity> {
    let Some(origin) = world.get::<Position>(cart).map(|p| p.0) else {
        warn!(?cart, count = stack.count, "cannot drop items from an entity without a position");
        return None;
    };
    let pickup_delay = CartSettings::of(world).drop_pickup_delay_ticks;
    let at = origin + DVec3::new(0.0, offset_y, 0.0);
    let count = stack.count;
    let item = world
        .spawn((
            DroppedItem {
                stack,
                pickup_delay,
            },
            Position(at),
            Motion::default(),
        ))
        .id();
    debug!(?cart, ?item, count, "dropped items");
    Some(item)
}
