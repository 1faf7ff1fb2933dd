//! Finding carts by grid cell, box, or neighbouring face.
//!
//! All lookups return live carts only, in the world's native iteration
//! order. An empty result is the "nothing there" answer; none of these
//! functions fail.

use bevy_ecs::prelude::*;
use railyard_config::MAX_SEARCH_SENSITIVITY;
use railyard_math::{Aabb, BlockPos, Direction};
use tracing::trace;

use crate::components::{Alive, Cart};
use crate::error::CartError;
use crate::filter::CartFilter;
use crate::index::{is_alive, overlapping_carts};
use crate::track::is_track_at;

// ---------------------------------------------------------------------------
// Untyped lookups
// ---------------------------------------------------------------------------

/// Live carts overlapping the cell at `pos` pulled inward by `sensitivity`
/// on every face. Sensitivities above [`MAX_SEARCH_SENSITIVITY`] are clamped.
pub fn carts_at(world: &World, pos: BlockPos, sensitivity: f32) -> Vec<Entity> {
    let inset = sensitivity.min(MAX_SEARCH_SENSITIVITY);
    let bounds = Aabb::inset_cell(pos, f64::from(inset));
    let carts = live(world, overlapping_carts(world, &bounds));
    trace!(%pos, inset, found = carts.len(), "carts_at");
    carts
}

/// Live carts overlapping the box spanned by two corners, in any order.
pub fn carts_in(world: &World, corner_a: BlockPos, corner_b: BlockPos) -> Vec<Entity> {
    let bounds = Aabb::from_corners(corner_a, corner_b);
    let carts = live(world, overlapping_carts(world, &bounds));
    trace!(%corner_a, %corner_b, found = carts.len(), "carts_in");
    carts
}

/// Live carts in the cell adjacent to `pos` across `side`.
pub fn carts_on_side(
    world: &World,
    pos: BlockPos,
    sensitivity: f32,
    side: Direction,
) -> Vec<Entity> {
    carts_at(world, side.offset(pos), sensitivity)
}

/// Carts on each of the six sides, concatenated in [`Direction::ALL`] order.
/// A cart straddling two neighbours appears once per side.
pub fn carts_on_all_sides(world: &World, pos: BlockPos, sensitivity: f32) -> Vec<Entity> {
    Direction::ALL
        .into_iter()
        .flat_map(|side| carts_on_side(world, pos, sensitivity, side))
        .collect()
}

/// The first live cart across `side`, if any.
pub fn cart_on_side(
    world: &World,
    pos: BlockPos,
    sensitivity: f32,
    side: Direction,
) -> Option<Entity> {
    carts_on_side(world, pos, sensitivity, side).into_iter().next()
}

pub fn is_cart_on_side(world: &World, pos: BlockPos, sensitivity: f32, side: Direction) -> bool {
    cart_on_side(world, pos, sensitivity, side).is_some()
}

// ---------------------------------------------------------------------------
// Filtered lookups
// ---------------------------------------------------------------------------

/// Live carts at `pos` that match `filter`.
pub fn carts_at_matching(
    world: &World,
    pos: BlockPos,
    sensitivity: f32,
    filter: CartFilter,
) -> Vec<Entity> {
    let mut carts = carts_at(world, pos, sensitivity);
    filter.retain(world, &mut carts);
    carts
}

/// Live carts between two corners that match `filter`.
pub fn carts_in_matching(
    world: &World,
    corner_a: BlockPos,
    corner_b: BlockPos,
    filter: CartFilter,
) -> Vec<Entity> {
    let mut carts = carts_in(world, corner_a, corner_b);
    filter.retain(world, &mut carts);
    carts
}

pub fn is_cart_at(world: &World, pos: BlockPos, sensitivity: f32, filter: CartFilter) -> bool {
    filter.any(world, &carts_at(world, pos, sensitivity))
}

/// Like [`is_cart_at`], but only where there is track at `pos`.
pub fn is_cart_on_rail_at(
    world: &World,
    pos: BlockPos,
    sensitivity: f32,
    filter: CartFilter,
) -> bool {
    is_track_at(world, pos) && is_cart_at(world, pos, sensitivity, filter)
}

/// The first live cart across `side` that matches `filter`.
pub fn cart_on_side_matching(
    world: &World,
    pos: BlockPos,
    sensitivity: f32,
    side: Direction,
    filter: CartFilter,
) -> Option<Entity> {
    filter.first(world, &carts_on_side(world, pos, sensitivity, side))
}

pub fn is_cart_on_side_matching(
    world: &World,
    pos: BlockPos,
    sensitivity: f32,
    side: Direction,
    filter: CartFilter,
) -> bool {
    cart_on_side_matching(world, pos, sensitivity, side, filter).is_some()
}

/// Returns `true` if any of the six neighbouring cells holds a matching cart.
pub fn is_cart_on_any_side(
    world: &World,
    pos: BlockPos,
    sensitivity: f32,
    filter: CartFilter,
) -> bool {
    Direction::ALL
        .into_iter()
        .any(|side| is_cart_on_side_matching(world, pos, sensitivity, side, filter))
}

/// Matching carts on all six sides, in [`Direction::ALL`] order.
pub fn carts_on_all_sides_matching(
    world: &World,
    pos: BlockPos,
    sensitivity: f32,
    filter: CartFilter,
) -> Vec<Entity> {
    let mut carts = carts_on_all_sides(world, pos, sensitivity);
    filter.retain(world, &mut carts);
    carts
}

// ---------------------------------------------------------------------------
// Liveness
// ---------------------------------------------------------------------------

/// Marks a cart dead. Lookups skip it from then on; there is no revive.
pub fn kill_cart(world: &mut World, cart: Entity) -> Result<(), CartError> {
    if world.get::<Cart>(cart).is_none() {
        return Err(CartError::NoSuchCart(cart));
    }
    world.entity_mut(cart).insert(Alive(false));
    Ok(())
}

fn live(world: &World, mut carts: Vec<Entity>) -> Vec<Entity> {
    carts.retain(|&cart| is_alive(world, cart));
    carts
}
