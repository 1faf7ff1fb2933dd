//! Spatial queries over cart entities.

use bevy_ecs::prelude::*;
use railyard_math::Aabb;

use crate::components::{Alive, Cart, CartBody, Position};

/// Every cart whose body overlaps `bounds`, dead or alive, in the world's
/// native iteration order.
///
/// Carts without a [`CartBody`] use the default body.
pub fn overlapping_carts(world: &World, bounds: &Aabb) -> Vec<Entity> {
    world
        .iter_entities()
        .filter(|entity| {
            if !entity.contains::<Cart>() {
                return false;
            }
            let Some(position) = entity.get::<Position>() else {
                return false;
            };
            let body = entity.get::<CartBody>().copied().unwrap_or_default();
            body.bounds_at(position.0).overlaps(bounds)
        })
        .map(|entity| entity.id())
        .collect()
}

/// Returns `false` only for entities explicitly flagged dead. A despawned
/// entity is not alive.
pub fn is_alive(world: &World, entity: Entity) -> bool {
    world.entities().contains(entity)
        && world.get::<Alive>(entity).is_none_or(|alive| alive.0)
}

#[cfg(test)]
mod tests {
    use glam::DVec3;
    use railyard_math::BlockPos;

    use super::*;
    use crate::components::CartBundle;
    use crate::kind::CartKind;

    #[test]
    fn test_overlap_finds_cart_in_cell() {
        let mut world = World::new();
        let cart = world
            .spawn(CartBundle::new(CartKind::Basic, DVec3::new(3.5, 10.0, 3.5)))
            .id();
        let cell = Aabb::inset_cell(BlockPos::new(3, 10, 3), 0.3);
        assert_eq!(overlapping_carts(&world, &cell), vec![cart]);

        let other = Aabb::inset_cell(BlockPos::new(5, 10, 3), 0.3);
        assert!(overlapping_carts(&world, &other).is_empty());
    }

    #[test]
    fn test_non_carts_ignored() {
        let mut world = World::new();
        world.spawn(Position(DVec3::new(0.5, 0.0, 0.5)));
        let cell = Aabb::inset_cell(BlockPos::ORIGIN, 0.0);
        assert!(overlapping_carts(&world, &cell).is_empty());
    }

    #[test]
    fn test_touching_faces_do_not_overlap() {
        let mut world = World::new();
        // Body spans y in [1.0, 1.7]; the cell below ends at y = 1.0.
        world.spawn(CartBundle::new(CartKind::Basic, DVec3::new(0.5, 1.0, 0.5)));
        let below = Aabb::inset_cell(BlockPos::ORIGIN, 0.0);
        assert!(overlapping_carts(&world, &below).is_empty());
    }

    #[test]
    fn test_dead_carts_still_indexed() {
        let mut world = World::new();
        let mut bundle = CartBundle::new(CartKind::Basic, DVec3::new(0.5, 0.0, 0.5));
        bundle.alive = Alive(false);
        let cart = world.spawn(bundle).id();
        let cell = Aabb::inset_cell(BlockPos::ORIGIN, 0.1);
        assert_eq!(overlapping_carts(&world, &cell), vec![cart]);
        assert!(!is_alive(&world, cart));
    }

    #[test]
    fn test_missing_alive_counts_as_alive() {
        let mut world = World::new();
        let entity = world.spawn(Position(DVec3::ZERO)).id();
        assert!(is_alive(&world, entity));
        world.despawn(entity);
        assert!(!is_alive(&world, entity));
    }
}
