//! Kind-based cart filters.

use bevy_ecs::prelude::*;

use crate::components::Cart;
use crate::kind::CartKind;

/// Selects carts by kind.
///
/// With no target kind every cart matches. Otherwise a cart matches when its
/// kind equals the target, or when `subclass` is set and its kind is a
/// descendant of the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CartFilter {
    pub kind: Option<CartKind>,
    pub subclass: bool,
}

impl CartFilter {
    /// Matches every cart.
    pub const ANY: CartFilter = CartFilter {
        kind: None,
        subclass: true,
    };

    pub const fn new(kind: CartKind, subclass: bool) -> Self {
        Self {
            kind: Some(kind),
            subclass,
        }
    }

    /// Matches `kind` only.
    pub const fn exact(kind: CartKind) -> Self {
        Self::new(kind, false)
    }

    /// Matches `kind` and all of its descendants.
    pub const fn of_kind(kind: CartKind) -> Self {
        Self::new(kind, true)
    }

    pub fn matches(&self, kind: CartKind) -> bool {
        match self.kind {
            None => true,
            Some(target) => kind == target || (self.subclass && kind.is_a(target)),
        }
    }

    /// Returns `true` if `entity` is a cart this filter matches.
    pub fn matches_entity(&self, world: &World, entity: Entity) -> bool {
        world
            .get::<Cart>(entity)
            .is_some_and(|cart| self.matches(cart.kind))
    }

    /// Keeps only matching carts, preserving order.
    pub fn retain(&self, world: &World, carts: &mut Vec<Entity>) {
        carts.retain(|&cart| self.matches_entity(world, cart));
    }

    /// The first matching cart.
    pub fn first(&self, world: &World, carts: &[Entity]) -> Option<Entity> {
        carts
            .iter()
            .copied()
            .find(|&cart| self.matches_entity(world, cart))
    }

    pub fn any(&self, world: &World, carts: &[Entity]) -> bool {
        self.first(world, carts).is_some()
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::components::CartBundle;

    #[test]
    fn test_any_matches_everything() {
        for kind in CartKind::ALL {
            assert!(CartFilter::ANY.matches(kind));
        }
        assert_eq!(CartFilter::default().kind, None);
    }

    #[test]
    fn test_exact_match_ignores_subclass_flag() {
        assert!(CartFilter::exact(CartKind::Chest).matches(CartKind::Chest));
        assert!(CartFilter::of_kind(CartKind::Chest).matches(CartKind::Chest));
    }

    #[test]
    fn test_subclass_flag() {
        let strict = CartFilter::exact(CartKind::Container);
        let loose = CartFilter::of_kind(CartKind::Container);
        assert!(!strict.matches(CartKind::Hopper));
        assert!(loose.matches(CartKind::Hopper));
        assert!(!loose.matches(CartKind::Tank));
    }

    #[test]
    fn test_root_kind_with_subclass_matches_all() {
        let filter = CartFilter::of_kind(CartKind::Minecart);
        assert!(CartKind::ALL.into_iter().all(|k| filter.matches(k)));
    }

    #[test]
    fn test_entity_helpers() {
        let mut world = World::new();
        let basic = world.spawn(CartBundle::new(CartKind::Basic, DVec3::ZERO)).id();
        let chest = world.spawn(CartBundle::new(CartKind::Chest, DVec3::ZERO)).id();
        let plain = world.spawn_empty().id();

        let filter = CartFilter::of_kind(CartKind::Container);
        assert!(!filter.matches_entity(&world, plain));
        assert_eq!(filter.first(&world, &[basic, plain, chest]), Some(chest));

        let mut carts = vec![basic, chest, plain];
        filter.retain(&world, &mut carts);
        assert_eq!(carts, vec![chest]);
        assert!(!CartFilter::exact(CartKind::Tnt).any(&world, &[basic, chest]));
    }
}
