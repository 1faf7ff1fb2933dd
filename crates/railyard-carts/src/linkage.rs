//! Cart coupling.
//!
//! Linking is owned by an external service. Each cart has two couplers,
//! A and B; a link joins one free coupler on each cart.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

/// Tracks which carts are coupled together.
pub trait LinkageManager: Send + Sync {
    /// Couples two carts. Returns `false` if they cannot be linked.
    fn create_link(&mut self, a: Entity, b: Entity) -> bool;
    /// Uncouples two carts if they are linked to each other.
    fn break_link(&mut self, a: Entity, b: Entity);
    /// Uncouples `cart` from everything.
    fn break_links(&mut self, cart: Entity);
    fn are_linked(&self, a: Entity, b: Entity) -> bool;
    /// The cart on the A coupler of `cart`.
    fn linked_cart_a(&self, cart: Entity) -> Option<Entity>;
    /// The cart on the B coupler of `cart`.
    fn linked_cart_b(&self, cart: Entity) -> Option<Entity>;
    fn has_free_link(&self, cart: Entity) -> bool;
}

/// The world's linkage service, if the feature is available.
#[derive(Resource)]
pub struct LinkageService(pub Box<dyn LinkageManager>);

impl LinkageService {
    pub fn new(manager: impl LinkageManager + 'static) -> Self {
        Self(Box::new(manager))
    }
}

/// The installed linkage manager. `None` means linking is unavailable.
pub fn linkage_manager(world: &World) -> Option<&dyn LinkageManager> {
    world
        .get_resource::<LinkageService>()
        .map(|service| service.0.as_ref())
}

/// Carts coupled to `cart`, A side first. Empty when linking is unavailable.
pub fn linked_carts(world: &World, cart: Entity) -> Vec<Entity> {
    let Some(manager) = linkage_manager(world) else {
        return Vec::new();
    };
    [manager.linked_cart_a(cart), manager.linked_cart_b(cart)]
        .into_iter()
        .flatten()
        .collect()
}

/// In-memory [`LinkageManager`] keyed by entity.
#[derive(Debug, Default)]
pub struct LinkTable {
    couplers: FxHashMap<Entity, [Option<Entity>; 2]>,
}

impl LinkTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self, cart: Entity) -> [Option<Entity>; 2] {
        self.couplers.get(&cart).copied().unwrap_or_default()
    }

    fn attach(&mut self, cart: Entity, other: Entity) {
        let slots = self.couplers.entry(cart).or_default();
        if let Some(free) = slots.iter_mut().find(|slot| slot.is_none()) {
            *free = Some(other);
        }
    }

    fn detach(&mut self, cart: Entity, other: Entity) {
        if let Some(slots) = self.couplers.get_mut(&cart) {
            for slot in slots.iter_mut().filter(|slot| **slot == Some(other)) {
                *slot = None;
            }
            if slots.iter().all(Option::is_none) {
                self.couplers.remove(&cart);
            }
        }
    }
}

impl LinkageManager for LinkTable {
    fn create_link(&mut self, a: Entity, b: Entity) -> bool {
        if a == b || self.are_linked(a, b) || !self.has_free_link(a) || !self.has_free_link(b) {
            return false;
        }
        self.attach(a, b);
        self.attach(b, a);
        true
    }

    fn break_link(&mut self, a: Entity, b: Entity) {
        self.detach(a, b);
        self.detach(b, a);
    }

    fn break_links(&mut self, cart: Entity) {
        for other in self.slots(cart).into_iter().flatten() {
            self.break_link(cart, other);
        }
    }

    fn are_linked(&self, a: Entity, b: Entity) -> bool {
        self.slots(a).contains(&Some(b))
    }

    fn linked_cart_a(&self, cart: Entity) -> Option<Entity> {
        self.slots(cart)[0]
    }

    fn linked_cart_b(&self, cart: Entity) -> Option<Entity> {
        self.slots(cart)[1]
    }

    fn has_free_link(&self, cart: Entity) -> bool {
        self.slots(cart).contains(&None)
    }
}
