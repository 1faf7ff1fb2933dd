//! Horizontal speed helpers.

use bevy_ecs::prelude::*;

use crate::components::Motion;

impl Motion {
    /// Horizontal speed, ignoring any speed cap.
    pub fn speed_uncapped(&self) -> f64 {
        self.0.x.hypot(self.0.z)
    }

    /// Returns `true` if both horizontal components are below `limit`
    /// in magnitude.
    pub fn is_slower_than(&self, limit: f32) -> bool {
        let limit = f64::from(limit);
        self.0.x.abs() < limit && self.0.z.abs() < limit
    }
}

/// Horizontal speed of `cart`. Entities without [`Motion`] are at rest.
pub fn cart_speed_uncapped(world: &World, cart: Entity) -> f64 {
    world
        .get::<Motion>(cart)
        .map_or(0.0, Motion::speed_uncapped)
}

pub fn cart_velocity_is_less_than(world: &World, cart: Entity, limit: f32) -> bool {
    world
        .get::<Motion>(cart)
        .copied()
        .unwrap_or_default()
        .is_slower_than(limit)
}
