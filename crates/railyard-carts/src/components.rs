//! ECS components carried by carts, actors and dropped items.

use bevy_ecs::prelude::*;
use glam::DVec3;
use railyard_math::Aabb;

use crate::data::EntityData;
use crate::identity::OwnerIdentity;
use crate::items::ItemStack;
use crate::kind::CartKind;

/// Continuous world-space position. For carts and items this is the point
/// at the bottom center of the entity's bounding box.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Position(pub DVec3);

/// Velocity in blocks per tick.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Motion(pub DVec3);

/// Liveness flag. Once a cart is killed it never comes back; lookups skip it
/// until the host removes the entity.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alive(pub bool);

impl Default for Alive {
    fn default() -> Self {
        Self(true)
    }
}

/// Player-facing name, carried over from a renamed cart item.
#[derive(Component, Clone, Debug, PartialEq, Eq, Default)]
pub struct CustomName(pub String);

/// Marks an entity as a cart and records its kind.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cart {
    pub kind: CartKind,
}

/// Collision box dimensions of a cart.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CartBody {
    /// Half of the horizontal width.
    pub half_width: f64,
    pub height: f64,
}

impl Default for CartBody {
    fn default() -> Self {
        Self {
            half_width: 0.49,
            height: 0.7,
        }
    }
}

impl CartBody {
    /// The world-space box of a cart standing at `position`.
    pub fn bounds_at(&self, position: DVec3) -> Aabb {
        Aabb::standing_at(position, self.half_width, self.height)
    }
}

/// Everything a freshly spawned cart needs.
#[derive(Bundle)]
pub struct CartBundle {
    pub cart: Cart,
    pub position: Position,
    pub motion: Motion,
    pub body: CartBody,
    pub alive: Alive,
    pub data: EntityData,
}

impl CartBundle {
    /// A cart of `kind` at rest at `position` with empty persistent data.
    pub fn new(kind: CartKind, position: DVec3) -> Self {
        Self {
            cart: Cart { kind },
            position: Position(position),
            motion: Motion::default(),
            body: CartBody::default(),
            alive: Alive::default(),
            data: EntityData::default(),
        }
    }

    /// Sets the initial velocity.
    pub fn with_motion(mut self, motion: DVec3) -> Self {
        self.motion = Motion(motion);
        self
    }
}

/// An entity able to act on the world: a player, or a synthetic stand-in.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub profile: OwnerIdentity,
    synthetic: bool,
}

impl Actor {
    /// A real, player-controlled actor.
    pub fn player(profile: OwnerIdentity) -> Self {
        Self {
            profile,
            synthetic: false,
        }
    }

    /// A stand-in actor driven by automation.
    pub fn synthetic(profile: OwnerIdentity) -> Self {
        Self {
            profile,
            synthetic: true,
        }
    }

    /// Synthetic actors must never pass access checks meant for players.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }
}

/// An item stack lying in the world.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct DroppedItem {
    pub stack: ItemStack,
    /// Ticks left before the item can be picked up.
    pub pickup_delay: u32,
}
