//! Cart lookup, ownership, placement and item hand-off for rail-bound carts.
//!
//! Carts are `bevy_ecs` entities. Everything here is a free function over a
//! [`World`](bevy_ecs::world::World): lookups take `&World`, mutations take
//! `&mut World`. External collaborators (track detection, coupling, item
//! transfer) are optional resources; a world without them still works with
//! the features they provide switched off.

pub mod actor;
pub mod components;
pub mod data;
pub mod error;
pub mod filter;
pub mod identity;
pub mod index;
pub mod interaction;
pub mod items;
pub mod kind;
pub mod linkage;
pub mod locator;
pub mod motion;
pub mod ownership;
pub mod settings;
pub mod spawn;
pub mod track;
pub mod transfer;
pub mod world;

pub use actor::{FakeActors, fake_actor};
pub use components::{
    Actor, Alive, Cart, CartBody, CartBundle, CustomName, DroppedItem, Motion, Position,
};
pub use data::{DataValue, EntityData};
pub use error::CartError;
pub use filter::CartFilter;
pub use identity::{
    OwnerIdentity, SYNTHETIC_ACTOR_NAME, UNKNOWN_OWNER_NAME, name_uuid, synthetic_actor,
};
pub use index::overlapping_carts;
pub use interaction::{InteractionError, use_item_on};
pub use items::{CartPlacer, ItemBehavior, ItemDef, ItemId, ItemRegistry, ItemStack, RegistryError};
pub use kind::CartKind;
pub use linkage::{LinkTable, LinkageManager, LinkageService, linkage_manager, linked_carts};
pub use locator::{
    cart_on_side, cart_on_side_matching, carts_at, carts_at_matching, carts_in,
    carts_in_matching, carts_on_all_sides, carts_on_all_sides_matching, carts_on_side,
    is_cart_at, is_cart_on_any_side, is_cart_on_rail_at, is_cart_on_side,
    is_cart_on_side_matching, kill_cart,
};
pub use motion::{cart_speed_uncapped, cart_velocity_is_less_than};
pub use ownership::{cart_has_owner, cart_owner, set_cart_owner, set_cart_owner_from_actor};
pub use settings::CartSettings;
pub use spawn::place_cart;
pub use track::{TrackDetector, TrackPredicate, TrackSet, is_track_at};
pub use transfer::{TransferHelper, TransferService, drop_item_from, offer_or_drop_item};
pub use world::{WorldSide, create_world, register_cart_resources, world_side};
