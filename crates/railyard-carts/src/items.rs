//! Item stacks and the registry that decides how each item places carts.
//!
//! Placement capability is resolved once, when an item is registered:
//! an item either places carts itself ([`ItemBehavior::Placer`]), is a plain
//! cart item driven through the generic item-use path
//! ([`ItemBehavior::Cart`]), or has nothing to do with carts.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use railyard_math::BlockPos;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::identity::OwnerIdentity;
use crate::kind::CartKind;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Compact identifier assigned by the [`ItemRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(pub u16);

/// A quantity of one item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStack {
    pub item: ItemId,
    pub count: u32,
    /// Player-assigned name, carried onto whatever the item places.
    pub custom_name: Option<String>,
}

impl ItemStack {
    pub fn new(item: ItemId, count: u32) -> Self {
        Self {
            item,
            count,
            custom_name: None,
        }
    }

    /// Returns the stack renamed to `name`.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.custom_name = Some(name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Removes up to `amount` items from the stack.
    pub fn shrink(&mut self, amount: u32) {
        self.count = self.count.saturating_sub(amount);
    }
}

/// An item that spawns its own cart entity.
///
/// Implementors own the whole spawn, including tagging the owner; callers
/// return their result untouched.
pub trait CartPlacer: Send + Sync {
    /// Places a cart for `owner` at `pos`. `stack` is a private copy the
    /// placer may consume from.
    fn place_cart(
        &self,
        world: &mut World,
        owner: &OwnerIdentity,
        stack: &mut ItemStack,
        pos: BlockPos,
    ) -> Option<Entity>;
}

/// How an item relates to carts.
#[derive(Clone)]
pub enum ItemBehavior {
    /// Not a cart item.
    Plain,
    /// A plain cart item, placed through the generic item-use path.
    Cart(CartKind),
    /// Places carts through its own capability.
    Placer(Arc<dyn CartPlacer>),
}

impl std::fmt::Debug for ItemBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => f.write_str("Plain"),
            Self::Cart(kind) => f.debug_tuple("Cart").field(kind).finish(),
            Self::Placer(_) => f.write_str("Placer(..)"),
        }
    }
}

/// Registered item description.
#[derive(Clone, Debug)]
pub struct ItemDef {
    /// Unique name (e.g. "minecart", "chest_minecart").
    pub name: String,
    pub behavior: ItemBehavior,
}

/// Errors that can occur during item registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An item with the same name has already been registered.
    #[error("duplicate item name: {0}")]
    DuplicateName(String),
    /// Every `u16` id is taken.
    #[error("item registry is full (max 65536 items)")]
    RegistryFull,
}

/// Cart items every world knows about.
pub const STANDARD_CART_ITEMS: [(&str, CartKind); 6] = [
    ("minecart", CartKind::Basic),
    ("chest_minecart", CartKind::Chest),
    ("furnace_minecart", CartKind::Furnace),
    ("tnt_minecart", CartKind::Tnt),
    ("hopper_minecart", CartKind::Hopper),
    ("command_block_minecart", CartKind::CommandBlock),
];

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Maps [`ItemId`] → [`ItemDef`] with O(1) lookup by id and by name.
#[derive(Resource, Default)]
pub struct ItemRegistry {
    items: Vec<ItemDef>,
    name_to_id: FxHashMap<String, ItemId>,
}

impl ItemRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding [`STANDARD_CART_ITEMS`] at ids 0..6.
    pub fn with_standard_carts() -> Self {
        let mut registry = Self::new();
        for (name, kind) in STANDARD_CART_ITEMS {
            registry.push(ItemDef {
                name: name.to_string(),
                behavior: ItemBehavior::Cart(kind),
            });
        }
        registry
    }

    /// Registers a new item and returns its id.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateName`] if the name is taken,
    /// [`RegistryError::RegistryFull`] if all ids are used.
    pub fn register(&mut self, def: ItemDef) -> Result<ItemId, RegistryError> {
        if self.name_to_id.contains_key(&def.name) {
            return Err(RegistryError::DuplicateName(def.name));
        }
        if self.items.len() > u16::MAX as usize {
            return Err(RegistryError::RegistryFull);
        }
        Ok(self.push(def))
    }

    /// Shorthand for registering an item with the given behavior.
    pub fn register_item(
        &mut self,
        name: impl Into<String>,
        behavior: ItemBehavior,
    ) -> Result<ItemId, RegistryError> {
        self.register(ItemDef {
            name: name.into(),
            behavior,
        })
    }

    /// Returns the definition for `id`, if registered.
    pub fn get(&self, id: ItemId) -> Option<&ItemDef> {
        self.items.get(id.0 as usize)
    }

    /// Returns the behavior for `id`, if registered.
    pub fn behavior(&self, id: ItemId) -> Option<&ItemBehavior> {
        self.get(id).map(|def| &def.behavior)
    }

    /// Returns the id for a named item.
    pub fn lookup_by_name(&self, name: &str) -> Option<ItemId> {
        self.name_to_id.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, def: ItemDef) -> ItemId {
        let id = ItemId(self.items.len() as u16);
        self.name_to_id.insert(def.name.clone(), id);
        self.items.push(def);
        id
    }
}
