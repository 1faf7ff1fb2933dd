//! Closed set of cart kinds and the is-a relation between them.

/// Kind tag carried by every cart.
///
/// Abstract kinds (`Minecart`, `Container`, `Locomotive`) exist so filters
/// can target a whole family; concrete carts normally carry a leaf kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CartKind {
    /// Root of the hierarchy.
    Minecart,
    /// Rideable cart with no payload.
    Basic,
    /// Any cart carrying an item inventory.
    Container,
    Chest,
    Hopper,
    /// Bulk item cart.
    Cargo,
    Furnace,
    Tnt,
    Spawner,
    CommandBlock,
    /// Fluid cart.
    Tank,
    /// Crafting-table cart.
    Work,
    /// Any self-propelled cart.
    Locomotive,
    SteamLocomotive,
    ElectricLocomotive,
    CreativeLocomotive,
}

impl CartKind {
    /// Every kind, roots before their descendants.
    pub const ALL: [CartKind; 16] = [
        Self::Minecart,
        Self::Basic,
        Self::Container,
        Self::Chest,
        Self::Hopper,
        Self::Cargo,
        Self::Furnace,
        Self::Tnt,
        Self::Spawner,
        Self::CommandBlock,
        Self::Tank,
        Self::Work,
        Self::Locomotive,
        Self::SteamLocomotive,
        Self::ElectricLocomotive,
        Self::CreativeLocomotive,
    ];

    /// The kind this one directly specialises. Only [`CartKind::Minecart`]
    /// has no parent.
    pub fn parent(self) -> Option<CartKind> {
        match self {
            Self::Minecart => None,
            Self::Chest | Self::Hopper | Self::Cargo => Some(Self::Container),
            Self::SteamLocomotive | Self::ElectricLocomotive | Self::CreativeLocomotive => {
                Some(Self::Locomotive)
            }
            Self::Basic
            | Self::Container
            | Self::Furnace
            | Self::Tnt
            | Self::Spawner
            | Self::CommandBlock
            | Self::Tank
            | Self::Work
            | Self::Locomotive => Some(Self::Minecart),
        }
    }

    /// Returns `true` if `self` is `ancestor` or descends from it.
    pub fn is_a(self, ancestor: CartKind) -> bool {
        self.lineage().any(|kind| kind == ancestor)
    }

    /// Iterates from `self` up to the root, inclusive.
    pub fn lineage(self) -> impl Iterator<Item = CartKind> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }

    /// Stable lowercase name used in logs and item registration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Minecart => "minecart",
            Self::Basic => "basic",
            Self::Container => "container",
            Self::Chest => "chest",
            Self::Hopper => "hopper",
            Self::Cargo => "cargo",
            Self::Furnace => "furnace",
            Self::Tnt => "tnt",
            Self::Spawner => "spawner",
            Self::CommandBlock => "command_block",
            Self::Tank => "tank",
            Self::Work => "work",
            Self::Locomotive => "locomotive",
            Self::SteamLocomotive => "steam_locomotive",
            Self::ElectricLocomotive => "electric_locomotive",
            Self::CreativeLocomotive => "creative_locomotive",
        }
    }
}

impl std::fmt::Display for CartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_reaches_root() {
        for kind in CartKind::ALL {
            assert_eq!(kind.lineage().last(), Some(CartKind::Minecart), "{kind}");
            assert!(kind.is_a(CartKind::Minecart));
        }
    }

    #[test]
    fn test_is_a_is_reflexive() {
        for kind in CartKind::ALL {
            assert!(kind.is_a(kind));
        }
    }

    #[test]
    fn test_family_membership() {
        assert!(CartKind::Chest.is_a(CartKind::Container));
        assert!(CartKind::SteamLocomotive.is_a(CartKind::Locomotive));
        assert!(!CartKind::Tank.is_a(CartKind::Container));
        assert!(!CartKind::Container.is_a(CartKind::Chest));
        assert!(!CartKind::Locomotive.is_a(CartKind::SteamLocomotive));
    }

    #[test]
    fn test_lineage_order() {
        let lineage: Vec<_> = CartKind::Hopper.lineage().collect();
        assert_eq!(
            lineage,
            vec![CartKind::Hopper, CartKind::Container, CartKind::Minecart]
        );
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<_> = CartKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CartKind::ALL.len());
    }
}
