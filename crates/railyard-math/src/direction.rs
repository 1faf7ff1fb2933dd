//! The six axis-aligned directions a grid cell can be probed in.

use crate::BlockPos;

/// One of the six axis-aligned directions around a grid cell.
///
/// The `repr(u8)` discriminant is the host engine's face ordinal, which is
/// also the iteration order used by every all-sides lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// −Y.
    Down = 0,
    /// +Y.
    Up = 1,
    /// −Z.
    North = 2,
    /// +Z.
    South = 3,
    /// −X.
    West = 4,
    /// +X.
    East = 5,
}

impl Direction {
    /// All six directions in ordinal order.
    pub const ALL: [Direction; 6] = [
        Self::Down,
        Self::Up,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    /// Returns the unit step `(dx, dy, dz)` for this direction.
    pub fn step(self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }

    /// Returns the cell adjacent to `pos` in this direction. Never moves
    /// more than one cell.
    pub fn offset(self, pos: BlockPos) -> BlockPos {
        let (dx, dy, dz) = self.step();
        pos.offset(dx, dy, dz)
    }

    /// Returns the opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_directions_unique() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            for (j, b) in Direction::ALL.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_offset_table() {
        let pos = BlockPos::new(5, 10, 15);
        assert_eq!(Direction::Up.offset(pos), BlockPos::new(5, 11, 15));
        assert_eq!(Direction::Down.offset(pos), BlockPos::new(5, 9, 15));
        assert_eq!(Direction::East.offset(pos), BlockPos::new(6, 10, 15));
        assert_eq!(Direction::West.offset(pos), BlockPos::new(4, 10, 15));
        assert_eq!(Direction::South.offset(pos), BlockPos::new(5, 10, 16));
        assert_eq!(Direction::North.offset(pos), BlockPos::new(5, 10, 14));
    }

    #[test]
    fn test_offset_then_opposite_is_identity() {
        let pos = BlockPos::new(-7, 0, 3);
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().offset(dir.offset(pos)), pos, "{dir:?}");
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_ordinal_matches_iteration_order() {
        for (i, dir) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(dir as usize, i);
        }
    }
}
