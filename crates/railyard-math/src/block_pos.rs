use glam::DVec3;
use std::fmt;

/// Integer coordinate of a single grid cell (one block).
///
/// The cell spans `[x, x + 1) × [y, y + 1) × [z, z + 1)` in continuous
/// world space, so the cell's minimum corner is the position itself.
/// Offsets wrap at the edges of the `i32` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    /// The cell at the origin.
    pub const ORIGIN: BlockPos = BlockPos { x: 0, y: 0, z: 0 };

    /// Creates a new BlockPos with the given coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the position shifted by the given per-axis deltas.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(
            self.x.wrapping_add(dx),
            self.y.wrapping_add(dy),
            self.z.wrapping_add(dz),
        )
    }

    /// Minimum corner of the cell in continuous space.
    pub fn min_corner(self) -> DVec3 {
        DVec3::new(self.x as f64, self.y as f64, self.z as f64)
    }

    /// Horizontal center of the cell at its floor.
    pub fn bottom_center(self) -> DVec3 {
        self.min_corner() + DVec3::new(0.5, 0.0, 0.5)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let pos = BlockPos::new(10, 64, 20);
        assert_eq!(pos.offset(1, -1, 0), BlockPos::new(11, 63, 20));
    }

    #[test]
    fn test_min_corner_and_bottom_center() {
        let pos = BlockPos::new(-3, 5, 7);
        assert_eq!(pos.min_corner(), DVec3::new(-3.0, 5.0, 7.0));
        assert_eq!(pos.bottom_center(), DVec3::new(-2.5, 5.0, 7.5));
    }

    #[test]
    fn test_offset_wraps_at_range_edge() {
        let edge = BlockPos::new(i32::MAX, 0, i32::MIN);
        assert_eq!(edge.offset(1, 0, -1), BlockPos::new(i32::MIN, 0, i32::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(BlockPos::new(1, -2, 3).to_string(), "(1, -2, 3)");
    }
}
