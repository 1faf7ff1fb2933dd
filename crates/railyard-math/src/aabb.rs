use glam::DVec3;

use crate::BlockPos;

/// Axis-aligned bounding box in continuous world space.
///
/// Invariant: `min.x <= max.x`, `min.y <= max.y`, `min.z <= max.z` for boxes
/// built with [`Aabb::new`]. [`Aabb::inset_cell`] with an inset above 0.5 is
/// the one way to get an inverted box, and an inverted box overlaps nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Create an AABB from two corners. Automatically sorts
    /// components so that min <= max on every axis.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box spanning two grid positions used as corners.
    pub fn from_corners(a: BlockPos, b: BlockPos) -> Self {
        Self::new(a.min_corner(), b.min_corner())
    }

    /// The unit cell at `pos` with every face pulled inward by `inset`.
    ///
    /// A negative inset grows the box past the cell faces.
    pub fn inset_cell(pos: BlockPos, inset: f64) -> Self {
        let corner = pos.min_corner();
        Self {
            min: corner + DVec3::splat(inset),
            max: corner + DVec3::splat(1.0 - inset),
        }
    }

    /// Box of the given horizontal half-width and height standing on `feet`.
    pub fn standing_at(feet: DVec3, half_width: f64, height: f64) -> Self {
        Self {
            min: DVec3::new(feet.x - half_width, feet.y, feet.z - half_width),
            max: DVec3::new(feet.x + half_width, feet.y + height, feet.z + half_width),
        }
    }

    /// Returns true if the interiors of the two boxes overlap.
    ///
    /// Boxes that only share a face, edge or corner do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }
}
