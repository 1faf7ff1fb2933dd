//! Track detection.

use bevy_ecs::prelude::*;
use railyard_math::BlockPos;
use rustc_hash::FxHashSet;

/// Answers whether a grid cell holds track.
pub trait TrackPredicate: Send + Sync {
    fn is_track_at(&self, pos: BlockPos) -> bool;
}

/// The world's installed track predicate.
#[derive(Resource)]
pub struct TrackDetector(pub Box<dyn TrackPredicate>);

impl TrackDetector {
    pub fn new(predicate: impl TrackPredicate + 'static) -> Self {
        Self(Box::new(predicate))
    }
}

/// Returns `true` if `pos` holds track. Without a [`TrackDetector`] there is
/// no track anywhere.
pub fn is_track_at(world: &World, pos: BlockPos) -> bool {
    world
        .get_resource::<TrackDetector>()
        .is_some_and(|detector| detector.0.is_track_at(pos))
}

/// Explicit set of track cells.
#[derive(Clone, Debug, Default)]
pub struct TrackSet {
    cells: FxHashSet<BlockPos>,
}

impl TrackSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays track at `pos`. Returns `false` if it was already there.
    pub fn insert(&mut self, pos: BlockPos) -> bool {
        self.cells.insert(pos)
    }

    /// Removes track at `pos`. Returns `false` if there was none.
    pub fn remove(&mut self, pos: BlockPos) -> bool {
        self.cells.remove(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<BlockPos> for TrackSet {
    fn from_iter<I: IntoIterator<Item = BlockPos>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl TrackPredicate for TrackSet {
    fn is_track_at(&self, pos: BlockPos) -> bool {
        self.cells.contains(&pos)
    }
}
