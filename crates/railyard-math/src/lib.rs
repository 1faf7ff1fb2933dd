//! Grid coordinates, face directions, and axis-aligned boxes for the rail simulation.

mod aabb;
mod block_pos;
mod direction;

pub use aabb::Aabb;
pub use block_pos::BlockPos;
pub use direction::Direction;
