//! Built-in bricks.

pub mod glide_to;
pub mod place_at;
pub mod wait;

pub use glide_to::GlideToBrick;
pub use place_at::PlaceAtBrick;
pub use wait::WaitBrick;
