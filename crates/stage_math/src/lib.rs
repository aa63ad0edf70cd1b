//! # stage_math
//!
//! Math types for the blockstage runtime. Re-exports [`glam`] for linear
//! algebra and defines stage-specific spatial types.

pub mod transform;

// Re-export glam types for convenience.
pub use glam::{IVec2, Mat3, Vec2};

pub use transform::Transform2D;
