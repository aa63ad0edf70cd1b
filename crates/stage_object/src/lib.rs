//! # stage_object
//!
//! The shared sprite object and its supporting types.
//!
//! This crate provides:
//!
//! - [`SpriteId`] — lightweight `u64` sprite identifiers.
//! - [`SpriteIdAllocator`] — monotonically increasing ID allocator.
//! - [`RunFlags`] — the shared paused/finished capability.
//! - [`Sprite`] — spatial state, redraw signalling, and run flags shared
//!   between the runtime, the sprite's executor thread, and the render side.

pub mod flags;
pub mod id;
pub mod sprite;

pub use flags::RunFlags;
pub use id::{SpriteId, SpriteIdAllocator};
pub use sprite::Sprite;
