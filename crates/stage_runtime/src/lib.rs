//! # stage_runtime
//!
//! Runs sprites' scripts: one named thread per sprite, a concurrent sprite
//! registry for the render side, and stage-wide pause/resume/stop control.
//!
//! This crate provides:
//!
//! - [`StageRegistry`] — concurrent sprite lookup and redraw draining.
//! - [`SpriteActor`] — one sprite paired with the script it executes.
//! - [`StageRunner`] — spawn, control, and join the executor threads.
//! - [`StageError`] — runtime-layer error type.

pub mod actor;
pub mod error;
pub mod registry;
pub mod runner;

pub use actor::SpriteActor;
pub use error::StageError;
pub use registry::StageRegistry;
pub use runner::StageRunner;
