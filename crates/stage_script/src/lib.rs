//! # stage_script
//!
//! The brick model: what a brick is, the built-in bricks, and the script
//! container that sprites execute.
//!
//! This crate provides:
//!
//! - [`Brick`] trait — the contract every script step satisfies.
//! - [`editor`] — the typed field-edit surface bricks expose to a host UI.
//! - [`bricks`] — built-in bricks (glide to, place at, wait).
//! - [`Script`] — an ordered, editable list of bricks.
//! - [`timing`] — the pause-aware tick wait shared by time-consuming bricks.

pub mod brick;
pub mod bricks;
pub mod editor;
pub mod script;
pub mod timing;

pub use brick::Brick;
pub use bricks::{GlideToBrick, PlaceAtBrick, WaitBrick};
pub use editor::{BrickField, EditorField, FieldEdit, FieldValue};
pub use script::Script;
