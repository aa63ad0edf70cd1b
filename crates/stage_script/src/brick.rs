//! The brick contract.
//!
//! A brick is one step in a sprite's script. Bricks execute sequentially on
//! the sprite's own thread and communicate only through side effects on the
//! shared sprite.

use std::fmt;

use stage_object::Sprite;

use crate::editor::{EditorField, FieldEdit};

/// One step in a sprite's script.
pub trait Brick: fmt::Debug + Send {
    /// Short stable name for logs.
    fn kind(&self) -> &'static str;

    /// Run the brick against `sprite`, blocking the calling thread until
    /// the brick's effect is complete. Time-consuming bricks observe the
    /// sprite's run flags while they wait and may return early if the
    /// script is terminated while paused.
    fn execute(&self, sprite: &Sprite);

    /// The fields a host UI may edit, with their current values.
    ///
    /// Built on demand; bricks retain no editor state between calls.
    fn editor_fields(&self) -> Vec<EditorField> {
        Vec::new()
    }

    /// Apply a completed edit to this brick's configuration.
    ///
    /// Values arrive already validated by the editor popups; this handler
    /// only routes them to the right stored field.
    ///
    /// # Panics
    ///
    /// Panics if the edit is tagged with a field this brick does not own —
    /// an editor wiring bug, not user input.
    fn apply_edit(&mut self, edit: FieldEdit) {
        panic!("{} brick has no editable fields, got {edit:?}", self.kind());
    }

    /// Clone into a fresh boxed brick with identical configuration.
    fn boxed_clone(&self) -> Box<dyn Brick>;
}

impl Clone for Box<dyn Brick> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}
