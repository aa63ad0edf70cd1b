//! The place-at brick: immediate positional snap.

use tracing::debug;

use stage_math::IVec2;
use stage_object::Sprite;

use crate::brick::Brick;
use crate::editor::{BrickField, EditorField, FieldEdit, FieldValue};

/// Moves the sprite to an integer destination immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceAtBrick {
    destination: IVec2,
}

impl PlaceAtBrick {
    /// Create a place brick with the given destination.
    #[must_use]
    pub fn new(destination: IVec2) -> Self {
        Self { destination }
    }

    /// The configured destination, in integer stage units.
    #[must_use]
    pub fn destination(&self) -> IVec2 {
        self.destination
    }
}

impl Brick for PlaceAtBrick {
    fn kind(&self) -> &'static str {
        "place_at"
    }

    fn execute(&self, sprite: &Sprite) {
        debug!(sprite = sprite.name(), destination = ?self.destination, "place");
        sprite.set_position(self.destination.as_vec2());
        sprite.request_redraw();
    }

    fn editor_fields(&self) -> Vec<EditorField> {
        vec![
            EditorField::integer(BrickField::DestinationX, self.destination.x),
            EditorField::integer(BrickField::DestinationY, self.destination.y),
        ]
    }

    fn apply_edit(&mut self, edit: FieldEdit) {
        match (edit.field, edit.value) {
            (BrickField::DestinationX, FieldValue::Integer(x)) => self.destination.x = x,
            (BrickField::DestinationY, FieldValue::Integer(y)) => self.destination.y = y,
            (field, value) => {
                panic!("place-at brick received edit {value:?} for foreign field {field:?}")
            }
        }
    }

    fn boxed_clone(&self) -> Box<dyn Brick> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use stage_math::Vec2;
    use stage_object::SpriteId;

    use super::*;

    #[test]
    fn test_snaps_with_single_redraw() {
        let sprite = Sprite::new(SpriteId::from_raw(1), "dot", Vec2::new(5.0, 5.0));
        let brick = PlaceAtBrick::new(IVec2::new(-8, 12));
        brick.execute(&sprite);
        assert_eq!(sprite.position(), Vec2::new(-8.0, 12.0));
        assert!(sprite.take_redraw());
        assert!(!sprite.take_redraw());
    }

    #[test]
    fn test_edits_update_only_their_own_field() {
        let mut brick = PlaceAtBrick::new(IVec2::new(1, 2));
        brick.apply_edit(FieldEdit::integer(BrickField::DestinationY, 40));
        assert_eq!(brick.destination(), IVec2::new(1, 40));
        brick.apply_edit(FieldEdit::integer(BrickField::DestinationX, -3));
        assert_eq!(brick.destination(), IVec2::new(-3, 40));
    }

    #[test]
    #[should_panic(expected = "foreign field")]
    fn test_foreign_field_edit_panics() {
        let mut brick = PlaceAtBrick::new(IVec2::ZERO);
        brick.apply_edit(FieldEdit::decimal(BrickField::DurationSeconds, 2.0));
    }
}
