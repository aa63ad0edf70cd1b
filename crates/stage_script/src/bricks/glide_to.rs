//! The glide-to brick: linear movement to a destination over a duration.
//!
//! The sprite advances in fixed 33 ms ticks. Each tick moves every axis by
//! `elapsed / remaining` of the distance still to cover, where `remaining`
//! is the duration left *after* subtracting the tick's elapsed time — steps
//! are weighted by the time still to serve, not by the total duration. On
//! exhaustion the position snaps exactly onto the integer destination,
//! clearing accumulated floating-point drift.

use std::time::{Duration, Instant};

use tracing::debug;

use stage_math::IVec2;
use stage_object::Sprite;

use crate::brick::Brick;
use crate::editor::{BrickField, EditorField, FieldEdit, FieldValue};
use crate::timing::{self, TICK};

/// Moves the sprite linearly to an integer destination over a configured
/// duration, honouring pause and termination while it waits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlideToBrick {
    destination: IVec2,
    duration_ms: u64,
}

impl GlideToBrick {
    /// Create a glide brick with the given destination and duration.
    #[must_use]
    pub fn new(destination: IVec2, duration_ms: u64) -> Self {
        Self {
            destination,
            duration_ms,
        }
    }

    /// The configured destination, in integer stage units.
    #[must_use]
    pub fn destination(&self) -> IVec2 {
        self.destination
    }

    /// The configured duration, in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Advance the sprite by one tick's worth of movement.
    ///
    /// `remaining` is the unserved duration after this tick's subtraction;
    /// the per-axis step fraction is `elapsed / remaining`.
    fn advance(&self, sprite: &Sprite, elapsed: Duration, remaining: Duration) {
        let share = elapsed.as_secs_f32() / remaining.as_secs_f32();
        let position = sprite.position();
        sprite.set_position(position + (self.destination.as_vec2() - position) * share);
    }
}

impl Brick for GlideToBrick {
    fn kind(&self) -> &'static str {
        "glide_to"
    }

    fn execute(&self, sprite: &Sprite) {
        debug!(
            sprite = sprite.name(),
            destination = ?self.destination,
            duration_ms = self.duration_ms,
            "glide start"
        );

        let mut remaining = Duration::from_millis(self.duration_ms);
        let mut last_update = Instant::now();

        while !remaining.is_zero() {
            // One tick, with paused spans folded out of the elapsed-time
            // reference so paused time never counts against the duration.
            let Some(paused_for) = timing::wait_until(sprite.run_flags(), Instant::now() + TICK)
            else {
                debug!(sprite = sprite.name(), "glide aborted while paused");
                return;
            };
            last_update += paused_for;

            let now = Instant::now();
            let elapsed = now.saturating_duration_since(last_update);
            remaining = remaining.saturating_sub(elapsed);
            // The tick that exhausts the duration skips the fractional step;
            // the snap below lands on the destination either way.
            if !remaining.is_zero() {
                self.advance(sprite, elapsed, remaining);
            }
            sprite.request_redraw();
            last_update = now;
        }

        // Exhausted: land exactly on the destination.
        sprite.set_position(self.destination.as_vec2());
        sprite.request_redraw();
        debug!(sprite = sprite.name(), "glide done");
    }

    fn editor_fields(&self) -> Vec<EditorField> {
        vec![
            EditorField::integer(BrickField::DestinationX, self.destination.x),
            EditorField::integer(BrickField::DestinationY, self.destination.y),
            EditorField::decimal(BrickField::DurationSeconds, self.duration_ms as f64 / 1000.0),
        ]
    }

    fn apply_edit(&mut self, edit: FieldEdit) {
        match (edit.field, edit.value) {
            (BrickField::DestinationX, FieldValue::Integer(x)) => self.destination.x = x,
            (BrickField::DestinationY, FieldValue::Integer(y)) => self.destination.y = y,
            (BrickField::DurationSeconds, FieldValue::Decimal(seconds)) => {
                self.duration_ms = (seconds * 1000.0).round() as u64;
            }
            (field, value) => {
                panic!("glide-to brick received edit {value:?} for foreign field {field:?}")
            }
        }
    }

    fn boxed_clone(&self) -> Box<dyn Brick> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use stage_math::Vec2;
    use stage_object::SpriteId;

    use super::*;

    fn sprite_at(start: Vec2) -> Sprite {
        Sprite::new(SpriteId::from_raw(1), "glider", start)
    }

    #[test]
    fn test_zero_duration_snaps_with_single_redraw() {
        let sprite = sprite_at(Vec2::ZERO);
        let brick = GlideToBrick::new(IVec2::new(42, -7), 0);
        brick.execute(&sprite);
        assert_eq!(sprite.position(), Vec2::new(42.0, -7.0));
        assert!(sprite.take_redraw());
        assert!(!sprite.take_redraw());
    }

    #[test]
    fn test_reaches_destination_exactly() {
        let sprite = sprite_at(Vec2::ZERO);
        let destination = IVec2::new(100, 50);
        let brick = GlideToBrick::new(destination, 120);
        let start = Instant::now();
        brick.execute(&sprite);
        let elapsed = start.elapsed();
        assert_eq!(sprite.position(), destination.as_vec2());
        assert!(sprite.take_redraw());
        assert!(elapsed >= Duration::from_millis(120), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(800), "elapsed {elapsed:?}");
    }

    #[test]
    fn test_paused_time_does_not_consume_duration() {
        let sprite = sprite_at(Vec2::ZERO);
        let brick = GlideToBrick::new(IVec2::new(60, 0), 150);
        let start = Instant::now();
        thread::scope(|scope| {
            scope.spawn(|| {
                thread::sleep(Duration::from_millis(40));
                sprite.run_flags().pause();
                thread::sleep(Duration::from_millis(120));
                sprite.run_flags().resume();
            });
            brick.execute(&sprite);
        });
        let elapsed = start.elapsed();
        assert_eq!(sprite.position(), Vec2::new(60.0, 0.0));
        assert!(elapsed >= Duration::from_millis(265), "elapsed {elapsed:?}");
    }

    #[test]
    fn test_finish_while_paused_aborts_without_snap() {
        let sprite = sprite_at(Vec2::ZERO);
        let brick = GlideToBrick::new(IVec2::new(1000, 0), 500);
        let start = Instant::now();
        thread::scope(|scope| {
            scope.spawn(|| {
                thread::sleep(Duration::from_millis(40));
                sprite.run_flags().pause();
                thread::sleep(Duration::from_millis(40));
                sprite.run_flags().finish();
            });
            brick.execute(&sprite);
        });
        let elapsed = start.elapsed();
        assert!(elapsed < Duration::from_millis(400), "elapsed {elapsed:?}");
        // Mid-flight position, no snap.
        assert!(sprite.position().x < 900.0, "position {:?}", sprite.position());
    }

    #[test]
    fn test_edits_update_only_their_own_field() {
        let mut brick = GlideToBrick::new(IVec2::new(10, 20), 3000);

        brick.apply_edit(FieldEdit::integer(BrickField::DestinationX, -5));
        assert_eq!(brick.destination(), IVec2::new(-5, 20));
        assert_eq!(brick.duration_ms(), 3000);

        brick.apply_edit(FieldEdit::integer(BrickField::DestinationY, 99));
        assert_eq!(brick.destination(), IVec2::new(-5, 99));
        assert_eq!(brick.duration_ms(), 3000);

        brick.apply_edit(FieldEdit::decimal(BrickField::DurationSeconds, 1.5));
        assert_eq!(brick.destination(), IVec2::new(-5, 99));
        assert_eq!(brick.duration_ms(), 1500);
    }

    #[test]
    fn test_editor_fields_report_duration_in_seconds() {
        let brick = GlideToBrick::new(IVec2::new(3, 4), 1500);
        let fields = brick.editor_fields();
        assert_eq!(
            fields,
            vec![
                EditorField::integer(BrickField::DestinationX, 3),
                EditorField::integer(BrickField::DestinationY, 4),
                EditorField::decimal(BrickField::DurationSeconds, 1.5),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "foreign field")]
    fn test_foreign_field_edit_panics() {
        let mut brick = GlideToBrick::new(IVec2::ZERO, 1000);
        brick.apply_edit(FieldEdit::integer(BrickField::DurationSeconds, 3));
    }

    #[test]
    fn test_clone_is_independent_of_the_original() {
        let mut brick = GlideToBrick::new(IVec2::new(1, 2), 700);
        let copy = brick.boxed_clone();
        brick.apply_edit(FieldEdit::integer(BrickField::DestinationX, 50));
        assert_eq!(
            copy.editor_fields(),
            vec![
                EditorField::integer(BrickField::DestinationX, 1),
                EditorField::integer(BrickField::DestinationY, 2),
                EditorField::decimal(BrickField::DurationSeconds, 0.7),
            ]
        );
    }
}
