//! The wait brick: consumes time without moving the sprite.

use std::time::{Duration, Instant};

use tracing::debug;

use stage_object::Sprite;

use crate::brick::Brick;
use crate::editor::{BrickField, EditorField, FieldEdit, FieldValue};
use crate::timing::{self, TICK};

/// Blocks the script for a configured duration, honouring pause and
/// termination while it waits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitBrick {
    duration_ms: u64,
}

impl WaitBrick {
    /// Create a wait brick with the given duration.
    #[must_use]
    pub fn new(duration_ms: u64) -> Self {
        Self { duration_ms }
    }

    /// The configured duration, in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}

impl Brick for WaitBrick {
    fn kind(&self) -> &'static str {
        "wait"
    }

    fn execute(&self, sprite: &Sprite) {
        debug!(sprite = sprite.name(), duration_ms = self.duration_ms, "wait start");

        let mut remaining = Duration::from_millis(self.duration_ms);
        let mut last_update = Instant::now();

        while !remaining.is_zero() {
            let step = TICK.min(remaining);
            let Some(paused_for) = timing::wait_until(sprite.run_flags(), Instant::now() + step)
            else {
                debug!(sprite = sprite.name(), "wait aborted while paused");
                return;
            };
            last_update += paused_for;

            let now = Instant::now();
            remaining = remaining.saturating_sub(now.saturating_duration_since(last_update));
            last_update = now;
        }
    }

    fn editor_fields(&self) -> Vec<EditorField> {
        vec![EditorField::decimal(
            BrickField::DurationSeconds,
            self.duration_ms as f64 / 1000.0,
        )]
    }

    fn apply_edit(&mut self, edit: FieldEdit) {
        match (edit.field, edit.value) {
            (BrickField::DurationSeconds, FieldValue::Decimal(seconds)) => {
                self.duration_ms = (seconds * 1000.0).round() as u64;
            }
            (field, value) => {
                panic!("wait brick received edit {value:?} for foreign field {field:?}")
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

    fn sprite() -> Sprite {
        Sprite::new(SpriteId::from_raw(1), "waiter", Vec2::ZERO)
    }

    #[test]
    fn test_wait_consumes_its_duration() {
        let sprite = sprite();
        let brick = WaitBrick::new(80);
        let start = Instant::now();
        brick.execute(&sprite);
        assert!(start.elapsed() >= Duration::from_millis(80));
        // No movement, no redraw.
        assert_eq!(sprite.position(), Vec2::ZERO);
        assert!(!sprite.take_redraw());
    }

    #[test]
    fn test_wait_aborts_while_paused() {
        let sprite = sprite();
        let brick = WaitBrick::new(10_000);
        let start = Instant::now();
        thread::scope(|scope| {
            scope.spawn(|| {
                thread::sleep(Duration::from_millis(30));
                sprite.run_flags().pause();
                thread::sleep(Duration::from_millis(30));
                sprite.run_flags().finish();
            });
            brick.execute(&sprite);
        });
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_duration_edit() {
        let mut brick = WaitBrick::new(100);
        brick.apply_edit(FieldEdit::decimal(BrickField::DurationSeconds, 2.25));
        assert_eq!(brick.duration_ms(), 2250);
        assert_eq!(
            brick.editor_fields(),
            vec![EditorField::decimal(BrickField::DurationSeconds, 2.25)]
        );
    }

    #[test]
    #[should_panic(expected = "foreign field")]
    fn test_foreign_field_edit_panics() {
        let mut brick = WaitBrick::new(100);
        brick.apply_edit(FieldEdit::integer(BrickField::DestinationX, 1));
    }
}
