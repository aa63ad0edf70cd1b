//! The shared sprite object.
//!
//! A [`Sprite`] is shared via `Arc` between the runtime, the sprite's
//! executor thread, and the render side. Bricks mutate the transform and
//! raise the redraw flag; the renderer takes the flag and reads the
//! transform; the runtime drives the run flags.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use stage_math::{Transform2D, Vec2};

use crate::{RunFlags, SpriteId};

/// One on-stage actor: spatial state, redraw signalling, and run flags.
#[derive(Debug)]
pub struct Sprite {
    /// Unique identifier within the running stage.
    id: SpriteId,
    /// Human-readable sprite name.
    name: String,
    /// Spatial state. Single writer: the brick currently executing.
    transform: Mutex<Transform2D>,
    /// Raised by bricks after a visible change; taken by the render side.
    needs_redraw: AtomicBool,
    /// Pause/finish state, written by the runtime only.
    flags: RunFlags,
}

impl Sprite {
    /// Create a sprite at the given starting position.
    #[must_use]
    pub fn new(id: SpriteId, name: impl Into<String>, start: Vec2) -> Self {
        Self {
            id,
            name: name.into(),
            transform: Mutex::new(Transform2D::from_position(start)),
            needs_redraw: AtomicBool::new(false),
            flags: RunFlags::new(),
        }
    }

    /// Returns the sprite's unique ID.
    #[must_use]
    pub fn id(&self) -> SpriteId {
        self.id
    }

    /// Returns the sprite's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sprite's current stage position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.transform.lock().position
    }

    /// Move the sprite to `position`.
    ///
    /// Does not raise the redraw flag; the caller decides when a redraw is
    /// due.
    pub fn set_position(&self, position: Vec2) {
        self.transform.lock().position = position;
    }

    /// Returns a copy of the sprite's full transform.
    #[must_use]
    pub fn transform(&self) -> Transform2D {
        *self.transform.lock()
    }

    /// Replace the sprite's full transform.
    pub fn set_transform(&self, transform: Transform2D) {
        *self.transform.lock() = transform;
    }

    /// Raise the needs-redraw flag.
    pub fn request_redraw(&self) {
        self.needs_redraw.store(true, Ordering::Release);
    }

    /// Take and clear the needs-redraw flag. Render side only.
    #[must_use]
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.swap(false, Ordering::AcqRel)
    }

    /// The shared pause/finish capability for this sprite's script.
    #[must_use]
    pub fn run_flags(&self) -> &RunFlags {
        &self.flags
    }
}
