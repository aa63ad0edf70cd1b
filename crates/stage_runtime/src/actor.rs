//! Sprite actors — one sprite paired with the script it executes.

use std::sync::Arc;

use tracing::debug;

use stage_object::Sprite;
use stage_script::Script;

/// One sprite and the script its executor thread runs.
///
/// Cloning an actor clones the script's brick configuration but shares the
/// sprite: a cloned script still drives the same on-stage object.
#[derive(Debug, Clone)]
pub struct SpriteActor {
    sprite: Arc<Sprite>,
    script: Script,
}

impl SpriteActor {
    /// Pair a sprite with the script it should execute.
    #[must_use]
    pub fn new(sprite: Arc<Sprite>, script: Script) -> Self {
        Self { sprite, script }
    }

    /// The shared sprite this actor drives.
    #[must_use]
    pub fn sprite(&self) -> &Arc<Sprite> {
        &self.sprite
    }

    /// The actor's script.
    #[must_use]
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// The actor's script, for editing.
    pub fn script_mut(&mut self) -> &mut Script {
        &mut self.script
    }

    /// Run the script to completion on the calling thread.
    ///
    /// Bricks run strictly in order. The finish flag is honoured between
    /// bricks; time-consuming bricks additionally observe it while paused.
    pub fn run(&self) {
        for (index, brick) in self.script.iter().enumerate() {
            if self.sprite.run_flags().is_finished() {
                debug!(sprite = self.sprite.name(), index, "script finished early");
                return;
            }
            debug!(
                sprite = self.sprite.name(),
                index,
                kind = brick.kind(),
                "executing brick"
            );
            brick.execute(&self.sprite);
        }
        debug!(sprite = self.sprite.name(), "script complete");
    }
}
