//! The stage runner — spawns, controls, and joins sprite executor threads.

use std::sync::Arc;
use std::thread::JoinHandle;

use tracing::{info, warn};
use uuid::Uuid;

use crate::{SpriteActor, StageError, StageRegistry};

/// Runs a stage: one named executor thread per sprite actor.
///
/// The runner is the sole writer of every sprite's run flags; bricks and
/// executors only read them.
#[derive(Debug)]
pub struct StageRunner {
    /// The project being run.
    project_name: String,
    /// Unique identifier for this run.
    run_id: String,
    /// Shared sprite registry (render side holds a clone of the `Arc`).
    registry: Arc<StageRegistry>,
    /// Executor thread handles, one per spawned actor.
    handles: Vec<JoinHandle<()>>,
}

impl StageRunner {
    /// Create a runner for the named project.
    #[must_use]
    pub fn new(project_name: impl Into<String>) -> Self {
        let project_name = project_name.into();
        let run_id = Uuid::new_v4().to_string();
        info!(project = project_name, run_id, "stage runner created");
        Self {
            project_name,
            run_id,
            registry: Arc::new(StageRegistry::new()),
            handles: Vec::new(),
        }
    }

    /// Returns the unique ID for this run.
    #[must_use]
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Returns the project name.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// The shared sprite registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<StageRegistry> {
        &self.registry
    }

    /// Register the actor's sprite and start its executor thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the sprite ID is already registered or the
    /// thread cannot be spawned.
    pub fn spawn(&mut self, actor: SpriteActor) -> Result<(), StageError> {
        let sprite = Arc::clone(actor.sprite());
        if !self.registry.register(Arc::clone(&sprite)) {
            return Err(StageError::DuplicateSprite(sprite.id()));
        }

        let bricks = actor.script().len();
        let handle = std::thread::Builder::new()
            .name(format!("sprite-{}", sprite.name()))
            .spawn(move || actor.run())?;

        info!(sprite = sprite.name(), id = %sprite.id(), bricks, "executor started");
        self.handles.push(handle);
        Ok(())
    }

    /// Pause script execution on every registered sprite.
    pub fn pause_all(&self) {
        self.registry.for_each(|sprite| sprite.run_flags().pause());
        info!(project = self.project_name, "stage paused");
    }

    /// Resume script execution on every registered sprite.
    pub fn resume_all(&self) {
        self.registry.for_each(|sprite| sprite.run_flags().resume());
        info!(project = self.project_name, "stage resumed");
    }

    /// Mark every sprite finished. Executors stop before their next brick;
    /// bricks waiting while paused abort immediately.
    pub fn stop_all(&self) {
        self.registry.for_each(|sprite| sprite.run_flags().finish());
        info!(project = self.project_name, "stage stopping");
    }

    /// Wait for every executor thread to finish.
    pub fn join(mut self) {
        for handle in self.handles.drain(..) {
            if handle.join().is_err() {
                warn!(project = self.project_name, "executor thread panicked");
            }
        }
        info!(
            project = self.project_name,
            run_id = self.run_id,
            "stage runner joined"
        );
    }
}
