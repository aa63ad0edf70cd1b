//! Sprite registry — shared lookup between runtime, render, and control.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use stage_object::{Sprite, SpriteId};

/// Registry of all sprites on the stage.
///
/// The runner registers sprites as actors spawn; the render side looks up
/// transforms and drains redraw requests; stage-wide control iterates the
/// run flags.
#[derive(Debug, Default)]
pub struct StageRegistry {
    sprites: DashMap<SpriteId, Arc<Sprite>>,
}

impl StageRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sprites: DashMap::new(),
        }
    }

    /// Register a sprite under its own ID.
    ///
    /// Returns `false` if the ID was already present; the existing entry is
    /// left untouched.
    pub fn register(&self, sprite: Arc<Sprite>) -> bool {
        match self.sprites.entry(sprite.id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(sprite);
                true
            }
        }
    }

    /// Remove a sprite from the registry.
    ///
    /// Returns `true` if it was present.
    pub fn unregister(&self, id: SpriteId) -> bool {
        self.sprites.remove(&id).is_some()
    }

    /// Look up a sprite by ID.
    #[must_use]
    pub fn get(&self, id: SpriteId) -> Option<Arc<Sprite>> {
        self.sprites.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    /// Run `f` for every registered sprite.
    pub fn for_each(&self, mut f: impl FnMut(&Sprite)) {
        for entry in self.sprites.iter() {
            f(entry.value());
        }
    }

    /// Collect the IDs of sprites whose redraw flag was raised, clearing
    /// the flags. Render side only.
    #[must_use]
    pub fn drain_redraws(&self) -> Vec<SpriteId> {
        let mut ids: Vec<SpriteId> = self
            .sprites
            .iter()
            .filter(|entry| entry.value().take_redraw())
            .map(|entry| *entry.key())
            .collect();
        ids.sort();
        ids
    }

    /// Returns the number of registered sprites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Returns `true` if no sprites are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
