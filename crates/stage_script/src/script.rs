//! Script container: the ordered brick list a sprite executes.

use crate::brick::Brick;

/// An ordered, editable list of bricks.
///
/// Scripts own their bricks; the sprite association lives with the runtime
/// actor that executes the script.
#[derive(Debug, Default, Clone)]
pub struct Script {
    bricks: Vec<Box<dyn Brick>>,
}

impl Script {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a brick, consuming and returning the script. Convenient for
    /// building scripts inline.
    #[must_use]
    pub fn with(mut self, brick: impl Brick + 'static) -> Self {
        self.bricks.push(Box::new(brick));
        self
    }

    /// Append a brick to the end of the script.
    pub fn push(&mut self, brick: Box<dyn Brick>) {
        self.bricks.push(brick);
    }

    /// Insert a brick at `index`, shifting later bricks down.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, brick: Box<dyn Brick>) {
        self.bricks.insert(index, brick);
    }

    /// Remove and return the brick at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Brick>> {
        (index < self.bricks.len()).then(|| self.bricks.remove(index))
    }

    /// Returns the brick at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&dyn Brick> {
        self.bricks.get(index).map(|brick| brick.as_ref())
    }

    /// Returns the brick at `index` for editing.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Box<dyn Brick>> {
        self.bricks.get_mut(index)
    }

    /// Iterate over the bricks in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Brick> {
        self.bricks.iter().map(|brick| brick.as_ref())
    }

    /// Returns the number of bricks in the script.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    /// Returns `true` if the script has no bricks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }
}
