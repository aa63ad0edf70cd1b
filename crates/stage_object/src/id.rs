//! Sprite identity and allocation utilities.
//!
//! A [`SpriteId`] is a lightweight `u64` identifier with no inherent data.
//! IDs are allocated when a project is instantiated so that every sprite on
//! a running stage is uniquely addressable.

use serde::{Deserialize, Serialize};

/// A unique sprite identifier.
///
/// Sprite IDs are pure identifiers — they carry no data of their own. They
/// key the runtime registry; the sprite's state lives in
/// [`Sprite`](crate::Sprite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpriteId(pub u64);

impl SpriteId {
    /// The null / invalid sprite sentinel.
    pub const INVALID: SpriteId = SpriteId(0);

    /// Create a sprite ID from a raw `u64` identifier.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` if this is a valid (non-zero) sprite ID.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for SpriteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sprite({})", self.0)
    }
}

/// Allocates monotonically increasing sprite IDs.
///
/// One allocator per stage instantiation is the single source of sprite
/// identity for that run.
#[derive(Debug)]
pub struct SpriteIdAllocator {
    next_id: u64,
}

impl SpriteIdAllocator {
    /// Creates a new allocator. IDs start at 1 (0 is reserved for [`SpriteId::INVALID`]).
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Allocates a fresh sprite ID.
    pub fn allocate(&mut self) -> SpriteId {
        let id = self.next_id;
        self.next_id += 1;
        SpriteId(id)
    }

    /// Returns the number of IDs allocated so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.next_id - 1
    }
}

impl Default for SpriteIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = SpriteId::from_raw(42);
        assert_eq!(id.id(), 42);
        assert!(id.is_valid());
    }

    #[test]
    fn test_id_invalid() {
        assert!(!SpriteId::INVALID.is_valid());
        assert_eq!(SpriteId::INVALID.id(), 0);
    }

    #[test]
    fn test_allocator_produces_unique_ids() {
        let mut alloc = SpriteIdAllocator::new();
        let a = alloc.allocate();
        let b = alloc.allocate();
        let c = alloc.allocate();
        assert_eq!(a.id(), 1);
        assert_eq!(b.id(), 2);
        assert_eq!(c.id(), 3);
        assert_eq!(alloc.count(), 3);
    }

    #[test]
    fn test_id_serialization_roundtrip() {
        let id = SpriteId::from_raw(999);
        let text = serde_json::to_string(&id).unwrap();
        let restored: SpriteId = serde_json::from_str(&text).unwrap();
        assert_eq!(id, restored);
    }
}
