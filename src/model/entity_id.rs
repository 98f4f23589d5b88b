// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for contours, points, anchors, and components.
//!
//! Each `EntityId` is a monotonically increasing `u64` generated from a
//! global atomic counter. IDs are the keys stored in `Selection` sets and
//! the currency of hit testing: a click resolves to an id, and the id is
//! later resolved back to an entity through the glyph. IDs are never
//! reused within a process, so a deleted point leaves no dangling
//! references behind.

use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for an entity (contour, point, anchor, component)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

static ENTITY_COUNTER: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    /// Create a new unique entity ID
    pub fn next() -> Self {
        Self(ENTITY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::next()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = EntityId::next();
        let b = EntityId::next();
        let c = EntityId::default();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(a < b && b < c);
    }
}
