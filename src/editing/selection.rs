// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Immutable selection set for tracking which entities are selected.
//!
//! `Selection` wraps an `Arc<BTreeSet<EntityId>>` so it can be cheaply
//! cloned for gesture-start snapshots and undo records. Mutations go
//! through `Arc::make_mut` (copy-on-write). The `BTreeSet` gives
//! deterministic iteration order, which matters for multi-point
//! operations like nudging.

use crate::model::EntityId;
use std::collections::BTreeSet;
use std::sync::Arc;

/// A set of selected entities (points, anchors, or components)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    inner: Arc<BTreeSet<EntityId>>,
}

impl Selection {
    /// Create a new empty selection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.inner.contains(id)
    }

    /// Iterate over selected entities in id order
    pub fn iter(&self) -> impl Iterator<Item = &EntityId> {
        self.inner.iter()
    }

    /// Add an entity to the selection
    pub fn insert(&mut self, id: EntityId) {
        Arc::make_mut(&mut self.inner).insert(id);
    }

    /// Remove an entity from the selection
    pub fn remove(&mut self, id: &EntityId) {
        Arc::make_mut(&mut self.inner).remove(id);
    }

    /// Remove everything
    pub fn clear(&mut self) {
        if !self.inner.is_empty() {
            self.inner = Arc::new(BTreeSet::new());
        }
    }

    /// Keep only the entities for which `keep` returns true
    pub fn retain(&mut self, keep: impl FnMut(&EntityId) -> bool) {
        Arc::make_mut(&mut self.inner).retain(keep);
    }

    /// The set of entities in exactly one of `self` and `other`.
    ///
    /// This is the additive rubber-band rule: candidates toggle the
    /// state they had in the gesture-start snapshot.
    pub fn symmetric_difference(&self, other: &Selection) -> Selection {
        self.inner
            .symmetric_difference(&other.inner)
            .copied()
            .collect()
    }
}

impl FromIterator<EntityId> for Selection {
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        Self {
            inner: Arc::new(iter.into_iter().collect()),
        }
    }
}

impl Extend<EntityId> for Selection {
    fn extend<I: IntoIterator<Item = EntityId>>(&mut self, iter: I) {
        Arc::make_mut(&mut self.inner).extend(iter);
    }
}
