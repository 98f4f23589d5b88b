// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Dialog collaborators for anchor and component creation.
//!
//! Dialogs are modeled as blocking request/response calls so the engine
//! stays agnostic of whatever UI mechanism shows them: the call returns
//! `Some(value)` on confirmation and `None` on cancellation, and a
//! cancelled dialog must leave the glyph unmutated.

use crate::model::Glyph;
use kurbo::Point;

/// Synchronous pickers supplied by the host window
pub trait DialogProvider {
    /// Ask the user to name a new anchor at `pos`. `None` = cancelled.
    fn request_anchor_name(&mut self, pos: Point) -> Option<String>;

    /// Ask the user to pick a base glyph for a new component in
    /// `glyph`. `None` = cancelled.
    fn request_component_glyph(&mut self, glyph: &Glyph) -> Option<String>;
}
