// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool layer for glyph editing.
//!
//! A tool receives semantic mouse callbacks from the `Mouse` state
//! machine and key events from the host, and acts on an `EditCtx`: the
//! edit session paired with the canvas's hit tester for the duration of
//! one event.

pub mod select;

pub use select::SelectTool;

use crate::editing::hit_test::HitTester;
use crate::editing::session::EditSession;

/// Everything a tool needs while handling one input event
pub struct EditCtx<'a> {
    pub session: &'a mut EditSession,
    pub hit: &'a dyn HitTester,
}
