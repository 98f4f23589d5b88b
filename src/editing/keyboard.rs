// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Host-agnostic keyboard event model.
//!
//! Only the keys the engine reacts to are represented; the host maps
//! its toolkit's key codes (and its platform's delete key) onto these
//! before forwarding. Everything else should bypass the engine.

use super::mouse::Modifiers;

/// Keys the editing engine responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// The platform delete key (Backspace on macOS, Delete elsewhere)
    Delete,
    /// `<` — select the previous point
    Less,
    /// `>` — select the next point
    Greater,
}

/// A key press with its active modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            mods: Modifiers::default(),
        }
    }

    pub fn with_modifiers(key: Key, mods: Modifiers) -> Self {
        Self { key, mods }
    }
}

impl Key {
    /// Unit step for an arrow key in design space (y increases upward)
    pub fn arrow_delta(self) -> Option<(f64, f64)> {
        match self {
            Key::ArrowLeft => Some((-1.0, 0.0)),
            Key::ArrowRight => Some((1.0, 0.0)),
            Key::ArrowUp => Some((0.0, 1.0)),
            Key::ArrowDown => Some((0.0, -1.0)),
            _ => None,
        }
    }
}
