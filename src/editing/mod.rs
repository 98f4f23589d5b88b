// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod dialogs;
pub mod keyboard;
pub mod mouse;
pub mod selection;
pub mod session;
pub mod undo;

pub use dialogs::DialogProvider;
pub use hit_test::{GlyphHitTester, HitItem, HitTester};
pub use keyboard::{Key, KeyEvent};
pub use mouse::{Drag, Modifiers, Mouse, MouseButton, MouseDelegate, MouseEvent};
pub use selection::Selection;
pub use session::{EditSession, Notification};
pub use undo::UndoState;
