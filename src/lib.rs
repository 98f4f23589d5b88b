// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyphedit: the selection and point-manipulation engine of a glyph
//! outline editor.
//!
//! This crate owns the interaction logic a font editor's canvas defers
//! to: selecting points, anchors, and components (by click or rubber
//! band, with replace/add/toggle modifier rules), dragging them,
//! arrow-key nudging with modifier-scaled magnitudes, circular
//! point-to-point navigation, order-safe deletion, and the
//! one-checkpoint-per-gesture undo discipline.
//!
//! The host supplies the surroundings through traits and event
//! forwarding:
//!
//! - raw pointer events go through [`editing::Mouse`], which feeds a
//!   [`tools::SelectTool`] (a [`editing::MouseDelegate`]);
//! - the canvas answers spatial queries via [`editing::HitTester`];
//! - pickers for new anchors/components implement
//!   [`editing::DialogProvider`];
//! - after each event the host drains [`editing::Notification`]s from
//!   the [`editing::EditSession`] and repaints, including the tool's
//!   in-progress rubber-band rectangle when present.
//!
//! ```
//! use glyphedit::editing::{EditSession, GlyphHitTester, Mouse, MouseButton, MouseEvent};
//! use glyphedit::model::Glyph;
//! use glyphedit::tools::{EditCtx, SelectTool};
//! use kurbo::Point;
//!
//! let mut session = EditSession::new(Glyph::new("a"));
//! let mut tool = SelectTool::default();
//! let mut mouse = Mouse::new();
//!
//! // one forwarded press, hit-tested against the glyph geometry
//! let tester = GlyphHitTester::new(&session.glyph);
//! let mut ctx = EditCtx { session: &mut session, hit: &tester };
//! let event = MouseEvent::new(Point::new(120.0, 40.0), Some(MouseButton::Left));
//! mouse.mouse_down(event, &mut tool, &mut ctx);
//! ```

pub mod contour;
pub mod editing;
pub mod model;
pub mod settings;
pub mod tools;

pub use contour::{Contour, PathPoint, PointType};
pub use editing::{EditSession, Notification, Selection};
pub use model::{Anchor, Component, EntityId, Glyph};
pub use tools::SelectTool;
