// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Entity model: glyphs, anchors, components, and their identifiers

pub mod entity_id;
pub mod glyph;

pub use entity_id::EntityId;
pub use glyph::{Anchor, Component, ConvertError, Glyph};
