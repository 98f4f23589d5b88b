// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Engine settings and configuration constants.
//!
//! These are non-visual tuning knobs; anything about how entities are
//! drawn (colors, on-screen point radii) belongs to the host canvas.

// ============================================================================
// NUDGE SETTINGS
// ============================================================================
/// Base nudge amount in design units (arrow key alone)
const NUDGE_BASE: f64 = 1.0;

/// Shift-arrow nudge amount in design units
const NUDGE_SHIFT: f64 = 10.0;

/// Shift+Ctrl-arrow nudge amount in design units
const NUDGE_SHIFT_CTRL: f64 = 100.0;

// ============================================================================
// HIT TESTING SETTINGS
// ============================================================================
/// Maximum distance (canvas units) between the pointer and an entity
/// for a click to count as a hit
const HIT_CLICK_RADIUS: f64 = 10.0;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Nudge amounts for arrow-key movement
pub mod nudge {
    /// Base nudge (arrow key alone)
    pub const BASE: f64 = super::NUDGE_BASE;

    /// Shift-arrow nudge
    pub const SHIFT: f64 = super::NUDGE_SHIFT;

    /// Shift+Ctrl-arrow nudge
    pub const SHIFT_CTRL: f64 = super::NUDGE_SHIFT_CTRL;
}

/// Hit-testing tolerances
pub mod hit {
    /// Click hit radius in canvas units
    pub const CLICK_RADIUS: f64 = super::HIT_CLICK_RADIUS;
}
