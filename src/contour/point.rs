// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! On-curve and off-curve points.

use crate::model::EntityId;
use kurbo::{Point, Vec2};

/// A single point in a contour
///
/// On-curve points lie on the rendered outline; off-curve points are
/// bezier control handles. Position is in design space (y-up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    /// Unique identifier, used as the selection/hit-testing key
    pub id: EntityId,
    /// Position in design space
    pub point: Point,
    /// On-curve (with smooth flag) or off-curve
    pub typ: PointType,
}

/// Classification of a path point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointType {
    /// A point on the outline. `smooth` means the tangent is continuous
    /// through this point, constraining its two handles to stay
    /// collinear.
    OnCurve { smooth: bool },
    /// A bezier control handle
    OffCurve,
}

impl PointType {
    pub fn is_on_curve(self) -> bool {
        matches!(self, PointType::OnCurve { .. })
    }

    pub fn is_smooth(self) -> bool {
        matches!(self, PointType::OnCurve { smooth: true })
    }
}

impl PathPoint {
    /// Create a new on-curve corner point
    pub fn on_curve(point: Point) -> Self {
        Self {
            id: EntityId::next(),
            point,
            typ: PointType::OnCurve { smooth: false },
        }
    }

    /// Create a new off-curve control point
    pub fn off_curve(point: Point) -> Self {
        Self {
            id: EntityId::next(),
            point,
            typ: PointType::OffCurve,
        }
    }

    pub fn is_on_curve(&self) -> bool {
        self.typ.is_on_curve()
    }

    pub fn is_off_curve(&self) -> bool {
        !self.typ.is_on_curve()
    }

    pub fn is_smooth(&self) -> bool {
        self.typ.is_smooth()
    }

    /// Flip smooth <-> corner. Off-curve points are unaffected.
    pub fn toggle_smooth(&mut self) {
        if let PointType::OnCurve { smooth } = self.typ {
            self.typ = PointType::OnCurve { smooth: !smooth };
        }
    }

    /// Move this point by a delta in design space
    pub fn translate(&mut self, delta: Vec2) {
        self.point += delta;
    }
}
