// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph data model: owned value types wrapping `norad` UFO data.
//!
//! `Glyph` owns an ordered sequence of `Contour`s plus the glyph's
//! anchors and components. Hosting editors round-trip UFO glyphs into
//! this editable form via `Glyph::from_norad` / `Glyph::to_norad`; the
//! engine itself never touches the disk.

use crate::contour::{Contour, PathPoint, PointType};
use crate::model::EntityId;
use kurbo::{Affine, Point};

/// Error converting the editable model back to norad types
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid name {0:?}")]
    InvalidName(String),
}

/// A named position owned by the glyph (attachment point for marks)
#[derive(Debug, Clone)]
pub struct Anchor {
    /// Unique identifier for selection and hit testing
    pub id: EntityId,
    pub name: String,
    pub pos: Point,
}

impl Anchor {
    pub fn new(name: impl Into<String>, pos: Point) -> Self {
        Self {
            id: EntityId::next(),
            name: name.into(),
            pos,
        }
    }

    /// Move the anchor by a delta in design space
    pub fn translate(&mut self, delta: kurbo::Vec2) {
        self.pos += delta;
    }
}

/// A component reference to another glyph
///
/// Components let glyphs reuse other glyphs as building blocks (an
/// acute accent placed over an "e", dots over Arabic base letters).
#[derive(Debug, Clone)]
pub struct Component {
    /// Unique identifier for selection and hit testing
    pub id: EntityId,
    /// Name of the referenced glyph (the "base" glyph)
    pub base: String,
    /// Affine transformation applied to the component
    /// Default is identity: [1, 0, 0, 1, 0, 0]
    pub transform: Affine,
}

impl Component {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            id: EntityId::next(),
            base: base.into(),
            transform: Affine::IDENTITY,
        }
    }

    /// Translate the component by a delta
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = Affine::translate((dx, dy)) * self.transform;
    }

    /// The component's offset (the translation part of its transform),
    /// which doubles as its grab handle for hit testing
    pub fn offset(&self) -> Point {
        let coeffs = self.transform.as_coeffs();
        Point::new(coeffs[4], coeffs[5])
    }

    /// Create a component from norad's Component type
    pub fn from_norad(norad_comp: &norad::Component) -> Self {
        let t = &norad_comp.transform;
        let transform = Affine::new([
            t.x_scale, t.xy_scale, t.yx_scale, t.y_scale, t.x_offset, t.y_offset,
        ]);

        Self {
            id: EntityId::next(),
            base: norad_comp.base.to_string(),
            transform,
        }
    }

    /// Convert to norad's Component type for saving
    pub fn to_norad(&self) -> Result<norad::Component, ConvertError> {
        let coeffs = self.transform.as_coeffs();
        let transform = norad::AffineTransform {
            x_scale: coeffs[0],
            xy_scale: coeffs[1],
            yx_scale: coeffs[2],
            y_scale: coeffs[3],
            x_offset: coeffs[4],
            y_offset: coeffs[5],
        };

        let base = norad::Name::new(&self.base)
            .map_err(|_| ConvertError::InvalidName(self.base.clone()))?;
        Ok(norad::Component::new(base, transform, None, None))
    }
}

/// A glyph: contours, anchors, and components
#[derive(Debug, Clone)]
pub struct Glyph {
    pub name: String,
    pub width: f64,
    pub codepoints: Vec<char>,
    /// Ordered outline sections
    pub contours: Vec<Contour>,
    pub anchors: Vec<Anchor>,
    pub components: Vec<Component>,
}

impl Glyph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: 0.0,
            codepoints: Vec::new(),
            contours: Vec::new(),
            anchors: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Find a contour by id
    pub fn contour(&self, id: EntityId) -> Option<&Contour> {
        self.contours.iter().find(|c| c.id == id)
    }

    /// Find a contour by id, mutably
    pub fn contour_mut(&mut self, id: EntityId) -> Option<&mut Contour> {
        self.contours.iter_mut().find(|c| c.id == id)
    }

    /// Resolve a point id to the point, searching every contour
    pub fn point(&self, id: EntityId) -> Option<&PathPoint> {
        self.contours.iter().find_map(|c| c.point(id))
    }

    /// Resolve a point id to its owning contour
    pub fn contour_of_point(&self, id: EntityId) -> Option<&Contour> {
        self.contours.iter().find(|c| c.point(id).is_some())
    }

    /// Find an anchor by id
    pub fn anchor(&self, id: EntityId) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.id == id)
    }

    /// Find a component by id
    pub fn component(&self, id: EntityId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    // ===== norad conversion =====

    /// Convert a norad glyph into the editable model
    pub fn from_norad(norad_glyph: &norad::Glyph) -> Self {
        let contours = norad_glyph.contours.iter().map(convert_contour).collect();

        let anchors = norad_glyph
            .anchors
            .iter()
            .map(|a| {
                let name = a.name.as_ref().map(|n| n.to_string()).unwrap_or_default();
                Anchor::new(name, Point::new(a.x, a.y))
            })
            .collect();

        let components = norad_glyph
            .components
            .iter()
            .map(Component::from_norad)
            .collect();

        Self {
            name: norad_glyph.name().to_string(),
            width: norad_glyph.width,
            codepoints: norad_glyph.codepoints.iter().collect(),
            contours,
            anchors,
            components,
        }
    }

    /// Convert the editable model back to a norad glyph for saving
    pub fn to_norad(&self) -> Result<norad::Glyph, ConvertError> {
        let mut norad_glyph = norad::Glyph::new(&self.name);
        norad_glyph.width = self.width;

        for &cp in &self.codepoints {
            norad_glyph.codepoints.insert(cp);
        }

        norad_glyph.contours = self
            .contours
            .iter()
            .filter(|c| !c.is_empty())
            .map(to_norad_contour)
            .collect();

        for anchor in &self.anchors {
            let name = norad::Name::new(&anchor.name)
                .map_err(|_| ConvertError::InvalidName(anchor.name.clone()))?;
            norad_glyph.anchors.push(norad::Anchor::new(
                anchor.pos.x,
                anchor.pos.y,
                Some(name),
                None,
                None,
                None,
            ));
        }

        norad_glyph.components = self
            .components
            .iter()
            .map(Component::to_norad)
            .collect::<Result<_, _>>()?;

        Ok(norad_glyph)
    }
}

/// Convert a norad contour to the editable representation
fn convert_contour(norad_contour: &norad::Contour) -> Contour {
    let points = norad_contour
        .points
        .iter()
        .map(|pt| {
            let pos = Point::new(pt.x, pt.y);
            let typ = match pt.typ {
                norad::PointType::OffCurve => PointType::OffCurve,
                _ => PointType::OnCurve { smooth: pt.smooth },
            };
            PathPoint {
                id: EntityId::next(),
                point: pos,
                typ,
            }
        })
        .collect();

    // UFO open contours start with a Move point
    let closed = !matches!(
        norad_contour.points.first().map(|p| &p.typ),
        Some(&norad::PointType::Move)
    );

    Contour::new(points, closed)
}

/// Convert an editable contour back to norad
fn to_norad_contour(contour: &Contour) -> norad::Contour {
    let points = contour.points();
    let norad_points = points
        .iter()
        .enumerate()
        .map(|(idx, pt)| {
            let typ = match pt.typ {
                PointType::OffCurve => norad::PointType::OffCurve,
                PointType::OnCurve { .. } => norad_on_curve_type(contour, points, idx),
            };
            let smooth = pt.is_smooth();
            norad::ContourPoint::new(pt.point.x, pt.point.y, typ, smooth, None, None, None)
        })
        .collect();

    norad::Contour::new(norad_points, None, None)
}

/// The UFO segment type of an on-curve point is determined by how many
/// handles precede it: none makes it a line (or the move point opening
/// an open contour), one a quadratic, two a cubic curve point.
fn norad_on_curve_type(contour: &Contour, points: &[PathPoint], idx: usize) -> norad::PointType {
    if !contour.closed() && idx == 0 {
        return norad::PointType::Move;
    }
    let mut handles = 0;
    let len = points.len();
    let mut cursor = idx;
    loop {
        cursor = if cursor == 0 { len - 1 } else { cursor - 1 };
        if cursor == idx || points[cursor].is_on_curve() {
            break;
        }
        handles += 1;
    }
    match handles {
        0 => norad::PointType::Line,
        1 => norad::PointType::QCurve,
        _ => norad::PointType::Curve,
    }
}
