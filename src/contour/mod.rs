// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Contours: ordered point sequences forming one section of an outline.
//!
//! A `Contour` owns its points in path order; a point's index is stable
//! until a structural mutation (insertion or removal) occurs. All
//! operations that remove points collect indices first and splice in
//! descending order, so removal can never read a stale index. The
//! `dirty` flag records that geometry changed since the host last
//! normalized the outline.

pub mod point;

pub use point::{PathPoint, PointType};

use crate::editing::selection::Selection;
use crate::model::EntityId;
use kurbo::Vec2;

/// An ordered sequence of points, open or closed
#[derive(Debug, Clone)]
pub struct Contour {
    /// Unique identifier, used to address selection-changed notifications
    pub id: EntityId,
    points: Vec<PathPoint>,
    closed: bool,
    /// Geometry changed since the last normalization pass
    pub dirty: bool,
}

impl Contour {
    pub fn new(points: Vec<PathPoint>, closed: bool) -> Self {
        Self {
            id: EntityId::next(),
            points,
            closed,
            dirty: false,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// Find a point by id
    pub fn point(&self, id: EntityId) -> Option<&PathPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Ordinal index of a point within this contour
    pub fn idx_of(&self, id: EntityId) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }

    /// The id of the point `offset` steps away from `id` in path order,
    /// wrapping around at both ends of the sequence.
    pub fn point_after(&self, id: EntityId, offset: isize) -> Option<EntityId> {
        let idx = self.idx_of(id)? as isize;
        let len = self.points.len() as isize;
        let new_idx = (idx + offset).rem_euclid(len) as usize;
        Some(self.points[new_idx].id)
    }

    /// Iterate the points of this contour that are in `selection`
    pub fn selected<'a>(
        &'a self,
        selection: &'a Selection,
    ) -> impl Iterator<Item = &'a PathPoint> {
        self.points.iter().filter(|p| selection.contains(&p.id))
    }

    /// Number of this contour's points that are in `selection`
    pub fn selected_count(&self, selection: &Selection) -> usize {
        self.selected(selection).count()
    }

    /// Flip the smooth flag of an on-curve point.
    ///
    /// Returns false when the point is off-curve or not in this contour
    /// (nothing toggled).
    pub fn toggle_smooth(&mut self, id: EntityId) -> bool {
        let Some(idx) = self.idx_of(id) else {
            return false;
        };
        if self.points[idx].is_off_curve() {
            return false;
        }
        self.points[idx].toggle_smooth();
        self.dirty = true;
        true
    }

    // ===== Index helpers =====

    /// Previous neighbor for segment-structure purposes: wraps only on
    /// closed contours.
    fn neighbor_prev(&self, idx: usize) -> Option<usize> {
        if idx == 0 {
            if self.closed {
                Some(self.points.len() - 1)
            } else {
                None
            }
        } else {
            Some(idx - 1)
        }
    }

    /// Next neighbor for segment-structure purposes: wraps only on
    /// closed contours.
    fn neighbor_next(&self, idx: usize) -> Option<usize> {
        if idx + 1 == self.points.len() {
            if self.closed { Some(0) } else { None }
        } else {
            Some(idx + 1)
        }
    }

    /// For an off-curve point, find its adjacent smooth on-curve point
    /// and the handle on the far side of it, when both exist.
    fn tangent_pair(&self, idx: usize) -> Option<(usize, usize)> {
        if let Some(next) = self.neighbor_next(idx)
            && self.points[next].is_smooth()
            && let Some(next2) = self.neighbor_next(next)
            && next2 != idx
            && self.points[next2].is_off_curve()
        {
            return Some((next, next2));
        }
        if let Some(prev) = self.neighbor_prev(idx)
            && self.points[prev].is_smooth()
            && let Some(prev2) = self.neighbor_prev(prev)
            && prev2 != idx
            && self.points[prev2].is_off_curve()
        {
            return Some((prev, prev2));
        }
        None
    }

    // ===== Selection movement =====

    /// Move this contour's selected points by a delta.
    ///
    /// Selected on-curve points carry their attached off-curve handles
    /// with them so the segment shape travels along. When a handle
    /// adjacent to a smooth on-curve point moves and its partner
    /// doesn't, the partner is rotated to keep the pair collinear.
    ///
    /// Returns true when at least one point moved.
    pub fn move_selected(&mut self, selection: &Selection, delta: Vec2) -> bool {
        let len = self.points.len();
        let mut to_move = vec![false; len];

        for idx in 0..len {
            if !selection.contains(&self.points[idx].id) {
                continue;
            }
            to_move[idx] = true;
            if self.points[idx].is_on_curve() {
                if let Some(prev) = self.neighbor_prev(idx)
                    && self.points[prev].is_off_curve()
                {
                    to_move[prev] = true;
                }
                if let Some(next) = self.neighbor_next(idx)
                    && self.points[next].is_off_curve()
                {
                    to_move[next] = true;
                }
            }
        }

        if !to_move.iter().any(|m| *m) {
            return false;
        }

        for (idx, moved) in to_move.iter().enumerate() {
            if *moved {
                self.points[idx].translate(delta);
            }
        }

        self.enforce_smooth_constraints(&to_move);
        self.dirty = true;
        true
    }

    /// Rotate the un-moved partner of each moved tangent handle so the
    /// pair stays collinear through its smooth on-curve point.
    fn enforce_smooth_constraints(&mut self, moved: &[bool]) {
        for idx in 0..self.points.len() {
            if !moved[idx] || !self.points[idx].is_off_curve() {
                continue;
            }
            let Some((oncurve, opposite)) = self.tangent_pair(idx) else {
                continue;
            };
            if moved[oncurve] || moved[opposite] {
                continue;
            }
            let anchor = self.points[oncurve].point;
            let handle = self.points[idx].point - anchor;
            if handle.hypot() == 0.0 {
                continue;
            }
            let opposite_len = (self.points[opposite].point - anchor).hypot();
            self.points[opposite].point = anchor - handle.normalize() * opposite_len;
        }
    }

    // ===== Removal =====

    /// Remove every point of this contour that is in `selection`.
    ///
    /// Indices are collected up front and spliced out in descending
    /// order, so the removal of one point cannot shift the index of
    /// another still waiting to be removed. Afterwards the point run
    /// structure is repaired; `preserve_shape` controls whether the
    /// handles surrounding a removed on-curve point survive as the
    /// joined segment's handles or the join collapses to a line.
    ///
    /// Returns the number of selected points removed.
    pub fn remove_selected(&mut self, selection: &Selection, preserve_shape: bool) -> usize {
        let doomed: Vec<usize> = self
            .points
            .iter()
            .enumerate()
            .filter(|(_, p)| selection.contains(&p.id))
            .map(|(idx, _)| idx)
            .collect();
        if doomed.is_empty() {
            return 0;
        }

        tracing::debug!(
            "removing {} of {} points from contour {}",
            doomed.len(),
            self.points.len(),
            self.id
        );

        for &idx in doomed.iter().rev() {
            self.points.remove(idx);
        }
        self.repair_runs(preserve_shape);
        self.dirty = true;
        doomed.len()
    }

    /// Re-establish well-formed segments after points were removed: a
    /// cubic segment carries exactly two handles, so any other run
    /// length between on-curve points must be reduced.
    fn repair_runs(&mut self, preserve_shape: bool) {
        // a contour with no on-curve points left collapses entirely
        if !self.points.iter().any(|p| p.is_on_curve()) {
            self.points.clear();
            return;
        }

        // open contours must start and end on-curve
        if !self.closed {
            while self.points.first().is_some_and(|p| p.is_off_curve()) {
                self.points.remove(0);
            }
            while self.points.last().is_some_and(|p| p.is_off_curve()) {
                self.points.pop();
            }
        }

        let mut out: Vec<PathPoint> = Vec::with_capacity(self.points.len());
        let mut run: Vec<PathPoint> = Vec::new();
        for pt in self.points.drain(..) {
            if pt.is_off_curve() {
                run.push(pt);
            } else {
                flush_handle_run(&mut out, &mut run, preserve_shape);
                out.push(pt);
            }
        }
        // trailing run: the wrap-around segment of a closed contour
        flush_handle_run(&mut out, &mut run, preserve_shape);
        self.points = out;
    }
}

/// Append a run of consecutive handles to `out`, reduced to a valid
/// segment: a pair passes through; a lone handle is dropped (it cannot
/// form a cubic); a longer run keeps its outermost pair when
/// `preserve_shape`, and drops to a line join otherwise.
fn flush_handle_run(out: &mut Vec<PathPoint>, run: &mut Vec<PathPoint>, preserve_shape: bool) {
    match run.len() {
        0 => {}
        2 => out.append(run),
        1 => run.clear(),
        _ => {
            if preserve_shape {
                out.push(run[0]);
                out.push(run[run.len() - 1]);
            }
            run.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    /// A closed square with a curved top edge:
    /// on(0,0) on(100,0) on(100,100) off(60,140) off(40,140) on(0,100)
    fn curved_square() -> Contour {
        Contour::new(
            vec![
                PathPoint::on_curve(Point::new(0.0, 0.0)),
                PathPoint::on_curve(Point::new(100.0, 0.0)),
                PathPoint::on_curve(Point::new(100.0, 100.0)),
                PathPoint::off_curve(Point::new(60.0, 140.0)),
                PathPoint::off_curve(Point::new(40.0, 140.0)),
                PathPoint::on_curve(Point::new(0.0, 100.0)),
            ],
            true,
        )
    }

    fn select(ids: &[EntityId]) -> Selection {
        ids.iter().copied().collect()
    }

    #[test]
    fn point_after_wraps_both_directions() {
        let contour = curved_square();
        let first = contour.points()[0].id;
        let last = contour.points()[5].id;
        assert_eq!(contour.point_after(first, -1), Some(last));
        assert_eq!(contour.point_after(last, 1), Some(first));
        assert_eq!(contour.point_after(first, 1), Some(contour.points()[1].id));
    }

    #[test]
    fn move_selected_carries_handles() {
        let mut contour = curved_square();
        let corner = contour.points()[2].id; // on-curve with a trailing handle
        let moved = contour.move_selected(&select(&[corner]), Vec2::new(5.0, 5.0));
        assert!(moved);
        assert!(contour.dirty);
        assert_eq!(contour.points()[2].point, Point::new(105.0, 105.0));
        // the attached handle travelled along
        assert_eq!(contour.points()[3].point, Point::new(65.0, 145.0));
        // the far handle did not
        assert_eq!(contour.points()[4].point, Point::new(40.0, 140.0));
    }

    #[test]
    fn move_selected_without_selection_is_noop() {
        let mut contour = curved_square();
        let moved = contour.move_selected(&Selection::new(), Vec2::new(5.0, 5.0));
        assert!(!moved);
        assert!(!contour.dirty);
    }

    #[test]
    fn smooth_partner_stays_collinear() {
        // on(0,0) off(10,0) off(30,0) smooth(40,0) off(50,0) off(70,0) on(80,0)
        // dragging the handle at index 4 must rotate index 2 around the
        // smooth point to stay collinear
        let mut smooth_pt = PathPoint::on_curve(Point::new(40.0, 0.0));
        smooth_pt.toggle_smooth();
        let mut contour = Contour::new(
            vec![
                PathPoint::on_curve(Point::new(0.0, 0.0)),
                PathPoint::off_curve(Point::new(10.0, 0.0)),
                PathPoint::off_curve(Point::new(30.0, 0.0)),
                smooth_pt,
                PathPoint::off_curve(Point::new(50.0, 0.0)),
                PathPoint::off_curve(Point::new(70.0, 0.0)),
                PathPoint::on_curve(Point::new(80.0, 0.0)),
            ],
            false,
        );
        let dragged = contour.points()[4].id;
        contour.move_selected(&select(&[dragged]), Vec2::new(0.0, 10.0));

        let anchor = contour.points()[3].point;
        let a = contour.points()[4].point - anchor;
        let b = contour.points()[2].point - anchor;
        // opposite directions, same line
        let cross = a.x * b.y - a.y * b.x;
        assert!(cross.abs() < 1e-9, "handles not collinear: cross = {cross}");
        assert!(a.dot(b) < 0.0, "handles on the same side of the anchor");
        // partner keeps its length
        assert!((b.hypot() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn remove_selected_splices_descending() {
        let mut contour = curved_square();
        let ids = [contour.points()[1].id, contour.points()[5].id];
        let removed = contour.remove_selected(&select(&ids), true);
        assert_eq!(removed, 2);
        assert_eq!(contour.len(), 4);
        assert!(contour.point(ids[0]).is_none());
        assert!(contour.point(ids[1]).is_none());
        assert!(contour.dirty);
    }

    #[test]
    fn removing_curve_anchor_preserving_shape_keeps_outer_handles() {
        // two consecutive curve segments sharing an on-curve point:
        // on off off ON off off on — deleting ON leaves 4 handles in a
        // run; preserve_shape keeps the outermost two
        let mut contour = Contour::new(
            vec![
                PathPoint::on_curve(Point::new(0.0, 0.0)),
                PathPoint::off_curve(Point::new(10.0, 10.0)),
                PathPoint::off_curve(Point::new(20.0, 10.0)),
                PathPoint::on_curve(Point::new(30.0, 0.0)),
                PathPoint::off_curve(Point::new(40.0, -10.0)),
                PathPoint::off_curve(Point::new(50.0, -10.0)),
                PathPoint::on_curve(Point::new(60.0, 0.0)),
            ],
            false,
        );
        let shared = contour.points()[3].id;
        let outer_a = contour.points()[1].id;
        let outer_b = contour.points()[5].id;
        contour.remove_selected(&select(&[shared]), true);

        assert_eq!(contour.len(), 4);
        assert_eq!(contour.points()[1].id, outer_a);
        assert_eq!(contour.points()[2].id, outer_b);
    }

    #[test]
    fn removing_curve_anchor_hard_drops_the_run() {
        let mut contour = Contour::new(
            vec![
                PathPoint::on_curve(Point::new(0.0, 0.0)),
                PathPoint::off_curve(Point::new(10.0, 10.0)),
                PathPoint::off_curve(Point::new(20.0, 10.0)),
                PathPoint::on_curve(Point::new(30.0, 0.0)),
                PathPoint::off_curve(Point::new(40.0, -10.0)),
                PathPoint::off_curve(Point::new(50.0, -10.0)),
                PathPoint::on_curve(Point::new(60.0, 0.0)),
            ],
            false,
        );
        let shared = contour.points()[3].id;
        contour.remove_selected(&select(&[shared]), false);

        // the join collapsed to a line
        assert_eq!(contour.len(), 2);
        assert!(contour.points().iter().all(|p| p.is_on_curve()));
    }

    #[test]
    fn removing_one_handle_drops_its_partner() {
        let mut contour = curved_square();
        let handle = contour.points()[3].id;
        contour.remove_selected(&select(&[handle]), true);
        // the orphaned partner cannot form a cubic on its own
        assert_eq!(contour.len(), 4);
        assert!(contour.points().iter().all(|p| p.is_on_curve()));
    }

    #[test]
    fn contour_with_no_on_curve_points_collapses() {
        let mut contour = curved_square();
        let on_curve_ids: Vec<_> = contour
            .points()
            .iter()
            .filter(|p| p.is_on_curve())
            .map(|p| p.id)
            .collect();
        contour.remove_selected(&select(&on_curve_ids), true);
        assert!(contour.is_empty());
    }

    #[test]
    fn toggle_smooth_rejects_off_curve() {
        let mut contour = curved_square();
        let on_id = contour.points()[0].id;
        let off_id = contour.points()[3].id;
        assert!(contour.toggle_smooth(on_id));
        assert!(contour.points()[0].is_smooth());
        assert!(!contour.toggle_smooth(off_id));
    }
}
