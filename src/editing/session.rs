// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session: editing state for a single glyph.
//!
//! The session owns the glyph being edited, the three capability-scoped
//! selection sets (points, anchors, components), the undo checkpoint
//! recorder, and an outbox of notifications for the host canvas.
//!
//! Selection is deliberately split into three independent sets: the
//! aggregate "point selection" the rubber band assigns ignores anchors
//! and components, while clear-all and delete must cover all three.
//! Keeping the sets separate means no caller has to remember that
//! asymmetry — it is spelled out in each operation.

use crate::contour::Contour;
use crate::editing::keyboard::Key;
use crate::editing::mouse::Modifiers;
use crate::editing::selection::Selection;
use crate::editing::undo::UndoState;
use crate::model::{Anchor, Component, EntityId, Glyph};
use crate::settings;
use kurbo::{Point, Vec2};

/// Outbound messages for the host, drained after each input event
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// The selection membership of a contour changed
    SelectionChanged { contour: EntityId },
    /// Something visible changed; schedule a repaint
    Repaint,
    /// Open the edit context menu ("Add Anchor…", "Add Component…")
    ContextMenu { pos: Point },
}

/// Editing state for a single glyph
#[derive(Debug, Clone)]
pub struct EditSession {
    /// The glyph being edited
    pub glyph: Glyph,

    /// Selected points (the aggregate "point selection")
    pub selection: Selection,

    /// Selected anchors
    pub anchor_selection: Selection,

    /// Selected components
    pub component_selection: Selection,

    /// Undo checkpoint recorder
    pub undo: UndoState<Glyph>,

    notifications: Vec<Notification>,
}

impl EditSession {
    pub fn new(glyph: Glyph) -> Self {
        Self {
            glyph,
            selection: Selection::new(),
            anchor_selection: Selection::new(),
            component_selection: Selection::new(),
            undo: UndoState::new(),
            notifications: Vec::new(),
        }
    }

    // ===== Notifications =====

    /// Take the pending notifications, leaving the outbox empty
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn post(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Ask the host to repaint. Consecutive requests collapse into one.
    pub fn request_repaint(&mut self) {
        if self.notifications.last() != Some(&Notification::Repaint) {
            self.notifications.push(Notification::Repaint);
        }
    }

    fn notify_selection_changed(&mut self, contour: EntityId) {
        self.notifications
            .push(Notification::SelectionChanged { contour });
    }

    // ===== Undo =====

    /// Record an undo checkpoint covering everything until the next one
    pub fn prepare_undo(&mut self) {
        self.undo.prepare(&self.glyph);
    }

    // ===== Selection =====

    /// Clear point, anchor, and component selection alike.
    ///
    /// Posts one notification per contour that had selected points.
    pub fn clear_all_selections(&mut self) {
        let changed: Vec<EntityId> = self
            .glyph
            .contours
            .iter()
            .filter(|c| c.selected_count(&self.selection) > 0)
            .map(|c| c.id)
            .collect();

        self.selection.clear();
        self.anchor_selection.clear();
        self.component_selection.clear();

        for contour in changed {
            self.notify_selection_changed(contour);
        }
    }

    /// Assign the aggregate point selection.
    ///
    /// Skipped entirely when `new` is set-equal to the current
    /// selection, so an unchanged rubber band never churns
    /// notifications or repaints. Otherwise one notification is posted
    /// per contour whose membership changed.
    pub fn set_point_selection(&mut self, new: Selection) {
        if new == self.selection {
            return;
        }

        let changed: Vec<EntityId> = self
            .glyph
            .contours
            .iter()
            .filter(|c| {
                c.points()
                    .iter()
                    .any(|p| self.selection.contains(&p.id) != new.contains(&p.id))
            })
            .map(|c| c.id)
            .collect();

        self.selection = new;

        for contour in changed {
            self.notify_selection_changed(contour);
        }
        self.request_repaint();
    }

    /// Select one point and notify its contour
    pub fn select_point(&mut self, contour: EntityId, point: EntityId) {
        self.selection.insert(point);
        self.notify_selection_changed(contour);
    }

    pub fn select_anchor(&mut self, anchor: EntityId) {
        self.anchor_selection.insert(anchor);
    }

    pub fn select_component(&mut self, component: EntityId) {
        self.component_selection.insert(component);
    }

    // ===== Movement =====

    /// Move every selected anchor, point, and component by `delta`.
    ///
    /// Returns true when at least one entity moved; a repaint is
    /// requested in that case.
    pub fn move_selection(&mut self, delta: Vec2) -> bool {
        let mut moved = false;

        for anchor in &mut self.glyph.anchors {
            if self.anchor_selection.contains(&anchor.id) {
                anchor.translate(delta);
                moved = true;
            }
        }

        for contour in &mut self.glyph.contours {
            moved |= contour.move_selected(&self.selection, delta);
        }

        for component in &mut self.glyph.components {
            if self.component_selection.contains(&component.id) {
                component.translate(delta.x, delta.y);
                moved = true;
            }
        }

        if moved {
            self.request_repaint();
        }
        moved
    }

    /// Arrow-key movement: unit step scaled by the modifier set
    /// (×1 plain, ×10 with shift, ×100 with shift+ctrl).
    ///
    /// Returns false when nothing was selected, so the host can fall
    /// back to its default key handling.
    pub fn nudge_selection(&mut self, key: Key, mods: Modifiers) -> bool {
        let Some((dx, dy)) = key.arrow_delta() else {
            return false;
        };

        let amount = if mods.shift && mods.ctrl {
            settings::nudge::SHIFT_CTRL
        } else if mods.shift {
            settings::nudge::SHIFT
        } else {
            settings::nudge::BASE
        };

        self.move_selection(Vec2::new(dx * amount, dy * amount))
    }

    // ===== Deletion =====

    /// Delete every selected anchor, point, and component.
    ///
    /// Contours are traversed in reverse glyph order: point removal can
    /// splice a contour down to nothing, and reverse traversal keeps
    /// the indices of contours still awaiting processing stable.
    pub fn delete_selection(&mut self, preserve_shape: bool) {
        self.glyph
            .anchors
            .retain(|a| !self.anchor_selection.contains(&a.id));

        let mut touched_contours = Vec::new();
        for contour in self.glyph.contours.iter_mut().rev() {
            if contour.remove_selected(&self.selection, preserve_shape) > 0 {
                touched_contours.push(contour.id);
            }
        }

        self.glyph
            .components
            .retain(|c| !self.component_selection.contains(&c.id));

        tracing::info!(
            "deleted selection ({} contours touched, preserve_shape: {})",
            touched_contours.len(),
            preserve_shape
        );

        self.selection.clear();
        self.anchor_selection.clear();
        self.component_selection.clear();

        for contour in touched_contours {
            self.notify_selection_changed(contour);
        }
        self.request_repaint();
    }

    // ===== Point navigation =====

    /// The single selected point, when the glyph-wide point selection
    /// contains exactly one.
    ///
    /// Returns `(point, contour)`. Fails — returns `None` — as soon as
    /// any contour has more than one selected point, or when more than
    /// one contour has a selected point.
    pub fn selected_candidate_point(&self) -> Option<(EntityId, EntityId)> {
        let mut candidate = None;
        for contour in &self.glyph.contours {
            match contour.selected_count(&self.selection) {
                0 => continue,
                1 => {
                    if candidate.is_some() {
                        return None;
                    }
                    let point = contour.selected(&self.selection).next().unwrap().id;
                    candidate = Some((point, contour.id));
                }
                _ => return None,
            }
        }
        candidate
    }

    /// Move the point selection to the neighbor of the unique selected
    /// point (`offset` is +1 for next, -1 for previous, wrapping at the
    /// contour ends).
    ///
    /// A no-op returning false unless exactly one point is selected.
    /// Posts exactly one selection-changed notification on success.
    pub fn select_adjacent_point(&mut self, offset: isize) -> bool {
        let Some((point, contour_id)) = self.selected_candidate_point() else {
            return false;
        };
        let Some(contour) = self.glyph.contour(contour_id) else {
            return false;
        };
        let Some(next) = contour.point_after(point, offset) else {
            return false;
        };

        self.selection.remove(&point);
        self.selection.insert(next);
        self.notify_selection_changed(contour_id);
        self.request_repaint();
        true
    }

    // ===== Structure =====

    /// Append a new anchor (a confirmed "Add Anchor…" dialog).
    /// Takes its own undo checkpoint.
    pub fn append_anchor(&mut self, name: String, pos: Point) {
        self.prepare_undo();
        tracing::info!("adding anchor {name:?} at {pos:?}");
        self.glyph.anchors.push(Anchor::new(name, pos));
        self.request_repaint();
    }

    /// Append a new component (a confirmed "Add Component…" dialog).
    /// Takes its own undo checkpoint.
    pub fn append_component(&mut self, base: String) {
        self.prepare_undo();
        tracing::info!("adding component referencing {base:?}");
        self.glyph.components.push(Component::new(base));
        self.request_repaint();
    }

    /// Convenience access to a contour by id
    pub fn contour_mut(&mut self, id: EntityId) -> Option<&mut Contour> {
        self.glyph.contour_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::PathPoint;

    /// Three open contours of three on-curve points each
    fn three_contour_session() -> EditSession {
        let mut glyph = Glyph::new("test");
        for c in 0..3 {
            let y = c as f64 * 100.0;
            glyph.contours.push(Contour::new(
                vec![
                    PathPoint::on_curve(Point::new(0.0, y)),
                    PathPoint::on_curve(Point::new(50.0, y)),
                    PathPoint::on_curve(Point::new(100.0, y)),
                ],
                false,
            ));
        }
        glyph.anchors.push(Anchor::new("top", Point::new(50.0, 300.0)));
        glyph.components.push(Component::new("acute"));
        EditSession::new(glyph)
    }

    fn selection_changes(session: &mut EditSession) -> usize {
        session
            .drain_notifications()
            .iter()
            .filter(|n| matches!(n, Notification::SelectionChanged { .. }))
            .count()
    }

    #[test]
    fn set_equal_selection_posts_nothing() {
        let mut session = three_contour_session();
        let id = session.glyph.contours[0].points()[0].id;

        let sel: Selection = [id].into_iter().collect();
        session.set_point_selection(sel.clone());
        assert_eq!(selection_changes(&mut session), 1);

        // assigning the identical set again must not notify or repaint
        session.set_point_selection(sel);
        assert!(session.drain_notifications().is_empty());
    }

    #[test]
    fn assignment_notifies_each_changed_contour_once() {
        let mut session = three_contour_session();
        let a = session.glyph.contours[0].points()[0].id;
        let b = session.glyph.contours[0].points()[1].id;
        let c = session.glyph.contours[2].points()[0].id;

        session.set_point_selection([a, b, c].into_iter().collect());
        // two points in contour 0, one in contour 2: one notification
        // each
        assert_eq!(selection_changes(&mut session), 2);
    }

    #[test]
    fn clear_all_selections_covers_every_set() {
        let mut session = three_contour_session();
        let point = session.glyph.contours[1].points()[1].id;
        let anchor = session.glyph.anchors[0].id;
        let component = session.glyph.components[0].id;

        session.selection.insert(point);
        session.select_anchor(anchor);
        session.select_component(component);

        session.clear_all_selections();
        assert!(session.selection.is_empty());
        assert!(session.anchor_selection.is_empty());
        assert!(session.component_selection.is_empty());
    }

    #[test]
    fn nudge_scaling_follows_modifiers() {
        let mut session = three_contour_session();
        let id = session.glyph.contours[0].points()[0].id;
        session.selection.insert(id);

        let pos = |session: &EditSession| session.glyph.point(id).unwrap().point;
        let start = pos(&session);

        assert!(session.nudge_selection(Key::ArrowRight, Modifiers::default()));
        assert_eq!(pos(&session), start + Vec2::new(1.0, 0.0));

        let shift = Modifiers {
            shift: true,
            ..Default::default()
        };
        assert!(session.nudge_selection(Key::ArrowRight, shift));
        assert_eq!(pos(&session), start + Vec2::new(11.0, 0.0));

        let shift_ctrl = Modifiers {
            shift: true,
            ctrl: true,
            ..Default::default()
        };
        assert!(session.nudge_selection(Key::ArrowRight, shift_ctrl));
        assert_eq!(pos(&session), start + Vec2::new(111.0, 0.0));
    }

    #[test]
    fn nudge_with_empty_selection_is_unhandled() {
        let mut session = three_contour_session();
        assert!(!session.nudge_selection(Key::ArrowUp, Modifiers::default()));
    }

    #[test]
    fn nudge_moves_anchors_and_components_too() {
        let mut session = three_contour_session();
        let anchor = session.glyph.anchors[0].id;
        let component = session.glyph.components[0].id;
        session.select_anchor(anchor);
        session.select_component(component);

        assert!(session.nudge_selection(Key::ArrowUp, Modifiers::default()));
        assert_eq!(session.glyph.anchors[0].pos, Point::new(50.0, 301.0));
        assert_eq!(session.glyph.components[0].offset(), Point::new(0.0, 1.0));
    }

    #[test]
    fn deletion_across_contours_is_index_safe() {
        let mut session = three_contour_session();
        // one selected point in contour 0 and one in contour 2
        let first = session.glyph.contours[0].points()[1].id;
        let third = session.glyph.contours[2].points()[2].id;
        session.selection.insert(first);
        session.selection.insert(third);

        session.delete_selection(true);

        assert_eq!(session.glyph.contours[0].len(), 2);
        assert_eq!(session.glyph.contours[1].len(), 3);
        assert_eq!(session.glyph.contours[2].len(), 2);
        assert!(session.glyph.point(first).is_none());
        assert!(session.glyph.point(third).is_none());
        // the survivors are the right ones
        assert_eq!(
            session.glyph.contours[2].points()[1].point,
            Point::new(50.0, 200.0)
        );
        assert!(session.selection.is_empty());
    }

    #[test]
    fn deletion_removes_selected_anchors_and_components() {
        let mut session = three_contour_session();
        session.select_anchor(session.glyph.anchors[0].id);
        session.select_component(session.glyph.components[0].id);

        session.delete_selection(true);
        assert!(session.glyph.anchors.is_empty());
        assert!(session.glyph.components.is_empty());
    }

    #[test]
    fn candidate_point_requires_glyph_wide_uniqueness() {
        let mut session = three_contour_session();
        let a = session.glyph.contours[0].points()[0].id;
        let b = session.glyph.contours[2].points()[0].id;

        assert!(session.selected_candidate_point().is_none());

        session.selection.insert(a);
        let (point, contour) = session.selected_candidate_point().unwrap();
        assert_eq!(point, a);
        assert_eq!(contour, session.glyph.contours[0].id);

        // a second selected point anywhere in the glyph spoils it
        session.selection.insert(b);
        assert!(session.selected_candidate_point().is_none());
    }

    #[test]
    fn adjacent_point_selection_wraps_and_notifies_once() {
        let mut session = three_contour_session();
        let contour = &session.glyph.contours[1];
        let last = contour.points()[2].id;
        let first = contour.points()[0].id;
        session.selection.insert(last);
        session.drain_notifications();

        assert!(session.select_adjacent_point(1));
        assert!(session.selection.contains(&first));
        assert!(!session.selection.contains(&last));
        assert_eq!(session.selection.len(), 1);
        assert_eq!(selection_changes(&mut session), 1);
    }

    #[test]
    fn adjacent_point_selection_with_two_selected_is_noop() {
        let mut session = three_contour_session();
        let a = session.glyph.contours[0].points()[0].id;
        let b = session.glyph.contours[0].points()[1].id;
        session.selection.insert(a);
        session.selection.insert(b);
        session.drain_notifications();

        assert!(!session.select_adjacent_point(1));
        assert!(session.selection.contains(&a));
        assert!(session.selection.contains(&b));
        assert!(session.drain_notifications().is_empty());
    }

    #[test]
    fn repaint_requests_collapse() {
        let mut session = three_contour_session();
        session.request_repaint();
        session.request_repaint();
        assert_eq!(session.drain_notifications(), vec![Notification::Repaint]);
    }
}
