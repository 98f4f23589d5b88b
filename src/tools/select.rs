// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! The selection tool: click/drag selection, rubber-band selection,
//! entity dragging, double-click smooth toggling, keyboard nudge and
//! point navigation, and the context-menu entity creation actions.
//!
//! The undo checkpoint for a drag is deferred from the press to the
//! first movement, so a click that never drags records no checkpoint.
//! Rubber-band selection is computed against a snapshot of the
//! selection taken at the press: with shift held the candidates
//! toggle against that snapshot (symmetric difference), so shrinking
//! the rectangle mid-drag cannot re-deselect something that was
//! already outside it.

use crate::editing::dialogs::DialogProvider;
use crate::editing::hit_test::HitItem;
use crate::editing::keyboard::{Key, KeyEvent};
use crate::editing::mouse::{Drag, Modifiers, MouseDelegate, MouseEvent};
use crate::editing::selection::Selection;
use crate::editing::session::{EditSession, Notification};
use crate::tools::EditCtx;
use kurbo::{Point, Rect};

/// The selection tool
#[derive(Debug, Clone, Default)]
pub struct SelectTool {
    gesture: GestureState,
}

/// State of the current pointer gesture
#[derive(Debug, Clone, Default)]
enum GestureState {
    /// No gesture in progress
    #[default]
    Ready,
    /// Button down on an entity. The undo checkpoint is deferred until
    /// the first movement; a plain click must not record one.
    DownOnItem { pending_undo: bool },
    /// An entity drag is live; the checkpoint has been taken
    Dragging,
    /// Button down on empty space, rubber band not yet stretched.
    /// `snapshot` is the point selection at the press, the base of the
    /// additive (shift) rule.
    DownOnNothing { snapshot: Selection },
    /// Rubber-band selection is live
    RubberBand { snapshot: Selection, rect: Rect },
}

impl SelectTool {
    /// The in-progress rubber-band rectangle for the host to paint,
    /// absent whenever no rubber-band drag is live.
    pub fn rubber_band_rect(&self) -> Option<Rect> {
        match &self.gesture {
            GestureState::RubberBand { rect, .. } => Some(*rect),
            _ => None,
        }
    }

    /// Handle a key press. Returns false when the engine did not use
    /// the key (the host should fall back to its default handling).
    pub fn key_down(&mut self, event: KeyEvent, ctx: &mut EditCtx<'_>) -> bool {
        match event.key {
            Key::Delete => {
                ctx.session.prepare_undo();
                // shift requests a hard delete that makes no attempt to
                // keep the curve shape at the removed points
                let preserve_shape = !event.mods.shift;
                ctx.session.delete_selection(preserve_shape);
                true
            }
            Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown => {
                ctx.session.prepare_undo();
                ctx.session.nudge_selection(event.key, event.mods)
            }
            Key::Less => {
                ctx.session.select_adjacent_point(-1);
                true
            }
            Key::Greater => {
                ctx.session.select_adjacent_point(1);
                true
            }
        }
    }

    /// Context-menu action: ask the host for an anchor name and append
    /// the anchor on confirmation. Cancellation leaves the glyph
    /// untouched.
    pub fn create_anchor(
        &self,
        session: &mut EditSession,
        dialogs: &mut dyn DialogProvider,
        pos: Point,
    ) {
        if let Some(name) = dialogs.request_anchor_name(pos) {
            session.append_anchor(name, pos);
        }
    }

    /// Context-menu action: ask the host for a base glyph and append a
    /// component on confirmation. Cancellation leaves the glyph
    /// untouched.
    pub fn create_component(&self, session: &mut EditSession, dialogs: &mut dyn DialogProvider) {
        if let Some(base) = dialogs.request_component_glyph(&session.glyph) {
            session.append_component(base);
        }
    }

    fn is_selected(session: &EditSession, item: HitItem) -> bool {
        match item {
            HitItem::Point { point, .. } => session.selection.contains(&point),
            HitItem::Anchor(id) => session.anchor_selection.contains(&id),
            HitItem::Component(id) => session.component_selection.contains(&id),
        }
    }

    /// Recompute the rubber-band selection for the current rectangle
    /// and modifiers and assign it (assignment is skipped inside the
    /// session when the set is unchanged).
    fn update_rubber_band(ctx: &mut EditCtx<'_>, rect: Rect, snapshot: &Selection, mods: Modifiers) {
        let mut points = ctx.hit.points_in_rect(rect);
        if mods.shift {
            points = points.symmetric_difference(snapshot);
        }
        if mods.alt {
            // restrict the capture to on-curve points
            let glyph = &ctx.session.glyph;
            points.retain(|id| glyph.point(*id).is_some_and(|p| p.is_on_curve()));
        }
        ctx.session.set_point_selection(points);
        // the band itself moved even when the selection did not
        ctx.session.request_repaint();
    }
}

impl<'a> MouseDelegate<EditCtx<'a>> for SelectTool {
    fn left_down(&mut self, event: MouseEvent, ctx: &mut EditCtx<'a>) {
        match ctx.hit.item_at(event.pos) {
            Some(item) => {
                let add_to_selection = event.mods.shift;
                if !(Self::is_selected(ctx.session, item) || add_to_selection) {
                    ctx.session.clear_all_selections();
                }
                match item {
                    HitItem::Point { contour, point } => {
                        ctx.session.select_point(contour, point);
                    }
                    HitItem::Anchor(id) => ctx.session.select_anchor(id),
                    HitItem::Component(id) => ctx.session.select_component(id),
                }
                self.gesture = GestureState::DownOnItem { pending_undo: true };
            }
            None => {
                let snapshot = if event.mods.shift {
                    ctx.session.selection.clone()
                } else {
                    ctx.session.clear_all_selections();
                    Selection::new()
                };
                self.gesture = GestureState::DownOnNothing { snapshot };
            }
        }
        ctx.session.request_repaint();
    }

    fn left_drag_began(&mut self, event: MouseEvent, drag: Drag, ctx: &mut EditCtx<'a>) {
        match std::mem::take(&mut self.gesture) {
            GestureState::DownOnItem { pending_undo } => {
                if pending_undo {
                    // first movement of the gesture: this is where the
                    // deferred checkpoint fires
                    ctx.session.prepare_undo();
                }
                ctx.session.move_selection(drag.delta());
                self.gesture = GestureState::Dragging;
            }
            GestureState::DownOnNothing { snapshot } => {
                let rect = Rect::from_points(drag.start, drag.current);
                Self::update_rubber_band(ctx, rect, &snapshot, event.mods);
                self.gesture = GestureState::RubberBand { snapshot, rect };
            }
            other => self.gesture = other,
        }
    }

    fn left_drag_changed(&mut self, event: MouseEvent, drag: Drag, ctx: &mut EditCtx<'a>) {
        match &mut self.gesture {
            GestureState::Dragging => {
                ctx.session.move_selection(drag.delta());
            }
            GestureState::RubberBand { snapshot, rect } => {
                *rect = Rect::from_points(drag.start, drag.current);
                let (rect, snapshot) = (*rect, snapshot.clone());
                Self::update_rubber_band(ctx, rect, &snapshot, event.mods);
            }
            _ => {}
        }
    }

    fn left_up(&mut self, _event: MouseEvent, ctx: &mut EditCtx<'a>) {
        // drop gesture-local state; this also withdraws the rubber-band
        // rectangle and ends its painting
        self.gesture = GestureState::Ready;
        ctx.session.request_repaint();
    }

    fn left_double_click(&mut self, event: MouseEvent, ctx: &mut EditCtx<'a>) {
        let Some(HitItem::Point { contour, point }) = ctx.hit.item_at(event.pos) else {
            return;
        };
        let on_curve = ctx
            .session
            .glyph
            .point(point)
            .is_some_and(|p| p.is_on_curve());
        if on_curve {
            ctx.session.prepare_undo();
        }
        if let Some(contour) = ctx.session.contour_mut(contour) {
            if on_curve {
                contour.toggle_smooth(point);
            }
            // the contour is re-normalized even when the hit point is a
            // handle and nothing toggled
            contour.dirty = true;
        }
        ctx.session.request_repaint();
    }

    fn right_down(&mut self, event: MouseEvent, ctx: &mut EditCtx<'a>) {
        ctx.session.post(Notification::ContextMenu { pos: event.pos });
    }

    fn cancel(&mut self, ctx: &mut EditCtx<'a>) {
        self.gesture = GestureState::Ready;
        ctx.session.request_repaint();
    }
}
