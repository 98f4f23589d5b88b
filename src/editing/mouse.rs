// Copyright 2025 the Glyphedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Mouse gesture state machine.
//!
//! `Mouse` turns the host's raw pointer events (down / moved / up) into
//! semantic callbacks on a `MouseDelegate`: clicks, double-clicks, and
//! the begin/change/end phases of a drag. Keeping this translation in
//! one place means a tool never has to re-derive "is this the first
//! move of the gesture?" — which is exactly the moment the deferred
//! undo checkpoint must fire.
//!
//! A drag begins on the first moved event whose position differs from
//! the press position; a press-and-release without movement is a click.
//! The host reports click counts (double-click detection stays with the
//! toolkit, which knows its own timings).

use kurbo::{Point, Vec2};

/// Active keyboard modifiers carried on every input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Which mouse button an event is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// A pointer event in canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub pos: Point,
    pub button: Option<MouseButton>,
    pub mods: Modifiers,
    /// Click count reported by the host (1 = single, 2 = double)
    pub count: u8,
}

impl MouseEvent {
    pub fn new(pos: Point, button: Option<MouseButton>) -> Self {
        Self {
            pos,
            button,
            mods: Modifiers::default(),
            count: 1,
        }
    }

    pub fn with_modifiers(pos: Point, button: Option<MouseButton>, mods: Modifiers) -> Self {
        Self {
            pos,
            button,
            mods,
            count: 1,
        }
    }

    pub fn with_count(mut self, count: u8) -> Self {
        self.count = count;
        self
    }
}

/// The positions describing an in-progress drag
#[derive(Debug, Clone, Copy)]
pub struct Drag {
    /// Where the button went down
    pub start: Point,
    /// The previous move sample
    pub prev: Point,
    /// The current pointer position
    pub current: Point,
}

impl Drag {
    /// The delta since the last move sample.
    ///
    /// Deltas are incremental, not measured from the gesture start, so
    /// each sample is applied exactly once and repeated application
    /// cannot drift.
    pub fn delta(&self) -> Vec2 {
        self.current - self.prev
    }

    /// The total offset from the gesture start
    pub fn total(&self) -> Vec2 {
        self.current - self.start
    }
}

/// Receives semantic mouse callbacks from the `Mouse` state machine.
///
/// All methods have empty defaults; a tool implements the ones it
/// cares about.
#[allow(unused_variables)]
pub trait MouseDelegate<T> {
    fn mouse_moved(&mut self, event: MouseEvent, data: &mut T) {}

    fn left_down(&mut self, event: MouseEvent, data: &mut T) {}
    fn left_up(&mut self, event: MouseEvent, data: &mut T) {}
    /// A press and release without intervening movement
    fn left_click(&mut self, event: MouseEvent, data: &mut T) {}
    fn left_double_click(&mut self, event: MouseEvent, data: &mut T) {}

    fn left_drag_began(&mut self, event: MouseEvent, drag: Drag, data: &mut T) {}
    fn left_drag_changed(&mut self, event: MouseEvent, drag: Drag, data: &mut T) {}
    fn left_drag_ended(&mut self, event: MouseEvent, drag: Drag, data: &mut T) {}

    fn right_down(&mut self, event: MouseEvent, data: &mut T) {}

    /// The gesture was abandoned (pointer grab lost, window deactivated)
    fn cancel(&mut self, data: &mut T) {}
}

#[derive(Debug, Clone, Copy)]
enum MouseState {
    Up,
    Down(MouseEvent),
    Drag { start: MouseEvent, current: Point },
}

/// Raw-event to gesture translation
#[derive(Debug, Clone)]
pub struct Mouse {
    state: MouseState,
}

impl Default for Mouse {
    fn default() -> Self {
        Self {
            state: MouseState::Up,
        }
    }
}

impl Mouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mouse_down<T>(
        &mut self,
        event: MouseEvent,
        delegate: &mut dyn MouseDelegate<T>,
        data: &mut T,
    ) {
        if event.button == Some(MouseButton::Right) {
            delegate.right_down(event, data);
            return;
        }

        tracing::debug!("mouse down at {:?} (count {})", event.pos, event.count);
        self.state = MouseState::Down(event);
        if event.count == 2 {
            delegate.left_double_click(event, data);
        } else {
            delegate.left_down(event, data);
        }
    }

    pub fn mouse_moved<T>(
        &mut self,
        event: MouseEvent,
        delegate: &mut dyn MouseDelegate<T>,
        data: &mut T,
    ) {
        match self.state {
            MouseState::Up => delegate.mouse_moved(event, data),
            MouseState::Down(start) => {
                if event.pos != start.pos {
                    let drag = Drag {
                        start: start.pos,
                        prev: start.pos,
                        current: event.pos,
                    };
                    self.state = MouseState::Drag {
                        start,
                        current: event.pos,
                    };
                    delegate.left_drag_began(event, drag, data);
                }
            }
            MouseState::Drag { start, current } => {
                let drag = Drag {
                    start: start.pos,
                    prev: current,
                    current: event.pos,
                };
                self.state = MouseState::Drag {
                    start,
                    current: event.pos,
                };
                delegate.left_drag_changed(event, drag, data);
            }
        }
    }

    pub fn mouse_up<T>(
        &mut self,
        event: MouseEvent,
        delegate: &mut dyn MouseDelegate<T>,
        data: &mut T,
    ) {
        let state = std::mem::replace(&mut self.state, MouseState::Up);
        match state {
            MouseState::Up => {}
            MouseState::Down(start) => {
                delegate.left_up(event, data);
                if start.count == 1 {
                    delegate.left_click(event, data);
                }
            }
            MouseState::Drag { start, current } => {
                let drag = Drag {
                    start: start.pos,
                    prev: current,
                    current: event.pos,
                };
                delegate.left_drag_ended(event, drag, data);
                delegate.left_up(event, data);
            }
        }
    }

    pub fn cancel<T>(&mut self, delegate: &mut dyn MouseDelegate<T>, data: &mut T) {
        self.state = MouseState::Up;
        delegate.cancel(data);
    }
}
