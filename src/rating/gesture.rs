// SPDX-License-Identifier: MPL-2.0
//! Tap and pan recognition over the icon row.
//!
//! The recognizer is fed normalized pointer input (mouse or a single touch
//! finger) and reports a [`ValueChanged`] whenever a recognized gesture
//! update resolves to an icon. It never mutates the rating itself: the host
//! receives the new value and applies it through the state setters.

use super::hit_test::IconLayout;
use super::state::RatingState;
use iced::Point;

/// Distance in logical pixels a press must travel before it becomes a pan.
pub const PAN_THRESHOLD: f32 = 10.0;

/// Pointer input after toolkit events have been normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Pressed(Point),
    Moved(Point),
    Released(Point),
    /// The pointer left the window or the finger was lost.
    Cancelled,
}

/// Which recognizer produced a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Tap,
    Pan,
}

/// Notification emitted for a user-driven rating change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueChanged {
    pub kind: GestureKind,
    /// Icon the gesture resolved to.
    pub index: usize,
    /// New rating, already clamped to the state's bounds.
    pub rating: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    Pressed {
        origin: Point,
    },
    Panning,
}

/// Gesture state kept across pointer events.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    phase: Phase,
}

impl GestureRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.phase, Phase::Panning)
    }

    /// Returns true between a press and its release or cancellation.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Advances the gesture with `input`.
    ///
    /// Presses only start tracking when they land inside the row. Returns
    /// the notification for this update, if any.
    pub fn handle(
        &mut self,
        input: PointerInput,
        layout: &IconLayout,
        state: &RatingState,
    ) -> Option<ValueChanged> {
        match (self.phase, input) {
            (Phase::Idle, PointerInput::Pressed(point)) => {
                if layout.row.contains(point) {
                    self.phase = Phase::Pressed { origin: point };
                }
                None
            }
            (Phase::Pressed { origin }, PointerInput::Moved(point)) => {
                if origin.distance(point) > PAN_THRESHOLD {
                    self.phase = Phase::Panning;
                    pan(layout, state, point)
                } else {
                    None
                }
            }
            (Phase::Panning, PointerInput::Moved(point)) => pan(layout, state, point),
            (Phase::Pressed { .. }, PointerInput::Released(point)) => {
                self.phase = Phase::Idle;
                tap(layout, state, point)
            }
            (Phase::Panning, PointerInput::Released(_)) | (_, PointerInput::Cancelled) => {
                self.phase = Phase::Idle;
                None
            }
            _ => None,
        }
    }
}

fn tap(layout: &IconLayout, state: &RatingState, point: Point) -> Option<ValueChanged> {
    let index = layout.icon_at(point)?;
    let changed = ValueChanged {
        kind: GestureKind::Tap,
        index,
        rating: state.tap_target(index),
    };
    tracing::debug!(index, rating = changed.rating, "tap recognized");
    Some(changed)
}

fn pan(layout: &IconLayout, state: &RatingState, point: Point) -> Option<ValueChanged> {
    let index = layout.icon_at(point)?;
    let changed = ValueChanged {
        kind: GestureKind::Pan,
        index,
        rating: state.pan_target(index),
    };
    tracing::trace!(index, rating = changed.rating, "pan update");
    Some(changed)
}
