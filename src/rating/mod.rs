// SPDX-License-Identifier: MPL-2.0
//! Rating selector model.
//!
//! This module holds everything about the control that can be reasoned about
//! without a renderer:
//!
//! - [`state`]: the bounded rating and its icon row
//! - [`appearance`]: visual properties (icon, tints, spacing)
//! - [`hit_test`]: pointer position to icon index
//! - [`gesture`]: tap and pan recognition
//!
//! The iced widget in [`crate::ui::widgets::rating_view`] is a thin shell
//! that feeds pointer events through these pieces.

pub mod appearance;
pub mod gesture;
pub mod hit_test;
pub mod state;

pub use appearance::Appearance;
pub use gesture::{GestureKind, GestureRecognizer, PointerInput, ValueChanged};
pub use hit_test::IconLayout;
pub use state::{IconSlot, RatingState};

/// Re-render work caused by a property write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// The value did not change.
    Nothing,
    /// Only icon tints change.
    Retint,
    /// Icon sizes or spacing change; the row is laid out again.
    Relayout,
    /// The icon row is rebuilt from scratch.
    Rebuild,
}
