// SPDX-License-Identifier: MPL-2.0
//! Bounded rating model.
//!
//! `RatingState` owns the three integer properties of the control and the
//! icon row derived from them. Every setter re-establishes
//! `minimum ≤ rating ≤ maximum` before returning, so callers never observe
//! an out-of-range value.

use super::Render;
use crate::config::defaults::{DEFAULT_MAXIMUM_RATING, DEFAULT_MINIMUM_RATING, DEFAULT_RATING};

/// One step of the icon row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSlot {
    /// Position in the row, starting at 0.
    pub index: usize,
    /// Whether the icon is drawn with the selected tint.
    pub selected: bool,
}

/// Rating value and its bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingState {
    rating: u32,
    minimum: u32,
    maximum: u32,
    icons: Vec<IconSlot>,
}

impl Default for RatingState {
    fn default() -> Self {
        Self::with_bounds(DEFAULT_RATING, DEFAULT_MINIMUM_RATING, DEFAULT_MAXIMUM_RATING)
    }
}

impl RatingState {
    /// Creates a state with the default bounds (0 to 5) and no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state from raw values, clamping them in setter order:
    /// maximum first, then minimum, then rating.
    #[must_use]
    pub fn with_bounds(rating: u32, minimum: u32, maximum: u32) -> Self {
        let maximum = clamp_maximum(maximum);
        let minimum = clamp_minimum(minimum, maximum);
        let mut state = Self {
            rating: rating.clamp(minimum, maximum),
            minimum,
            maximum,
            icons: Vec::new(),
        };
        state.rebuild_icons();
        state
    }

    #[must_use]
    pub fn rating(&self) -> u32 {
        self.rating
    }

    #[must_use]
    pub fn minimum_rating(&self) -> u32 {
        self.minimum
    }

    #[must_use]
    pub fn maximum_rating(&self) -> u32 {
        self.maximum
    }

    /// The icon row, one slot per rating step.
    #[must_use]
    pub fn icons(&self) -> &[IconSlot] {
        &self.icons
    }

    /// Returns whether the icon at `index` is part of the current rating.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.icons.get(index).is_some_and(|slot| slot.selected)
    }

    /// Clamps `value` into `[minimum, maximum]`.
    #[must_use]
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.minimum, self.maximum)
    }

    /// Sets the rating, clamped to the current bounds.
    pub fn set_rating(&mut self, value: u32) -> Render {
        let clamped = self.clamp(value);
        if clamped == self.rating {
            return Render::Nothing;
        }
        tracing::debug!(requested = value, rating = clamped, "rating changed");
        self.rating = clamped;
        self.retint();
        Render::Retint
    }

    /// Sets the maximum rating. Zero is coerced to 1; the minimum and the
    /// rating are pulled down when they exceed the new maximum.
    pub fn set_maximum_rating(&mut self, value: u32) -> Render {
        let maximum = clamp_maximum(value);
        if maximum == self.maximum {
            return Render::Nothing;
        }
        self.maximum = maximum;
        self.minimum = self.minimum.min(maximum);
        self.rating = self.rating.min(maximum);
        tracing::debug!(
            maximum,
            minimum = self.minimum,
            rating = self.rating,
            "maximum rating changed"
        );
        self.rebuild_icons();
        Render::Rebuild
    }

    /// Sets the minimum rating, capped at the maximum. The rating is pushed
    /// up when it falls below the new minimum.
    pub fn set_minimum_rating(&mut self, value: u32) -> Render {
        let minimum = clamp_minimum(value, self.maximum);
        if minimum == self.minimum {
            return Render::Nothing;
        }
        self.minimum = minimum;
        self.rating = self.rating.max(minimum);
        tracing::debug!(minimum, rating = self.rating, "minimum rating changed");
        self.rebuild_icons();
        Render::Rebuild
    }

    /// Rating produced by tapping the icon at `index`.
    ///
    /// Tapping the first icon while it is the only one selected clears the
    /// rating, provided the minimum allows zero.
    #[must_use]
    pub fn tap_target(&self, index: usize) -> u32 {
        if self.rating == 1 && index == 0 && self.minimum == 0 {
            0
        } else {
            self.clamp(step_for(index))
        }
    }

    /// Rating produced by dragging over the icon at `index`.
    #[must_use]
    pub fn pan_target(&self, index: usize) -> u32 {
        self.clamp(step_for(index))
    }

    fn rebuild_icons(&mut self) {
        self.icons = (0..self.maximum as usize)
            .map(|index| IconSlot {
                index,
                selected: false,
            })
            .collect();
        self.retint();
    }

    fn retint(&mut self) {
        let rating = self.rating as usize;
        for slot in &mut self.icons {
            slot.selected = slot.index < rating;
        }
    }
}

fn clamp_maximum(value: u32) -> u32 {
    value.max(1)
}

fn clamp_minimum(value: u32, maximum: u32) -> u32 {
    value.min(maximum)
}

/// Icon index to rating step (index 0 is one star).
fn step_for(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_add(1))
}
