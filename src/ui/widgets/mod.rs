// SPDX-License-Identifier: MPL-2.0
pub mod rating_view;

pub use rating_view::{rating_view, RatingView};
