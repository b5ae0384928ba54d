// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used by the rating model, its appearance and the settings file.
//!
//! # Categories
//!
//! - **Rating**: Initial value and bounds
//! - **Appearance**: Icon geometry and tint colors

use crate::ui::design_tokens::{palette, sizing, spacing};
use iced::Color;

// ==========================================================================
// Rating Defaults
// ==========================================================================

/// Rating shown before the user picks one.
pub const DEFAULT_RATING: u32 = 0;

/// Lowest selectable rating; zero allows clearing the rating by tapping.
pub const DEFAULT_MINIMUM_RATING: u32 = 0;

/// Number of icons in the row.
pub const DEFAULT_MAXIMUM_RATING: u32 = 5;

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Gap between two icons, in logical pixels.
pub const DEFAULT_SPACING: f32 = spacing::XS;

/// Edge length of each icon, in logical pixels.
pub const DEFAULT_ICON_SIZE: f32 = sizing::ICON_MD;

/// Smallest icon edge length accepted by the appearance setters.
pub const MIN_ICON_SIZE: f32 = 1.0;

/// Tint of icons above the current rating.
pub const DEFAULT_UNSELECTED_TINT: Color = palette::GRAY_200;

/// Tint of icons up to and including the current rating.
pub const DEFAULT_SELECTED_TINT: Color = palette::PRIMARY_500;
