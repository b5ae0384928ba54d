// SPDX-License-Identifier: MPL-2.0
//! Visual properties of the rating row.

use super::Render;
use crate::config::defaults::{
    DEFAULT_ICON_SIZE, DEFAULT_SELECTED_TINT, DEFAULT_SPACING, DEFAULT_UNSELECTED_TINT,
    MIN_ICON_SIZE,
};
use crate::ui::icons;
use iced::widget::svg;
use iced::Color;

/// Icon, tints and spacing used to draw the row.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    image: Option<svg::Handle>,
    spacing: f32,
    icon_size: f32,
    unselected_tint_color: Color,
    selected_tint_color: Color,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            image: Some(icons::star()),
            spacing: DEFAULT_SPACING,
            icon_size: DEFAULT_ICON_SIZE,
            unselected_tint_color: DEFAULT_UNSELECTED_TINT,
            selected_tint_color: DEFAULT_SELECTED_TINT,
        }
    }
}

impl Appearance {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Icon drawn for every step; `None` renders an empty row.
    #[must_use]
    pub fn image(&self) -> Option<&svg::Handle> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    #[must_use]
    pub fn icon_size(&self) -> f32 {
        self.icon_size
    }

    #[must_use]
    pub fn unselected_tint_color(&self) -> Color {
        self.unselected_tint_color
    }

    #[must_use]
    pub fn selected_tint_color(&self) -> Color {
        self.selected_tint_color
    }

    /// Tint for an icon depending on whether it is part of the rating.
    #[must_use]
    pub fn tint_for(&self, selected: bool) -> Color {
        if selected {
            self.selected_tint_color
        } else {
            self.unselected_tint_color
        }
    }

    pub fn set_image(&mut self, image: Option<svg::Handle>) -> Render {
        if self.image == image {
            return Render::Nothing;
        }
        self.image = image;
        Render::Rebuild
    }

    /// Sets the gap between icons. Negative values clamp to zero.
    pub fn set_spacing(&mut self, spacing: f32) -> Render {
        let spacing = spacing.max(0.0);
        if spacing == self.spacing {
            return Render::Nothing;
        }
        self.spacing = spacing;
        Render::Relayout
    }

    /// Sets the edge length of each icon, at least one pixel.
    pub fn set_icon_size(&mut self, size: f32) -> Render {
        let size = size.max(MIN_ICON_SIZE);
        if size == self.icon_size {
            return Render::Nothing;
        }
        self.icon_size = size;
        Render::Relayout
    }

    pub fn set_unselected_tint_color(&mut self, color: Color) -> Render {
        if color == self.unselected_tint_color {
            return Render::Nothing;
        }
        self.unselected_tint_color = color;
        Render::Retint
    }

    pub fn set_selected_tint_color(&mut self, color: Color) -> Render {
        if color == self.selected_tint_color {
            return Render::Nothing;
        }
        self.selected_tint_color = color;
        Render::Retint
    }
}
