// SPDX-License-Identifier: MPL-2.0
//! Maps a pointer position to the icon under it.

use iced::{Point, Rectangle};

/// Absolute bounds of the icon row and of each icon inside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconLayout {
    /// Bounds of the whole row container.
    pub row: Rectangle,
    /// Bounds of each icon, in row order.
    pub icons: Vec<Rectangle>,
}

impl IconLayout {
    #[must_use]
    pub fn new(row: Rectangle, icons: Vec<Rectangle>) -> Self {
        Self { row, icons }
    }

    /// Lays out `count` icons of `icon_size` left to right starting at
    /// `origin`, separated by `spacing`. Mirrors what an iced `Row` produces
    /// for fixed-size children.
    #[must_use]
    pub fn uniform(origin: Point, count: usize, icon_size: f32, spacing: f32) -> Self {
        let icons: Vec<Rectangle> = (0..count)
            .map(|index| {
                #[allow(clippy::cast_precision_loss)]
                let offset = index as f32 * (icon_size + spacing);
                Rectangle::new(
                    Point::new(origin.x + offset, origin.y),
                    iced::Size::new(icon_size, icon_size),
                )
            })
            .collect();

        #[allow(clippy::cast_precision_loss)]
        let width = if count == 0 {
            0.0
        } else {
            count as f32 * icon_size + (count - 1) as f32 * spacing
        };
        let row = Rectangle::new(origin, iced::Size::new(width, icon_size));

        Self { row, icons }
    }

    /// Returns the index of the icon under `point`.
    ///
    /// An icon containing the point wins. A point inside the row but between
    /// icons resolves to the horizontally nearest icon. Anything outside the
    /// row resolves to `None`.
    #[must_use]
    pub fn icon_at(&self, point: Point) -> Option<usize> {
        if let Some(index) = self.icons.iter().position(|icon| icon.contains(point)) {
            return Some(index);
        }

        if !self.row.contains(point) {
            return None;
        }

        self.icons
            .iter()
            .enumerate()
            .map(|(index, icon)| (index, horizontal_distance(icon, point.x)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(index, _)| index)
    }
}

fn horizontal_distance(icon: &Rectangle, x: f32) -> f32 {
    if x < icon.x {
        icon.x - x
    } else if x > icon.x + icon.width {
        x - (icon.x + icon.width)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_stars() -> IconLayout {
        // Icons at x = 0, 32, 64, 96, 128; each 24 wide with 8px gaps.
        IconLayout::uniform(Point::ORIGIN, 5, 24.0, 8.0)
    }

    #[test]
    fn uniform_layout_spans_icons_and_gaps() {
        let layout = five_stars();
        assert_eq!(layout.icons.len(), 5);
        assert_eq!(layout.row.width, 5.0 * 24.0 + 4.0 * 8.0);
        assert_eq!(layout.icons[2].x, 64.0);
    }

    #[test]
    fn point_inside_icon_resolves_to_it() {
        let layout = five_stars();
        assert_eq!(layout.icon_at(Point::new(12.0, 12.0)), Some(0));
        assert_eq!(layout.icon_at(Point::new(100.0, 5.0)), Some(3));
    }

    #[test]
    fn point_in_gap_resolves_to_nearest_icon() {
        let layout = five_stars();
        // Gap between icon 0 (ends at 24) and icon 1 (starts at 32).
        assert_eq!(layout.icon_at(Point::new(25.0, 12.0)), Some(0));
        assert_eq!(layout.icon_at(Point::new(31.0, 12.0)), Some(1));
    }

    #[test]
    fn point_outside_row_resolves_to_none() {
        let layout = five_stars();
        assert_eq!(layout.icon_at(Point::new(-1.0, 12.0)), None);
        assert_eq!(layout.icon_at(Point::new(12.0, 40.0)), None);
        assert_eq!(layout.icon_at(Point::new(500.0, 12.0)), None);
    }

    #[test]
    fn empty_layout_resolves_to_none() {
        let layout = IconLayout::default();
        assert_eq!(layout.icon_at(Point::ORIGIN), None);
    }

    #[test]
    fn taller_row_uses_nearest_icon_below_icons() {
        let mut layout = five_stars();
        layout.row.height = 48.0;
        assert_eq!(layout.icon_at(Point::new(70.0, 40.0)), Some(2));
    }
}
