// SPDX-License-Identifier: MPL-2.0
//! Star rating selector widget.
//!
//! `RatingView` draws one tinted SVG per rating step inside an iced `Row` and
//! turns taps and drags over that row into rating changes:
//!
//! ```ignore
//! rating_view(&self.rating, &self.appearance)
//!     .on_change(Message::RatingChanged)
//! ```
//!
//! The widget never mutates the model. It publishes the new rating and the
//! host applies it with [`RatingState::set_rating`], so programmatic writes
//! never produce a message. Pointer events are never captured, which lets
//! enclosing scrollables and gesture handlers keep receiving them.

use crate::rating::{
    Appearance, GestureRecognizer, IconLayout, PointerInput, RatingState, ValueChanged,
};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::alignment::Vertical;
use iced::touch;
use iced::widget::{svg, Row};
use iced::{Element, Event, Length, Point, Rectangle, Renderer, Size, Theme};

/// Rating selector built from a [`RatingState`] and an [`Appearance`].
pub struct RatingView<'a, Message> {
    rating: &'a RatingState,
    content: Element<'a, Message>,
    on_change: Option<Box<dyn Fn(u32) -> Message + 'a>>,
    width: Length,
    height: Length,
}

impl<'a, Message: 'a> RatingView<'a, Message> {
    /// Creates the widget. Without [`on_change`](Self::on_change) it is
    /// display-only.
    pub fn new(rating: &'a RatingState, appearance: &Appearance) -> Self {
        Self {
            rating,
            content: icon_row(rating, appearance),
            on_change: None,
            width: Length::Shrink,
            height: Length::Shrink,
        }
    }

    /// Sets the message produced when the user picks a new rating.
    #[must_use]
    pub fn on_change(mut self, on_change: impl Fn(u32) -> Message + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Sets the width. The default shrinks to the icon row.
    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height. The icon row stays vertically centered.
    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

/// Builds the row of tinted icons. No image means no icons.
fn icon_row<'a, Message: 'a>(
    rating: &RatingState,
    appearance: &Appearance,
) -> Element<'a, Message> {
    let size = appearance.icon_size();

    let icons: Vec<Element<'a, Message>> = match appearance.image() {
        Some(handle) => rating
            .icons()
            .iter()
            .map(|slot| {
                let tint = appearance.tint_for(slot.selected);
                svg(handle.clone())
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size))
                    .style(move |_theme: &Theme, _status| svg::Style { color: Some(tint) })
                    .into()
            })
            .collect(),
        None => Vec::new(),
    };

    Row::with_children(icons)
        .spacing(appearance.spacing())
        .align_y(Vertical::Center)
        .into()
}

/// Per-widget state kept in the widget tree between frames.
#[derive(Debug, Default)]
struct State {
    recognizer: GestureRecognizer,
    /// Touch finger driving the current gesture.
    finger: Option<touch::Finger>,
}

impl State {
    /// Runs one toolkit event through the recognizer.
    fn process(
        &mut self,
        event: &Event,
        cursor: mouse::Cursor,
        layout: Layout<'_>,
        rating: &RatingState,
    ) -> Option<ValueChanged> {
        let input = pointer_input(event, cursor, &mut self.finger)?;
        let changed = self.recognizer.handle(input, &icon_layout(layout), rating);

        // A touch that did not start a gesture must not block the next one.
        if !self.recognizer.is_active() {
            self.finger = None;
        }

        changed
    }
}

impl<Message> Widget<Message, Theme, Renderer> for RatingView<'_, Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);
        let row = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &limits);

        let row_size = row.size();
        let size = limits.resolve(self.width, self.height, row_size);
        let offset_y = ((size.height - row_size.height) / 2.0).max(0.0);

        layout::Node::with_children(size, vec![row.move_to(Point::new(0.0, offset_y))])
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        if let Some(row_layout) = layout.children().next() {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                row_layout,
                cursor,
                viewport,
            );
        }
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Some(row_layout) = layout.children().next() {
            self.content.as_widget_mut().update(
                &mut tree.children[0],
                event,
                row_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }

        let Some(on_change) = &self.on_change else {
            return;
        };

        let state = tree.state.downcast_mut::<State>();
        let changed = state.process(event, cursor, layout, self.rating);

        if let Some(changed) = changed {
            tracing::debug!(
                kind = ?changed.kind,
                index = changed.index,
                rating = changed.rating,
                "rating value changed"
            );
            shell.publish(on_change(changed.rating));
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.recognizer.is_panning() {
            mouse::Interaction::Grabbing
        } else if self.on_change.is_some() && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        if let Some(row_layout) = layout.children().next() {
            self.content.as_widget_mut().operate(
                &mut tree.children[0],
                row_layout,
                renderer,
                operation,
            );
        }
    }
}

impl<'a, Message: 'a> From<RatingView<'a, Message>> for Element<'a, Message> {
    fn from(view: RatingView<'a, Message>) -> Self {
        Self::new(view)
    }
}

/// Helper function to create a [`RatingView`].
pub fn rating_view<'a, Message: 'a>(
    rating: &'a RatingState,
    appearance: &Appearance,
) -> RatingView<'a, Message> {
    RatingView::new(rating, appearance)
}

/// Collects absolute icon bounds. The row's horizontal extent, stretched to
/// the widget height, bounds the hit area so presses in the vertical padding
/// still resolve while space beside a stretched row does not.
fn icon_layout(layout: Layout<'_>) -> IconLayout {
    let bounds = layout.bounds();
    let Some(row) = layout.children().next() else {
        return IconLayout::new(Rectangle::new(bounds.position(), Size::ZERO), Vec::new());
    };

    let row_bounds = row.bounds();
    let area = Rectangle {
        x: row_bounds.x,
        y: bounds.y,
        width: row_bounds.width,
        height: bounds.height,
    };

    IconLayout::new(area, row.children().map(|icon| icon.bounds()).collect())
}

/// Normalizes mouse and single-finger touch events.
fn pointer_input(
    event: &Event,
    cursor: mouse::Cursor,
    finger: &mut Option<touch::Finger>,
) -> Option<PointerInput> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor.position().map(PointerInput::Pressed)
        }
        Event::Mouse(mouse::Event::CursorMoved { .. }) => {
            cursor.position().map(PointerInput::Moved)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            cursor.position().map(PointerInput::Released)
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(PointerInput::Cancelled),
        Event::Touch(touch::Event::FingerPressed { id, position }) if finger.is_none() => {
            *finger = Some(*id);
            Some(PointerInput::Pressed(*position))
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) if *finger == Some(*id) => {
            Some(PointerInput::Moved(*position))
        }
        Event::Touch(touch::Event::FingerLifted { id, position }) if *finger == Some(*id) => {
            *finger = None;
            Some(PointerInput::Released(*position))
        }
        Event::Touch(touch::Event::FingerLost { id, .. }) if *finger == Some(*id) => {
            *finger = None;
            Some(PointerInput::Cancelled)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::GestureKind;

    fn cursor() -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(10.0, 5.0))
    }

    #[test]
    fn left_click_maps_to_press_and_release() {
        let mut finger = None;
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));

        assert_eq!(
            pointer_input(&press, cursor(), &mut finger),
            Some(PointerInput::Pressed(Point::new(10.0, 5.0)))
        );
        assert_eq!(
            pointer_input(&release, cursor(), &mut finger),
            Some(PointerInput::Released(Point::new(10.0, 5.0)))
        );
    }

    #[test]
    fn right_click_is_ignored() {
        let mut finger = None;
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        assert_eq!(pointer_input(&press, cursor(), &mut finger), None);
    }

    #[test]
    fn cursor_leaving_cancels() {
        let mut finger = None;
        let left = Event::Mouse(mouse::Event::CursorLeft);
        assert_eq!(
            pointer_input(&left, cursor(), &mut finger),
            Some(PointerInput::Cancelled)
        );
    }

    #[test]
    fn unavailable_cursor_yields_nothing() {
        let mut finger = None;
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(
            pointer_input(&press, mouse::Cursor::Unavailable, &mut finger),
            None
        );
    }

    #[test]
    fn only_first_finger_is_tracked() {
        let mut finger = None;
        let first = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::new(4.0, 4.0),
        });
        let second = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(2),
            position: Point::new(40.0, 4.0),
        });
        let second_moves = Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(2),
            position: Point::new(60.0, 4.0),
        });
        let first_lifts = Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(1),
            position: Point::new(4.0, 4.0),
        });

        assert_eq!(
            pointer_input(&first, cursor(), &mut finger),
            Some(PointerInput::Pressed(Point::new(4.0, 4.0)))
        );
        assert_eq!(pointer_input(&second, cursor(), &mut finger), None);
        assert_eq!(pointer_input(&second_moves, cursor(), &mut finger), None);
        assert_eq!(
            pointer_input(&first_lifts, cursor(), &mut finger),
            Some(PointerInput::Released(Point::new(4.0, 4.0)))
        );
        assert!(finger.is_none());
    }

    #[test]
    fn lost_finger_cancels() {
        let mut finger = Some(touch::Finger(7));
        let lost = Event::Touch(touch::Event::FingerLost {
            id: touch::Finger(7),
            position: Point::ORIGIN,
        });
        assert_eq!(
            pointer_input(&lost, cursor(), &mut finger),
            Some(PointerInput::Cancelled)
        );
        assert!(finger.is_none());
    }

    const ICON: f32 = 24.0;
    const GAP: f32 = 8.0;

    /// Builds the node tree `layout` produces: a widget of `width` x `height`
    /// holding a row of five icons, vertically centered.
    fn widget_node(width: f32, height: f32) -> layout::Node {
        let icons = (0..5)
            .map(|index| {
                let x = index as f32 * (ICON + GAP);
                layout::Node::new(Size::new(ICON, ICON)).move_to(Point::new(x, 0.0))
            })
            .collect();
        let row_width = 5.0 * ICON + 4.0 * GAP;
        let row = layout::Node::with_children(Size::new(row_width, ICON), icons)
            .move_to(Point::new(0.0, (height - ICON) / 2.0));

        layout::Node::with_children(Size::new(width, height), vec![row])
    }

    fn icon_center(index: usize, offset_y: f32) -> Point {
        Point::new(index as f32 * (ICON + GAP) + ICON / 2.0, offset_y + ICON / 2.0)
    }

    fn click(
        state: &mut State,
        node: &layout::Node,
        rating: &RatingState,
        at: Point,
    ) -> Vec<ValueChanged> {
        let cursor = mouse::Cursor::Available(at);
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));

        [press, release]
            .iter()
            .filter_map(|event| state.process(event, cursor, Layout::new(node), rating))
            .collect()
    }

    fn finger(id: u64, position: Point, pressed: bool) -> Event {
        if pressed {
            Event::Touch(touch::Event::FingerPressed {
                id: touch::Finger(id),
                position,
            })
        } else {
            Event::Touch(touch::Event::FingerLifted {
                id: touch::Finger(id),
                position,
            })
        }
    }

    #[test]
    fn stretched_widget_ignores_space_beside_row() {
        let node = widget_node(400.0, ICON);
        let icons = icon_layout(Layout::new(&node));

        assert_eq!(icons.icon_at(Point::new(390.0, 12.0)), None);
        assert_eq!(icons.icon_at(Point::new(160.0, 12.0)), None);
        // Gaps inside the row still resolve.
        assert_eq!(icons.icon_at(Point::new(26.0, 12.0)), Some(0));

        let mut state = State::default();
        let rating = RatingState::new();
        assert!(click(&mut state, &node, &rating, Point::new(390.0, 12.0)).is_empty());
    }

    #[test]
    fn vertical_padding_resolves_to_nearest_icon() {
        let node = widget_node(152.0, 48.0);
        let icons = icon_layout(Layout::new(&node));

        assert_eq!(icons.icon_at(Point::new(76.0, 2.0)), Some(2));
        assert_eq!(icons.icon_at(Point::new(76.0, 50.0)), None);
    }

    #[test]
    fn tapping_each_icon_emits_once() {
        let node = widget_node(152.0, ICON);
        let rating = RatingState::new();
        let mut state = State::default();

        for index in 0..5 {
            let emitted = click(&mut state, &node, &rating, icon_center(index, 0.0));
            assert_eq!(
                emitted,
                vec![ValueChanged {
                    kind: GestureKind::Tap,
                    index,
                    rating: index as u32 + 1,
                }]
            );
        }
    }

    #[test]
    fn drag_emits_once_per_move() {
        let node = widget_node(152.0, ICON);
        let rating = RatingState::new();
        let mut state = State::default();

        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::ORIGIN,
        });

        let start = mouse::Cursor::Available(icon_center(0, 0.0));
        assert_eq!(state.process(&press, start, Layout::new(&node), &rating), None);

        let ratings: Vec<u32> = (1..5)
            .filter_map(|index| {
                let cursor = mouse::Cursor::Available(icon_center(index, 0.0));
                state.process(&moved, cursor, Layout::new(&node), &rating)
            })
            .map(|changed| changed.rating)
            .collect();
        assert_eq!(ratings, vec![2, 3, 4, 5]);
    }

    #[test]
    fn touch_outside_row_frees_finger_slot() {
        let node = widget_node(400.0, ICON);
        let rating = RatingState::new();
        let mut state = State::default();
        let inside = icon_center(3, 0.0);

        let outside = Point::new(390.0, 12.0);
        assert_eq!(
            state.process(&finger(1, outside, true), cursor(), Layout::new(&node), &rating),
            None
        );
        assert!(state.finger.is_none());

        state.process(&finger(2, inside, true), cursor(), Layout::new(&node), &rating);
        assert_eq!(state.finger, Some(touch::Finger(2)));
        let changed =
            state.process(&finger(2, inside, false), cursor(), Layout::new(&node), &rating);
        assert_eq!(changed.map(|c| c.rating), Some(4));
        assert!(state.finger.is_none());
    }

    #[test]
    fn second_finger_is_ignored_during_gesture() {
        let node = widget_node(152.0, ICON);
        let rating = RatingState::new();
        let mut state = State::default();

        let first = icon_center(1, 0.0);
        let second = icon_center(4, 0.0);
        state.process(&finger(1, first, true), cursor(), Layout::new(&node), &rating);
        state.process(&finger(2, second, true), cursor(), Layout::new(&node), &rating);
        assert_eq!(state.finger, Some(touch::Finger(1)));

        assert_eq!(
            state.process(&finger(2, second, false), cursor(), Layout::new(&node), &rating),
            None
        );
        let changed =
            state.process(&finger(1, first, false), cursor(), Layout::new(&node), &rating);
        assert_eq!(changed.map(|c| c.rating), Some(2));
    }
}
