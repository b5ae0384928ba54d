// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::rating::{Appearance, RatingState};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::rating_view;
use iced::widget::{button, column, container, row, text, Container};
use iced::alignment::{Horizontal, Vertical};
use iced::{Element, Length};

const STEPPER_LABEL_WIDTH: f32 = 120.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub rating: &'a RatingState,
    pub appearance: &'a Appearance,
    pub notifications: u32,
    pub warning: Option<&'a str>,
}

/// Renders the rating row with its controls.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let selector = rating_view(ctx.rating, ctx.appearance).on_change(Message::RatingChanged);

    let summary = text(format!(
        "{} / {}",
        ctx.rating.rating(),
        ctx.rating.maximum_rating()
    ))
    .size(typography::TITLE_MD);

    let counter = text(format!("Changes received: {}", ctx.notifications))
        .size(typography::CAPTION)
        .color(palette::GRAY_700);

    let bounds = column![
        stepper(
            format!("Maximum: {}", ctx.rating.maximum_rating()),
            Message::DecreaseMaximum,
            Message::IncreaseMaximum,
        ),
        stepper(
            format!("Minimum: {}", ctx.rating.minimum_rating()),
            Message::DecreaseMinimum,
            Message::IncreaseMinimum,
        ),
    ]
    .spacing(spacing::XS);

    let image_label = if ctx.appearance.image().is_some() {
        "Hide icons"
    } else {
        "Show icons"
    };

    let actions = row![
        button(text("Reset").size(typography::BODY)).on_press(Message::Reset),
        button(text("Change icon").size(typography::BODY)).on_press(Message::CycleIcon),
        button(text(image_label).size(typography::BODY)).on_press(Message::ToggleImage),
    ]
    .spacing(spacing::XS);

    let mut content = column![selector, summary, counter, bounds, actions]
        .spacing(spacing::MD)
        .align_x(Horizontal::Center);

    if let Some(warning) = ctx.warning {
        content = content.push(
            text(format!("Settings could not be read ({warning}), using defaults"))
                .size(typography::CAPTION)
                .color(palette::WARNING_500),
        );
    }

    Container::new(content)
        .padding(spacing::LG)
        .center(Length::Fill)
        .into()
}

fn stepper<'a>(label: String, decrease: Message, increase: Message) -> Element<'a, Message> {
    row![
        button(text("-").size(typography::BODY)).on_press(decrease),
        container(text(label).size(typography::BODY)).center_x(Length::Fixed(STEPPER_LABEL_WIDTH)),
        button(text("+").size(typography::BODY)).on_press(increase),
    ]
    .spacing(spacing::XS)
    .align_y(Vertical::Center)
    .into()
}
