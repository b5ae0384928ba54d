// SPDX-License-Identifier: MPL-2.0
//! Demo host application for the rating widget.
//!
//! The `App` struct owns the rating model and its appearance, seeds them from
//! `settings.toml` and CLI flags, and applies the values the widget publishes.
//! Buttons exercise the programmatic setters so bound changes and icon swaps
//! can be checked by hand.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::paths;
use crate::rating::{Appearance, RatingState};
use crate::ui::icons;
use iced::widget::svg;
use iced::{window, Element, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 360;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    rating: RatingState,
    appearance: Appearance,
    /// Rating restored by [`Message::Reset`].
    initial_rating: u32,
    /// Number of value-changed notifications received from the widget.
    notifications: u32,
    /// Icon to restore after [`Message::ToggleImage`] hid it.
    hidden_image: Option<svg::Handle>,
    config_warning: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        let rating = RatingState::default();
        Self {
            initial_rating: rating.rating(),
            rating,
            appearance: Appearance::default(),
            notifications: 0,
            hidden_image: None,
            config_warning: None,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes state from the settings file, then applies CLI overrides
    /// through the regular setters so they are clamped the same way.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let mut app = Self::from_config(&config);
        app.config_warning = config_warning;

        if let Some(maximum) = flags.maximum {
            app.rating.set_maximum_rating(maximum);
        }
        if let Some(minimum) = flags.minimum {
            app.rating.set_minimum_rating(minimum);
        }
        if let Some(rating) = flags.rating {
            app.rating.set_rating(rating);
        }
        app.initial_rating = app.rating.rating();

        tracing::info!(
            rating = app.rating.rating(),
            minimum = app.rating.minimum_rating(),
            maximum = app.rating.maximum_rating(),
            "rating demo started"
        );

        (app, Task::none())
    }

    /// Builds the application from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &config::Config) -> Self {
        let rating = config.rating_state();
        Self {
            initial_rating: rating.rating(),
            rating,
            appearance: config.appearance(),
            ..Self::default()
        }
    }

    fn title(&self) -> String {
        format!(
            "IcedRating - {} / {}",
            self.rating.rating(),
            self.rating.maximum_rating()
        )
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    #[must_use]
    pub fn rating(&self) -> &RatingState {
        &self.rating
    }

    #[must_use]
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    #[must_use]
    pub fn notifications(&self) -> u32 {
        self.notifications
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RatingChanged(value) => {
                self.notifications = self.notifications.saturating_add(1);
                self.rating.set_rating(value);
            }
            Message::IncreaseMaximum => {
                let maximum = self.rating.maximum_rating().saturating_add(1);
                self.rating.set_maximum_rating(maximum);
            }
            Message::DecreaseMaximum => {
                let maximum = self.rating.maximum_rating().saturating_sub(1);
                self.rating.set_maximum_rating(maximum);
            }
            Message::IncreaseMinimum => {
                let minimum = self.rating.minimum_rating().saturating_add(1);
                self.rating.set_minimum_rating(minimum);
            }
            Message::DecreaseMinimum => {
                let minimum = self.rating.minimum_rating().saturating_sub(1);
                self.rating.set_minimum_rating(minimum);
            }
            Message::Reset => {
                self.rating.set_rating(self.initial_rating);
            }
            Message::CycleIcon => {
                let next = if self.appearance.image() == Some(&icons::star()) {
                    icons::heart()
                } else {
                    icons::star()
                };
                self.hidden_image = None;
                self.appearance.set_image(Some(next));
            }
            Message::ToggleImage => {
                if let Some(image) = self.appearance.image().cloned() {
                    self.hidden_image = Some(image);
                    self.appearance.set_image(None);
                } else {
                    let image = self.hidden_image.take().unwrap_or_else(icons::star);
                    self.appearance.set_image(Some(image));
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            rating: &self.rating,
            appearance: &self.appearance,
            notifications: self.notifications,
            warning: self.config_warning.as_deref(),
        })
    }
}
