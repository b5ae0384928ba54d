// SPDX-License-Identifier: MPL-2.0
//! `iced_rating` is a star rating selector widget for the Iced GUI framework.
//!
//! The crate is split between a renderer-independent model
//! ([`rating`]: bounded state, hit-testing, gesture recognition) and the
//! iced widget that draws it ([`ui::widgets::RatingView`]). A small demo
//! application lives in [`app`].

pub mod app;
pub mod config;
pub mod error;
pub mod paths;
pub mod rating;
pub mod ui;
