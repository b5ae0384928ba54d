// SPDX-License-Identifier: MPL-2.0
//! Built-in rating icons.
//!
//! Icons are monochrome SVGs embedded at compile time via `include_bytes!`.
//! They are drawn black so the widget can tint them freely. Handles are
//! cached with `OnceLock`, so every call returns a clone of the same handle
//! and iced's SVG cache rasterizes each icon once per size.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! appearance.set_image(Some(icons::heart()));
//! ```

use iced::widget::svg::Handle;
use std::sync::OnceLock;

/// Defines an icon function returning a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(star, "star.svg", "Five-pointed star, the default rating icon.");
define_icon!(heart, "heart.svg", "Heart, for \"favorite\" style ratings.");
