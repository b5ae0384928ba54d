// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

/// Messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The user tapped or dragged the rating row.
    RatingChanged(u32),
    IncreaseMaximum,
    DecreaseMaximum,
    IncreaseMinimum,
    DecreaseMinimum,
    /// Programmatically restore the initial rating.
    Reset,
    /// Switch between the star and heart icons.
    CycleIcon,
    /// Remove or restore the icon image.
    ToggleImage,
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Initial rating (`--rating`).
    pub rating: Option<u32>,
    /// Minimum rating (`--min`).
    pub minimum: Option<u32>,
    /// Maximum rating (`--max`).
    pub maximum: Option<u32>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Enables debug logging (`--verbose`).
    pub verbose: bool,
}
