// SPDX-License-Identifier: MPL-2.0
use iced_rating::app::{self, Flags};
use tracing::Level;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        rating: parse_or_warn(args.opt_value_from_str("--rating"), "--rating"),
        minimum: parse_or_warn(args.opt_value_from_str("--min"), "--min"),
        maximum: parse_or_warn(args.opt_value_from_str("--max"), "--max"),
        config_dir: parse_or_warn(args.opt_value_from_str("--config-dir"), "--config-dir"),
        verbose: args.contains(["-v", "--verbose"]),
    };

    let level = if flags.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    for unused in args.finish() {
        tracing::warn!(argument = ?unused, "ignoring unknown argument");
    }

    app::run(flags)
}

/// Keeps startup going when a flag value does not parse.
fn parse_or_warn<T>(value: Result<Option<T>, pico_args::Error>, flag: &str) -> Option<T> {
    value.unwrap_or_else(|err| {
        eprintln!("Ignoring invalid {flag}: {err}");
        None
    })
}
