// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toast=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --lang");
            None
        }),
        position: args.opt_value_from_str("--position").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --position");
            None
        }),
    };

    for unused in args.finish() {
        tracing::warn!(argument = ?unused, "ignoring unknown argument");
    }

    app::run(flags)
}
