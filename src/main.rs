// SPDX-License-Identifier: MPL-2.0
use snap_toast::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();

    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --config-dir: {err}");
        None
    });
    let max_visible = args.opt_value_from_str("--max-visible").unwrap_or_else(|err| {
        log::warn!("ignoring --max-visible: {err}");
        None
    });

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    app::run(Flags {
        config_dir,
        max_visible,
    })
}
