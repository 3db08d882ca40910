// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use iced_folio::logging;
use std::path::PathBuf;

const HELP: &str = "\
iced_folio - animated portfolio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <id>         Interface language (e.g. en-US, fr)
  --route <path>      Initial page: /portfolio or /documentation
  --content <file>    Portfolio content TOML replacing the built-in content
  --config-dir <dir>  Directory holding settings.toml
  -h, --help          Print this help

ENVIRONMENT:
  ICED_FOLIO_LOG         Log filter (default: iced_folio=info)
  ICED_FOLIO_CONFIG_DIR  Config directory when --config-dir is not given
";

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        route: opt_value(&mut args, "--route"),
        content: opt_value::<String>(&mut args, "--content").map(PathBuf::from),
        config_dir: opt_value(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Reads an optional flag value, logging and ignoring malformed ones.
fn opt_value<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(flag = key, %error, "ignoring invalid flag value");
            None
        }
    }
}
