// SPDX-License-Identifier: MPL-2.0
use iced_quiz::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_quiz - audio and image quiz client

USAGE:
  iced_quiz [OPTIONS] [ROUTE]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. ja, en-US)
  --api-url <URL>       Backend base URL
  --count <N>           Questions per session
  --config-dir <DIR>    Directory containing settings.toml
  -h, --help            Print this help

ROUTE:
  Page to open first: /, /quiz/<category> or /quiz/<category>/results
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let api_url = args.opt_value_from_str("--api-url")?;
    let question_count = args.opt_value_from_str("--count")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let start_route = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        api_url,
        question_count,
        config_dir,
        start_route,
    })
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
