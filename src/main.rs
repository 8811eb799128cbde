use iced_flash::app::{self, paths, Flags};

const HELP: &str = "\
IcedFlash - sign-in desktop app with flash toast notifications

USAGE:
  iced_flash [OPTIONS] [HANDOFF_FILE]

ARGS:
  [HANDOFF_FILE]      TOML document of pending flash messages, shown once
                      (default: flashes.toml in the data directory)

OPTIONS:
  --lang <LOCALE>     Locale override in BCP-47 form (e.g. fr, en-US)
  --data-dir <PATH>   Directory for accounts and state files
  --config-dir <PATH> Directory containing config.toml
  -h, --help          Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        data_dir: args.opt_value_from_str("--data-dir").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        handoff_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}
