use anyhow::{anyhow, Result};
use clap::Parser;
use splitter::config::{SplitterConfig, Theme};
use splitter::session::Session;
use splitter::shell::{self, TerminalDisplay, HELP};
use std::io::{self, IsTerminal};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Split shared purchases between friends.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// List of participants.
    #[arg(required = true, num_args = 1..)]
    participants: Vec<String>,

    /// Use the light color theme.
    #[arg(long = "light-theme", alias = "light_theme")]
    light_theme: bool,

    /// Log filter directives, used when RUST_LOG is not set.
    #[arg(long, default_value = splitter::config::DEFAULT_LOG_FILTER)]
    log_filter: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = SplitterConfig::new(args.participants, Theme::from_light_flag(args.light_theme))
        .with_log_filter(args.log_filter)
        .checked()
        .map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            anyhow!("invalid configuration: {}", messages.join("; "))
        })?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|err| anyhow!("invalid log filter: {err}"))?;
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    info!(participants = ?config.participants, theme = ?config.theme, "Starting splitter");

    let stdout = io::stdout();
    let mut display = TerminalDisplay::new(stdout.lock(), config.theme);
    if !stdout.is_terminal() {
        display = display.without_color();
    }
    let mut session = Session::new(config.ledger(), display);

    println!("{HELP}");
    let stdin = io::stdin();
    shell::run(&mut session, stdin.lock(), &mut io::stdout())?;

    Ok(())
}
