use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use waitlens::adapter::inbound::cli::{self, command::Cli, diagnostic};
use waitlens::infrastructure::config::logging::LoggingConfig;
use waitlens::infrastructure::config::Config;

/// Logging settings from the config file, raised by `-v` flags.
fn logging_for(cli: &Cli) -> LoggingConfig {
    let mut logging = Config::load_or_default(&cli.config)
        .map(|config| config.logging)
        .unwrap_or_default();
    match cli.verbose {
        0 => {}
        1 => logging.level = "debug".into(),
        _ => logging.level = "trace".into(),
    }
    logging
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    logging_for(&args).init();
    debug!(command = ?args.command, "waitlens starting");

    match cli::run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let source = std::fs::read_to_string(&args.config).ok();
            eprintln!("{:?}", diagnostic::report(e, source.as_deref()));
            ExitCode::FAILURE
        }
    }
}
