//! CLI module graph and command dispatch.

pub mod activity;
pub mod command;
pub mod config;
pub mod context;
pub mod diagnostic;
pub mod entry;
pub mod export;
pub mod import;
pub mod output;
pub mod paths;
pub mod report;
pub mod summary;
pub mod top;

use command::{Cli, Commands, ConfigCommand, EntryCommand};
use context::Context;

use crate::error::Result;

/// Run a parsed command line to completion.
///
/// Logging must already be initialized; output settings are applied here.
pub async fn run(cli: &Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Commands::Config(command) = &cli.command {
        return match command {
            ConfigCommand::Init(args) => config::execute_init(&cli.config, args.force),
            ConfigCommand::Show => config::execute_show(&cli.config),
            ConfigCommand::Validate => config::execute_validate(&cli.config),
        };
    }

    let ctx = Context::load(&cli.config, cli.database.as_deref())?;
    match &cli.command {
        Commands::Report(args) => report::execute(&ctx, args).await,
        Commands::Export(args) => export::execute(&ctx, args).await,
        Commands::Summary(args) => summary::execute(&ctx, args).await,
        Commands::Activity(args) => activity::execute(&ctx, args).await,
        Commands::Top(args) => top::execute(&ctx, args).await,
        Commands::Import(args) => import::execute(&ctx, &args.file),
        Commands::Entry(EntryCommand::SetStatus(args)) => entry::execute_set_status(&ctx, args),
        Commands::Config(_) => Ok(()),
    }
}
