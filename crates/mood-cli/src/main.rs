use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mood_cli::commands::{heatmap, log, show, status, streak};
use mood_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so `heatmap --json` output stays parseable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    let store = config.store();

    let mut stdout = std::io::stdout().lock();
    let today = Local::now().date_naive();

    match command {
        Commands::Log { mood, reason } => {
            log::run(
                &mut stdout,
                &store,
                *mood,
                &reason.join(" "),
                Local::now().naive_local(),
            )?;
        }
        Commands::Streak => streak::run(&mut stdout, &store, today)?,
        Commands::Heatmap { json } => {
            heatmap::run(&mut stdout, &mut std::io::stderr().lock(), &store, *json)?;
        }
        Commands::Show => show::run(&mut stdout, &store)?,
        Commands::Status => status::run(&mut stdout, &store, today)?,
    }

    Ok(())
}
