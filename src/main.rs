use anyhow::Result;
use clap::Parser;

use treeprint::cli::{Cli, Command};
use treeprint::commands;
use treeprint::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::Render(args) => {
            tracing::info!(?args, "Starting render");
            commands::render::run(args, &config)?;
        }
        Command::Dir(args) => {
            tracing::info!(?args, "Starting dir");
            commands::dir::run(args, &config)?;
        }
        Command::Demo => {
            tracing::info!("Starting demo");
            commands::render::run_demo(&config)?;
        }
        Command::Completions(args) => {
            tracing::info!(?args, "Starting completions");
            commands::completions::run(args);
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("treeprint={}", level)));

    // Logs go to stderr so rendered trees on stdout stay clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
