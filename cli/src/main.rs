
mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{batch, validate};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "geovalid=warn",
        1 => "geovalid=info",
        _ => "geovalid=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    match &cli.command {
        Commands::Validate(args) => validate::run(&cli, args),
        Commands::Batch(args) => batch::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
