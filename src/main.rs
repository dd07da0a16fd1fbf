use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("workcadence=debug")
    } else {
        EnvFilter::new("workcadence=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Due(args) => cli::due::execute(&cli.config, args),
        Commands::Series(args) => cli::series::execute(&cli.config, args),
        Commands::Cycle(args) => cli::cycle::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
