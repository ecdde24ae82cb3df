use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("biofile_check=debug,info")
    } else {
        EnvFilter::new("biofile_check=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Check(args) => {
            cli::check::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Pair(args) => {
            cli::pair::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Categories => {
            cli::run_categories(cli.format)?;
        }
    }

    Ok(())
}
