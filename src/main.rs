use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;

use cli::Cli;

fn main() -> Result<()> {
    let env_file = config::load_environment();

    // Logs go to stderr so command output can be piped
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Raincast starting up");
    if let Some(path) = env_file {
        debug!("Loaded environment from {}", path.display());
    }

    let cli = Cli::parse();
    cli.run()?;

    Ok(())
}
