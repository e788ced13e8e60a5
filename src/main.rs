mod cli;

use clap::Parser;
use cli::{Cli, Commands, ServerArgs};
use contactbook::{api, config::Config};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let args = match cli.command {
        Some(Commands::Server(args)) => args,
        None => ServerArgs::default(),
    };

    let mut config = Config::load(args.config)
        .inspect_err(|err| error!(error = %err, "Failed to load configuration"))?;

    if let Some(address) = args.address {
        config.server.bind_addr = address;
    }

    api::run(config)
        .await
        .inspect_err(|err| error!(error = %err, "Server failed"))?;

    Ok(())
}
