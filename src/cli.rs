use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contactbook")]
#[command(about = "In-memory contacts HTTP service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default when no command is given)
    Server(ServerArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct ServerArgs {
    /// Address to bind the HTTP server to, overriding the configured one
    #[arg(long)]
    pub address: Option<SocketAddr>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
