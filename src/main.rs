use anyhow::Result;
use clap::{Parser, Subcommand};
use kairos::cli::SubmitArgs;

/// kairos - Kairos Performance marketing site
#[derive(Parser)]
#[command(name = "kairos")]
#[command(about = "Marketing site and contact pipeline for Kairos Performance", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send a contact submission to a running site
    Submit(SubmitArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = kairos::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    kairos::observability::init_observability(
        "kairos",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => kairos::cli::serve(config, host, port).await,
        Commands::Submit(args) => kairos::cli::submit(config, args).await,
    }
}
