use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// techfolks - Website inquiry intake
#[derive(Parser)]
#[command(name = "techfolks")]
#[command(about = "Validate and deliver website project inquiries", long_about = None)]
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
    /// Load and validate configuration, then exit
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = techfolks::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    techfolks::observability::init_observability(&config.observability)?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::CheckConfig => {
            tracing::info!(
                provider = ?config.delivery.provider,
                recipient = %config.delivery.recipient_email,
                "Configuration is valid"
            );
            Ok(())
        }
    }
}
