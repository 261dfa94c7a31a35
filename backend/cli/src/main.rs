mod api;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use leafscan_config::Config;
use leafscan_gateway::{start_server, GatewayState};
use leafscan_vision::GeminiVision;

use api::IdentifyClient;

#[derive(Parser)]
#[command(name = "leafscan")]
#[command(about = "Leafscan — plant identification over a hosted vision model")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the identification HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Identify a plant from an image file via a running server
    Identify {
        /// Path to the image file
        image: PathBuf,
        /// Base URL of the Leafscan server
        #[arg(long, default_value = "http://localhost:8080")]
        server: String,
    },
    /// Show whether a Leafscan server is up
    Status {
        /// Base URL of the Leafscan server
        #[arg(long, default_value = "http://localhost:8080")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let mut config = Config::from_env().context("configuration error")?;
            if let Some(port) = port {
                config.port = port;
            }
            logging::init_logger(&config.log_level, true);
            run_server(config).await?;
        }
        Commands::Identify { image, server } => {
            logging::init_logger("warn", false);
            let asset = leafscan_capture::from_file(&image)?;
            let result = IdentifyClient::new(server).identify(&asset).await?;
            println!("Name: {}", result.name);
            println!("\nDescription: {}", result.description);
            println!("\nCare Instructions: {}", result.care_instructions);
        }
        Commands::Status { server } => {
            let client = reqwest::Client::new();
            match client.get(format!("{server}/api/health")).send().await {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("Leafscan is not running at {server}");
                }
            }
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    let model = Arc::new(GeminiVision::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    ));
    let state = GatewayState { model };
    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port)
        .parse()
        .context("invalid bind address")?;
    start_server(addr, state).await
}
