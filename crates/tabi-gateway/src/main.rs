//! tabi-gateway: Travel Recommendation Gateway Main Binary
//!
//! Usage:
//!   tabi-gateway                    - Start the HTTP API server
//!   tabi-gateway index --file FILE  - Ingest a CSV dataset into the vector index
//!   tabi-gateway --help             - Show help

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use tabi_api::AppState;
use tabi_booking::{BookingClient, BookingServiceConfig};
use tabi_core::{Config, OpenAiClient, SessionStore};
use tabi_images::{ImageSearchClient, ImageSearchConfig};
use tabi_planner::{Ingestor, Planner};
use tabi_vector::{VectorClient, VectorIndexConfig};

/// Run mode
enum RunMode {
    /// HTTP API server
    Serve,
    /// Offline dataset ingestion
    Index { file: String },
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mode = parse_args()?;

    match mode {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("tabi-gateway {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    tracing::info!("Starting tabi-gateway...");
    tracing::info!("Chat model: {}", config.llm.chat_model);

    let llm = Arc::new(
        OpenAiClient::new(&config)
            .map_err(|e| anyhow::anyhow!("Failed to create OpenAI client: {}", e))?,
    );
    let vector = Arc::new(VectorClient::new(VectorIndexConfig::new(
        config.vector.api_key.clone(),
        config.vector.index_host.clone(),
    ))?);

    match mode {
        RunMode::Index { file } => {
            let ingestor = Ingestor::new(llm, vector);
            let count = ingestor.ingest_csv(&file).await?;
            tracing::info!("Indexed {} chunks from {}", count, file);
            Ok(())
        }
        RunMode::Serve => run_server(config, llm, vector).await,
        _ => Ok(()),
    }
}

/// Parse command line arguments
fn parse_args() -> anyhow::Result<RunMode> {
    let args: Vec<String> = std::env::args().collect();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "index" => {
                let mut file = None;
                while let Some(opt) = iter.next() {
                    if opt == "--file" || opt == "-f" {
                        file = iter.next().cloned();
                    }
                }
                let file = file.ok_or_else(|| anyhow::anyhow!("index requires --file FILE"))?;
                return Ok(RunMode::Index { file });
            }
            "--help" | "-h" => return Ok(RunMode::Help),
            "--version" | "-v" => return Ok(RunMode::Version),
            _ => {}
        }
    }

    Ok(RunMode::Serve)
}

/// Print help message
fn print_help() {
    println!("tabi-gateway - Travel Recommendation Gateway");
    println!();
    println!("Usage:");
    println!("  tabi-gateway                    Start the HTTP API server");
    println!("  tabi-gateway index --file FILE  Ingest a CSV dataset into the vector index");
    println!("  tabi-gateway --help             Show this help message");
    println!("  tabi-gateway --version          Show version");
    println!();
    println!("Environment Variables:");
    println!("  OPENAI_API_KEY         OpenAI API key (required)");
    println!("  PINECONE_API_KEY       Vector index API key (required)");
    println!("  PINECONE_INDEX_HOST    Vector index host URL (required)");
    println!("  SERPER_API_KEY         Serper image search API key");
    println!("  TABI_BOOKING_BASE_URL  Booking service base URL (optional)");
    println!("  API_PORT               HTTP API port (default: 5000)");
}

/// Run the HTTP API server
async fn run_server(
    config: Config,
    llm: Arc<OpenAiClient>,
    vector: Arc<VectorClient>,
) -> anyhow::Result<()> {
    let images = Arc::new(ImageSearchClient::new(ImageSearchConfig::new(
        config.images.api_key.clone(),
        config.images.gl.clone(),
        config.images.per_location,
    ))?);

    let sessions = SessionStore::new(
        Duration::from_secs(config.session.ttl_secs),
        config.session.max_messages,
    );

    let planner = Planner::new(llm, vector, images, sessions, config.vector.top_k);

    let booking = if config.booking.base_url.is_empty() {
        tracing::warn!("No booking service configured, surveys disabled");
        None
    } else {
        Some(Arc::new(BookingClient::new(BookingServiceConfig::new(
            config.booking.base_url.clone(),
            config.booking.timeout_secs,
        ))?))
    };

    let state = AppState { planner, booking };

    tabi_api::start_server(config.api.port, state).await
}
