/// Tally Server - playlist duration statistics over HTTP
use axum::{
    routing::{get, post},
    Router,
};
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, sync::Arc};
use tally_client::{PlaylistReference, YoutubeClient};
use tally_server::{api, config::ServerConfig, state::AppState};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tally-server")]
#[command(about = "Playlist duration statistics server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Aggregate a single playlist and print the statistics
    Stats {
        /// Playlist URL or bare playlist id
        reference: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally_server=info,tally_client=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            serve().await?;
        }
        Commands::Stats { reference } => {
            stats(&reference).await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Tally server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize the YouTube client
    let client = Arc::new(YoutubeClient::new(config.client_config())?);
    tracing::info!("YouTube client initialized");

    // Build application state and router
    let app_state = AppState::new(client);
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(app_state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/playlist", post(api::playlist::playlist_stats));

    Router::new()
        .nest("/api", routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn stats(reference: &str) -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;

    let client = YoutubeClient::new(config.client_config())?;
    let reference = PlaylistReference::parse(reference)?;
    let stats = client.aggregate(&reference).await?;

    println!("Playlist {}", reference);
    println!("  videos:  {}", stats.video_details.len());
    println!("  total:   {} s", stats.total_duration);
    println!("  average: {:.1} s", stats.average_duration);
    if stats.unresolved_count > 0 {
        println!("  unresolved: {}", stats.unresolved_count);
    }

    Ok(())
}
