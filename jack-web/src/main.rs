//! jack-web - Main entry point
//!
//! Serves the channel/video/comment catalog over HTTP.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use jack_common::config::{resolve_root_folder, RootFolder, TomlConfig};
use jack_web::validation::{ChannelDirectory, OfflineDirectory, Validator, YouTubeDirectory};
use jack_web::{build_router, AppState};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Command-line arguments for jack-web
#[derive(Parser, Debug)]
#[command(name = "jack-web")]
#[command(about = "Catalog of video channels, their videos and comments")]
#[command(version)]
struct Args {
    /// Folder holding jack.db (falls back to JACK_ROOT_FOLDER, then config.toml)
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// Address to bind
    #[arg(short, long, env = "JACK_BIND")]
    bind: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "JACK_PORT")]
    port: Option<u16>,

    /// YouTube Data API key; without one only id formats are checked
    #[arg(long, env = "JACK_YOUTUBE_API_KEY", hide_env_values = true)]
    youtube_api_key: Option<String>,

    /// Explicit config file instead of the platform default
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jack_web=debug,jack_common=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting jack-web v{}", env!("CARGO_PKG_VERSION"));

    let toml_config = match &args.config {
        Some(path) => TomlConfig::load(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => TomlConfig::load_default(),
    };

    let root_folder = RootFolder::new(resolve_root_folder(args.root_folder.as_deref(), &toml_config));
    root_folder
        .ensure_exists()
        .context("Failed to initialize root folder")?;

    let db_path = root_folder.database_path();
    info!("Database path: {}", db_path.display());

    let pool = match jack_common::db::init_database(&db_path).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e.into());
        }
    };

    let api_key = args
        .youtube_api_key
        .or(toml_config.youtube_api_key)
        .filter(|key| !key.trim().is_empty());
    let directory: Arc<dyn ChannelDirectory> = match api_key {
        Some(key) => Arc::new(YouTubeDirectory::new(key)?),
        None => {
            warn!("No YouTube API key configured; channel and video ids are checked for format only");
            Arc::new(OfflineDirectory)
        }
    };
    let validator = Validator::new(directory);
    info!("Validation directory: {}", validator.directory_name());

    let app = build_router(AppState::new(pool, validator));

    let bind = args
        .bind
        .or(toml_config.bind)
        .unwrap_or_else(|| DEFAULT_BIND.to_string());
    let port = args.port.or(toml_config.port).unwrap_or(DEFAULT_PORT);
    let ip: IpAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", bind))?;
    let addr = SocketAddr::new(ip, port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("jack-web listening on http://{}", addr);
    info!("Health check: http://{}/api/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
