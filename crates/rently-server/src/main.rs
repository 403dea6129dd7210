use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use rently_api::auth::{self, AppStateInner};
use rently_api::properties;
use rently_media::{MediaClient, MediaConfig};

/// Generous enough for five photos plus the text fields.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rently=debug,tower_http=info".into()),
        )
        .init();

    // Config
    let host = std::env::var("RENTLY_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("RENTLY_PORT")
        .unwrap_or_else(|_| "5000".into())
        .parse()?;
    let db_path: PathBuf = std::env::var("RENTLY_DB_PATH")
        .unwrap_or_else(|_| "rently.db".into())
        .into();
    let upload_dir: PathBuf = std::env::var("RENTLY_UPLOAD_DIR")
        .unwrap_or_else(|_| "./uploads".into())
        .into();
    let public_dir: PathBuf = std::env::var("RENTLY_PUBLIC_DIR")
        .unwrap_or_else(|_| ".".into())
        .into();

    let media_url = std::env::var("RENTLY_MEDIA_URL").unwrap_or_default();
    if media_url.is_empty() {
        eprintln!("FATAL: RENTLY_MEDIA_URL is unset.");
        eprintln!("       Expected format: cloudinary://<api_key>:<api_secret>@<cloud_name>");
        eprintln!("       Set it in your .env file and restart.");
        std::process::exit(1);
    }
    let media = MediaClient::new(MediaConfig::from_url(&media_url)?);

    // Init database and the staging directory for in-flight uploads
    let db = rently_db::Database::open(&db_path)?;
    tokio::fs::create_dir_all(&upload_dir).await?;

    // Shared state
    let state: auth::AppState = Arc::new(AppStateInner {
        db,
        media,
        upload_dir,
    });

    // Routes
    let api = Router::new()
        .route("/owner/signup", post(auth::owner_signup))
        .route("/owner/login", post(auth::owner_login))
        .route("/user/signup", post(auth::renter_signup))
        .route("/user/login", post(auth::renter_login))
        .route("/upload", post(properties::upload_property))
        .route("/houses", get(properties::list_houses))
        .route("/property/{id}", delete(properties::delete_property))
        .route("/health", get(health))
        .with_state(state);

    // Any unmatched path gets the static entry document (single-page app).
    let static_files =
        ServeDir::new(&public_dir).fallback(ServeFile::new(public_dir.join("index.html")));

    let app = Router::new()
        .nest("/api", api)
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Rently server listening on {}", addr);
    info!("Serving static assets from {}", public_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// GET /api/health — liveness check (no auth).
async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
