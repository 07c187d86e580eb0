//! HTTP front for the travel catalog.
//!
//! | Method | Path                       | Body / query            |
//! |--------|----------------------------|-------------------------|
//! | GET    | `/api/destinations`        |                         |
//! | GET    | `/api/hotels`              |                         |
//! | GET    | `/api/activities`          |                         |
//! | POST   | `/api/travel-preferences`  | `{destination, duration, travelingWith}` |
//! | GET    | `/api/search`              | `?q=<query>&kind=<tab>` |
//! | GET    | `/health`                  |                         |
//!
//! Configuration comes from `WAYFARE_*` environment variables, see [`config::Config`].
use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};

use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::Config;
use routes::{
    activities_handler, destinations_handler, health_handler, hotels_handler,
    preferences_handler, search_handler,
};
use state::AppState;

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading configuration...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config);

    info!("Starting server...");
    let app = router(state.clone());

    let address = state.config.address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(state.config.cors_max_age));

    Router::new()
        .route("/api/destinations", get(destinations_handler))
        .route("/api/hotels", get(hotels_handler))
        .route("/api/activities", get(activities_handler))
        .route("/api/travel-preferences", post(preferences_handler))
        .route("/api/search", get(search_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
