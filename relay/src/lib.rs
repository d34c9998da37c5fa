//! K-snack face analysis relay
//!
//! A one-route HTTP server that exists purely so the Gemini credential
//! never ships to the browser: it accepts the encoded image, performs
//! the same analysis call the client would, and returns the validated
//! result. No persistence, no queueing, no business logic beyond that.

use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::post,
    Router,
};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{signal, SignalKind},
    },
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod upstream;

use config::Config;
use routes::snack_match_handler;
use state::AppState;

/// Build the application router for the given state
///
/// Split out from `start_server` so tests can drive it without a
/// listener. Non-POST requests on the route get 405 from the method
/// router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/snack-match", post(snack_match_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    let address = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(config);

    let app = router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await.expect("bind failed");
    info!("Relay running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    info!("Relay shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
