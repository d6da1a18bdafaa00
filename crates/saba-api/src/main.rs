use std::env;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod adapter;
mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let addr = env::var("SABA_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let state = AppState {
        lexicon: saba_meds::lexicon::Lexicon::builtin(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Scale metadata — public schema data
        .route("/scales", get(routes::scales::list_scales))
        .route("/scales/{id}", get(routes::scales::get_scale_detail))
        // Scoring and interventions
        .route("/assess", post(routes::assess::assess))
        // Medication analysis
        .route(
            "/medications/check",
            post(routes::medications::check_medications),
        )
        .route(
            "/medications/expand",
            post(routes::medications::expand_medication_text),
        )
        .route(
            "/medications/search",
            get(routes::medications::search_medications),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    tracing::info!(addr = %addr, "starting saba-api");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
