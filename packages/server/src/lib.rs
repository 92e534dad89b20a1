#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the hazard map.
//!
//! Serves thin proxy endpoints that forward a `state` query parameter to
//! the upstream government APIs browser clients cannot call directly
//! (CORS), plus two diagnostic probes that confirm the FEMA and NOAA APIs
//! respond. Proxies do not substitute fallback data — they surface a 500
//! with `"fallback": true` so the browser-side accessor generates its own.

pub mod handlers;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

/// Shared application state.
pub struct AppState {
    /// HTTP client used for every upstream call.
    pub client: reqwest::Client,
}

/// Starts the hazard map API server.
///
/// Reads `BIND_ADDR` and `PORT` from the environment (defaulting to
/// `127.0.0.1:8080`). This is a regular async function — the caller
/// provides the runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if the shared HTTP client cannot be built.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let client = hazard_map_source::build_http_client().expect("Failed to build HTTP client");
    let state = web::Data::new(AppState { client });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/demographics", web::get().to(handlers::demographics))
                    .route("/hospitals", web::get().to(handlers::hospitals))
                    .route("/risk-index", web::get().to(handlers::risk_index))
                    .route("/schools", web::get().to(handlers::schools))
                    .route("/test-fema", web::get().to(handlers::test_fema))
                    .route("/test-noaa", web::get().to(handlers::test_noaa)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
