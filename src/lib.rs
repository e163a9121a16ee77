//! Backend del registro de covoiturage
//!
//! El núcleo (registro de usuarios/vehículos, ledger de rides, motor de
//! matching) vive en esta librería; `main.rs` solo levanta el servidor HTTP.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Crear el router principal de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.is_production() {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/user", routes::user_routes::create_user_router())
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/ride", routes::ride_routes::create_ride_router())
        .nest("/api/stats", routes::stats_routes::create_stats_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡API de covoiturage funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
