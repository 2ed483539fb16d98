//! Ensamblado del router de la API

pub mod admin_routes;
pub mod enquiry_routes;
pub mod settings_routes;
pub mod testimonial_routes;
pub mod vehicle_routes;

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::middleware::rate_limit::{rate_limit_middleware, RateLimitState};
use crate::state::AppState;

/// Construir el router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    let global_rate_limit = RateLimitState::new(&state.config);
    let login_rate_limit = RateLimitState::strict(&state.config);

    Router::new()
        .route("/health", get(health))
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/enquiries", enquiry_routes::create_enquiry_router())
        .nest(
            "/api/testimonials",
            testimonial_routes::create_testimonial_router(),
        )
        .nest("/api/settings", settings_routes::create_settings_router())
        .nest("/api/admin", admin_routes::create_admin_router(login_rate_limit))
        .layer(from_fn_with_state(global_rate_limit, rate_limit_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config))
        .with_state(state)
}

/// Probe de disponibilidad
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
