//! Rutas de autenticación y panel de administración
//!
//! El login lleva un rate limit estricto por IP (ver middleware/rate_limit.rs).

use axum::{
    extract::State,
    middleware::from_fn_with_state,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::admin_controller::AdminController;
use crate::dto::admin_dto::{AdminProfile, LoginRequest, LoginResponse, StatsResponse};
use crate::middleware::auth::AuthAdmin;
use crate::middleware::rate_limit::{rate_limit_middleware, RateLimitState};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub fn create_admin_router(login_rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            post(login).layer(from_fn_with_state(login_rate_limit, rate_limit_middleware)),
        )
        .route("/me", get(me))
        .route("/stats", get(stats))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let jwt_config = JwtConfig::from(&state.config);
    let response = controller.login(request, &jwt_config).await?;
    Ok(Json(response))
}

async fn me(
    State(state): State<AppState>,
    AuthAdmin(admin_id): AuthAdmin,
) -> Result<Json<AdminProfile>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let profile = controller.me(admin_id).await?;
    Ok(Json(profile))
}

async fn stats(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> Result<Json<StatsResponse>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let stats = controller.stats().await?;
    Ok(Json(stats))
}
