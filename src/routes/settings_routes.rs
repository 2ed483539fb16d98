//! Rutas de configuración del sitio (documento singleton)

use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::settings_controller::SettingsController;
use crate::dto::settings_dto::UpdateSettingsRequest;
use crate::middleware::auth::AuthAdmin;
use crate::models::settings::Settings;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_settings_router() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(update_settings))
}

async fn get_settings(State(state): State<AppState>) -> Result<Json<Settings>, AppError> {
    let controller = SettingsController::new(state.pool.clone());
    let settings = controller.get().await?;
    Ok(Json(settings))
}

async fn update_settings(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<Settings>, AppError> {
    let controller = SettingsController::new(state.pool.clone());
    let settings = controller.update(request).await?;
    Ok(Json(settings))
}
