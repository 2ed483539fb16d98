//! Rutas de testimonios

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::testimonial_controller::TestimonialController;
use crate::dto::testimonial_dto::{CreateTestimonialRequest, UpdateTestimonialRequest};
use crate::middleware::auth::AuthAdmin;
use crate::models::testimonial::Testimonial;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_testimonial_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_testimonials).post(create_testimonial))
        .route("/:id", axum::routing::put(update_testimonial).delete(delete_testimonial))
}

async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    let controller = TestimonialController::new(state.pool.clone());
    let testimonials = controller.list().await?;
    Ok(Json(testimonials))
}

async fn create_testimonial(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(request): Json<CreateTestimonialRequest>,
) -> Result<(StatusCode, Json<Testimonial>), AppError> {
    let controller = TestimonialController::new(state.pool.clone());
    let testimonial = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

async fn update_testimonial(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTestimonialRequest>,
) -> Result<Json<Testimonial>, AppError> {
    let controller = TestimonialController::new(state.pool.clone());
    let testimonial = controller.update(id, request).await?;
    Ok(Json(testimonial))
}

async fn delete_testimonial(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TestimonialController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Testimonial deleted successfully"
    })))
}
