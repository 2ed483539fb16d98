//! Rutas de consultas (leads)
//!
//! El alta es pública (formulario de contacto); el resto es de admin.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::enquiry_controller::EnquiryController;
use crate::dto::enquiry_dto::{
    AddNoteRequest, CreateEnquiryRequest, EnquiryFilter, EnquiryListQuery, UpdateEnquiryRequest,
};
use crate::middleware::auth::AuthAdmin;
use crate::models::enquiry::Enquiry;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_enquiry_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_enquiry).get(list_enquiries))
        .route(
            "/:id",
            get(get_enquiry).put(update_enquiry).delete(delete_enquiry),
        )
        .route("/:id/notes", post(add_note))
}

async fn create_enquiry(
    State(state): State<AppState>,
    Json(request): Json<CreateEnquiryRequest>,
) -> Result<(StatusCode, Json<Enquiry>), AppError> {
    let controller = EnquiryController::new(state.pool.clone());
    let enquiry = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(enquiry)))
}

async fn list_enquiries(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(query): Query<EnquiryListQuery>,
) -> Result<Json<Vec<Enquiry>>, AppError> {
    let filter = EnquiryFilter::try_from(query)?;
    let controller = EnquiryController::new(state.pool.clone());
    let enquiries = controller.list(filter).await?;
    Ok(Json(enquiries))
}

async fn get_enquiry(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<Enquiry>, AppError> {
    let controller = EnquiryController::new(state.pool.clone());
    let enquiry = controller.get_by_id(id).await?;
    Ok(Json(enquiry))
}

async fn update_enquiry(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEnquiryRequest>,
) -> Result<Json<Enquiry>, AppError> {
    let controller = EnquiryController::new(state.pool.clone());
    let enquiry = controller.update(id, request).await?;
    Ok(Json(enquiry))
}

async fn add_note(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<AddNoteRequest>,
) -> Result<Json<Enquiry>, AppError> {
    let controller = EnquiryController::new(state.pool.clone());
    let enquiry = controller.add_note(id, &request.note).await?;
    Ok(Json(enquiry))
}

async fn delete_enquiry(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = EnquiryController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Enquiry deleted successfully"
    })))
}
