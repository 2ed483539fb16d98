//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            details: None,
        }
    }
}

/// Los detalles internos solo se exponen en modo desarrollo
fn development_details(detail: serde_json::Value) -> Option<serde_json::Value> {
    let is_development = std::env::var("ENVIRONMENT")
        .map(|e| e == "development")
        .unwrap_or(true);
    is_development.then_some(detail)
}

/// Aplanar errores de validator a un mensaje legible
fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let detail = errs
                .first()
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| {
                    errs.first()
                        .map(|e| e.code.to_string())
                        .unwrap_or_else(|| "invalid".to_string())
                });
            format!("{}: {}", field, detail)
        })
        .collect();
    parts.sort();
    parts.join(", ")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => match &e {
                sqlx::Error::RowNotFound => (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("Resource not found"),
                ),
                sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                    tracing::warn!("Duplicate key: {}", db_err);
                    (StatusCode::BAD_REQUEST, ErrorResponse::new("Duplicate entry"))
                }
                _ => {
                    tracing::error!("Database error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse {
                            error: "Internal Server Error".to_string(),
                            details: development_details(json!({ "sql_error": e.to_string() })),
                        },
                    )
                }
            },

            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(validation_message(&e)),
                )
            }

            AppError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized access: {}", msg);
                (StatusCode::UNAUTHORIZED, ErrorResponse::new(msg))
            }

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),

            AppError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        details: development_details(json!({ "internal_error": msg })),
                    },
                )
            }

            AppError::RateLimitExceeded => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorResponse::new("Too many requests. Please try again later"),
            ),

            AppError::Jwt(msg) => {
                tracing::warn!("JWT error: {}", msg);
                (StatusCode::UNAUTHORIZED, ErrorResponse::new(msg))
            }

            AppError::Hash(msg) => {
                tracing::error!("Hash error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("An error occurred while processing credentials"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found", resource))
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
        rating: i32,
    }

    #[test]
    fn test_validation_message_joins_fields() {
        let probe = Probe {
            name: String::new(),
            rating: 9,
        };
        let errors = probe.validate().unwrap_err();
        let message = validation_message(&errors);
        assert!(message.contains("name: Name is required"));
        assert!(message.contains("rating: Rating must be between 1 and 5"));
        assert!(message.contains(", "));
    }

    #[test]
    fn test_not_found_error_message() {
        let err = not_found_error("Vehicle");
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Vehicle not found"),
            _ => panic!("expected NotFound"),
        }
    }
}
