//! DTOs de consultas (leads)

use serde::Deserialize;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use crate::models::enquiry::EnquiryStatus;
use crate::utils::errors::AppError;

/// Request público de captura de lead
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnquiryRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    pub name: String,
    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: String,
    #[validate(email(message = "Please provide a valid email"))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 500, message = "Message is required (max 500 characters)"))]
    pub message: String,
    pub vehicle_id: Option<Uuid>,
    pub vehicle_title: Option<String>,
}

/// Actualización parcial (admin): transición de estado y corrección de campos
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnquiryRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    pub name: Option<String>,
    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: Option<String>,
    #[validate(email(message = "Please provide a valid email"))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 500, message = "Message is required (max 500 characters)"))]
    pub message: Option<String>,
    pub status: Option<EnquiryStatus>,
    pub vehicle_title: Option<String>,
}

/// Request para agregar una nota de seguimiento
#[derive(Debug, Deserialize)]
pub struct AddNoteRequest {
    pub note: String,
}

/// Parámetros crudos del listado de consultas (admin)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryListQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
}

/// Filtro validado del listado de consultas
#[derive(Debug, Default)]
pub struct EnquiryFilter {
    pub status: Option<EnquiryStatus>,
    pub search: Option<String>,
    pub limit: Option<i64>,
}

impl TryFrom<EnquiryListQuery> for EnquiryFilter {
    type Error = AppError;

    fn try_from(query: EnquiryListQuery) -> Result<Self, Self::Error> {
        // El sentinela "all" desactiva el filtro de estado
        let status = query
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "all")
            .map(|s| EnquiryStatus::from_str(s).map_err(AppError::BadRequest))
            .transpose()?;

        if let Some(limit) = query.limit {
            if limit < 0 {
                return Err(AppError::BadRequest("limit must be non-negative".to_string()));
            }
        }

        Ok(Self {
            status,
            search: query.search.filter(|s| !s.trim().is_empty()),
            limit: query.limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_disables_status_filter() {
        let query = EnquiryListQuery {
            status: Some("all".to_string()),
            ..Default::default()
        };
        assert!(EnquiryFilter::try_from(query).unwrap().status.is_none());
    }

    #[test]
    fn test_status_filter_parsed() {
        let query = EnquiryListQuery {
            status: Some("contacted".to_string()),
            ..Default::default()
        };
        assert_eq!(
            EnquiryFilter::try_from(query).unwrap().status,
            Some(EnquiryStatus::Contacted)
        );
    }

    #[test]
    fn test_unknown_status_rejected() {
        let query = EnquiryListQuery {
            status: Some("archived".to_string()),
            ..Default::default()
        };
        assert!(EnquiryFilter::try_from(query).is_err());
    }

    #[test]
    fn test_create_request_validation() {
        let request = CreateEnquiryRequest {
            name: "Asha".to_string(),
            phone: "9999999999".to_string(),
            email: None,
            message: "Interested".to_string(),
            vehicle_id: None,
            vehicle_title: None,
        };
        assert!(request.validate().is_ok());

        let request = CreateEnquiryRequest {
            name: String::new(),
            phone: "123".to_string(),
            email: Some("not-an-email".to_string()),
            message: "Interested".to_string(),
            vehicle_id: None,
            vehicle_title: None,
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("email"));
    }
}
