//! Modelo de consulta de cliente (lead)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado de seguimiento de una consulta. No hay máquina de estados:
/// cualquier estado puede seguir a cualquier otro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "enquiry_status")]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    #[sqlx(rename = "new")]
    New,
    #[sqlx(rename = "contacted")]
    Contacted,
    #[sqlx(rename = "follow-up")]
    #[serde(rename = "follow-up")]
    FollowUp,
    #[sqlx(rename = "converted")]
    Converted,
    #[sqlx(rename = "lost")]
    Lost,
}

impl std::str::FromStr for EnquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "follow-up" => Ok(Self::FollowUp),
            "converted" => Ok(Self::Converted),
            "lost" => Ok(Self::Lost),
            other => Err(format!("Invalid status '{}'", other)),
        }
    }
}

/// Consulta enviada desde el formulario público. `vehicle_title` es un
/// snapshot desnormalizado: la consulta sigue siendo legible aunque el
/// vehículo referenciado se elimine después.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub message: String,
    pub vehicle_id: Option<Uuid>,
    pub vehicle_title: Option<String>,
    pub status: EnquiryStatus,
    pub notes: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
