//! DTOs de autenticación y panel de administración

use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::admin::Admin;

#[derive(Debug, serde::Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

/// Perfil público del administrador (nunca incluye el hash)
#[derive(Debug, Serialize)]
pub struct AdminProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&Admin> for AdminProfile {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email.clone(),
            name: admin.name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminProfile,
}

/// Contadores del dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_vehicles: i64,
    pub available_vehicles: i64,
    pub total_enquiries: i64,
    pub new_enquiries: i64,
}
