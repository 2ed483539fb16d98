//! Modelo del administrador
//!
//! El hash de la contraseña nunca se serializa: las respuestas públicas
//! usan `AdminProfile` (ver dto/admin_dto.rs).

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
