//! Guardia de autenticación
//!
//! `AuthAdmin` es un extractor de Axum: los handlers de administración lo
//! declaran como argumento y reciben el id decodificado del token. Sin header,
//! con firma inválida o expirado, el request se corta con 401.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

/// Identidad del administrador autenticado
#[derive(Debug, Clone, Copy)]
pub struct AuthAdmin(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        let token = extract_token_from_header(auth_header)?;
        let claims = verify_token(token, &JwtConfig::from(&state.config))?;

        let admin_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Jwt("Invalid or expired token".to_string()))?;

        Ok(AuthAdmin(admin_id))
    }
}
