//! DTOs de configuración del sitio

use serde::Deserialize;
use validator::Validate;

use crate::models::settings::SocialLinks;

/// Upsert parcial del documento singleton. Los campos presentes reemplazan
/// el valor actual; `social_links` se reemplaza completo si viene.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[validate(length(min = 1, message = "Site name is required"))]
    pub site_name: Option<String>,
    #[validate(length(min = 1, message = "Tagline is required"))]
    pub tagline: Option<String>,
    pub logo: Option<String>,
    pub favicon: Option<String>,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: Option<String>,
    #[validate(email(message = "Please provide a valid email"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: Option<String>,
    #[validate(length(min = 1, message = "WhatsApp number is required"))]
    pub whatsapp: Option<String>,
    pub social_links: Option<SocialLinks>,
}
