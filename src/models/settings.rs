//! Configuración del sitio (documento singleton)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

/// Enlaces a redes sociales
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
}

/// Documento singleton con la configuración del sitio. Debe existir
/// exactamente una fila; se crea con defaults en la primera lectura.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub id: Uuid,
    pub site_name: String,
    pub tagline: String,
    pub logo: Option<String>,
    pub favicon: Option<String>,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub whatsapp: String,
    pub social_links: Json<SocialLinks>,
    pub updated_at: DateTime<Utc>,
}
