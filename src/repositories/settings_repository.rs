//! Repositorio del documento singleton de configuración

use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::settings_dto::UpdateSettingsRequest;
use crate::models::settings::{Settings, SocialLinks};
use crate::utils::errors::AppResult;

pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Obtener el documento singleton, creándolo con defaults si no existe
    pub async fn get_or_create(&self) -> AppResult<Settings> {
        let existing = sqlx::query_as::<_, Settings>("SELECT * FROM settings LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        if let Some(settings) = existing {
            return Ok(settings);
        }

        let created = sqlx::query_as::<_, Settings>(
            r#"
            INSERT INTO settings
                (id, site_name, tagline, phone, email, address, whatsapp, social_links, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind("AutoElite Motors")
        .bind("Premium Pre-Owned Vehicles")
        .bind("+91 98765 43210")
        .bind("info@autoelitemotors.com")
        .bind("123 Auto Plaza, MG Road, Bangalore - 560001")
        .bind("+919876543210")
        .bind(Json(SocialLinks::default()))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Upsert parcial: busca o crea el documento y fusiona los campos enviados
    pub async fn update(&self, request: UpdateSettingsRequest) -> AppResult<Settings> {
        let current = self.get_or_create().await?;

        let settings = sqlx::query_as::<_, Settings>(
            r#"
            UPDATE settings
            SET site_name = $2, tagline = $3, logo = $4, favicon = $5, phone = $6,
                email = $7, address = $8, whatsapp = $9, social_links = $10, updated_at = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(current.id)
        .bind(request.site_name.unwrap_or(current.site_name))
        .bind(request.tagline.unwrap_or(current.tagline))
        .bind(request.logo.or(current.logo))
        .bind(request.favicon.or(current.favicon))
        .bind(request.phone.unwrap_or(current.phone))
        .bind(request.email.map(|e| e.to_lowercase()).unwrap_or(current.email))
        .bind(request.address.unwrap_or(current.address))
        .bind(request.whatsapp.unwrap_or(current.whatsapp))
        .bind(request.social_links.map(Json).unwrap_or(current.social_links))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }
}
