//! Controlador de configuración del sitio

use sqlx::PgPool;
use validator::Validate;

use crate::dto::settings_dto::UpdateSettingsRequest;
use crate::models::settings::Settings;
use crate::repositories::settings_repository::SettingsRepository;
use crate::utils::errors::AppResult;

pub struct SettingsController {
    repository: SettingsRepository,
}

impl SettingsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SettingsRepository::new(pool),
        }
    }

    /// Lectura pública; crea el documento con defaults en el primer acceso
    pub async fn get(&self) -> AppResult<Settings> {
        self.repository.get_or_create().await
    }

    pub async fn update(&self, request: UpdateSettingsRequest) -> AppResult<Settings> {
        request.validate()?;
        self.repository.update(request).await
    }
}
