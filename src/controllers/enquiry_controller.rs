//! Controlador de consultas (leads)

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::enquiry_dto::{CreateEnquiryRequest, EnquiryFilter, UpdateEnquiryRequest};
use crate::models::enquiry::Enquiry;
use crate::repositories::enquiry_repository::EnquiryRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::validation::normalize_note;

pub struct EnquiryController {
    repository: EnquiryRepository,
    vehicles: VehicleRepository,
}

impl EnquiryController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EnquiryRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    /// Captura pública de lead. Si referencia un vehículo y el cliente no
    /// mandó el título, se toma el snapshot del inventario actual.
    pub async fn create(&self, request: CreateEnquiryRequest) -> AppResult<Enquiry> {
        request.validate()?;

        let vehicle_title = match (&request.vehicle_title, request.vehicle_id) {
            (Some(title), _) => Some(title.clone()),
            (None, Some(vehicle_id)) => self
                .vehicles
                .find_by_id(vehicle_id)
                .await?
                .map(|v| v.title),
            (None, None) => None,
        };

        self.repository.create(request, vehicle_title).await
    }

    pub async fn list(&self, filter: EnquiryFilter) -> AppResult<Vec<Enquiry>> {
        self.repository.list(&filter).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Enquiry> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Enquiry"))
    }

    pub async fn update(&self, id: Uuid, request: UpdateEnquiryRequest) -> AppResult<Enquiry> {
        request.validate()?;

        self.repository
            .update(id, request)
            .await?
            .ok_or_else(|| not_found_error("Enquiry"))
    }

    /// Agregar una nota de seguimiento; se recorta y se rechaza si queda vacía
    pub async fn add_note(&self, id: Uuid, note: &str) -> AppResult<Enquiry> {
        let note = normalize_note(note)
            .ok_or_else(|| AppError::BadRequest("Note is required".to_string()))?;

        self.repository
            .append_note(id, &note)
            .await?
            .ok_or_else(|| not_found_error("Enquiry"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Enquiry"));
        }
        Ok(())
    }
}
