//! Controlador de vehículos

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilter};
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::validation::validate_year;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self, filter: VehicleFilter) -> AppResult<Vec<Vehicle>> {
        self.repository.list(&filter).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Vehicle> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle"))
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;
        validate_year(request.year).map_err(single_field_error("year"))?;

        self.repository.create(request).await
    }

    pub async fn update(&self, id: Uuid, request: UpdateVehicleRequest) -> AppResult<Vehicle> {
        request.validate()?;
        if let Some(year) = request.year {
            validate_year(year).map_err(single_field_error("year"))?;
        }

        self.repository
            .update(id, request)
            .await?
            .ok_or_else(|| not_found_error("Vehicle"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Vehicle"));
        }
        Ok(())
    }
}

/// Envolver un ValidationError suelto en ValidationErrors para el traductor central
fn single_field_error(
    field: &'static str,
) -> impl FnOnce(validator::ValidationError) -> crate::utils::errors::AppError {
    move |error| {
        let mut errors = validator::ValidationErrors::new();
        errors.add(field, error);
        errors.into()
    }
}
