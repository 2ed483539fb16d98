//! Controlador de autenticación y panel de administración

use bcrypt::verify;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::admin_dto::{AdminProfile, LoginRequest, LoginResponse, StatsResponse};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::admin_repository::AdminRepository;
use crate::repositories::enquiry_repository::EnquiryRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AdminController {
    repository: AdminRepository,
    vehicles: VehicleRepository,
    enquiries: EnquiryRepository,
}

impl AdminController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AdminRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            enquiries: EnquiryRepository::new(pool),
        }
    }

    /// Login por email y contraseña. El mensaje de fallo es el mismo para
    /// email desconocido y contraseña incorrecta.
    pub async fn login(&self, request: LoginRequest, jwt: &JwtConfig) -> AppResult<LoginResponse> {
        request.validate()?;

        let admin = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        let valid = verify(&request.password, &admin.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Invalid email or password".to_string()));
        }

        let token = generate_token(admin.id, jwt)?;

        Ok(LoginResponse {
            token,
            admin: AdminProfile::from(&admin),
        })
    }

    pub async fn me(&self, admin_id: Uuid) -> AppResult<AdminProfile> {
        let admin = self
            .repository
            .find_by_id(admin_id)
            .await?
            .ok_or_else(|| not_found_error("Admin"))?;

        Ok(AdminProfile::from(&admin))
    }

    /// Contadores del dashboard: inventario y leads del día (UTC)
    pub async fn stats(&self) -> AppResult<StatsResponse> {
        let today_start = Utc::now()
            .date_naive()
            .and_time(chrono::NaiveTime::MIN)
            .and_utc();

        let (total_vehicles, available_vehicles, total_enquiries, new_enquiries) = tokio::try_join!(
            self.vehicles.count_all(),
            self.vehicles.count_by_status(VehicleStatus::Available),
            self.enquiries.count_all(),
            self.enquiries.count_new_since(today_start),
        )?;

        Ok(StatsResponse {
            total_vehicles,
            available_vehicles,
            total_enquiries,
            new_enquiries,
        })
    }
}
