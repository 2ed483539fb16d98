//! Controlador de testimonios

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::testimonial_dto::{CreateTestimonialRequest, UpdateTestimonialRequest};
use crate::models::testimonial::Testimonial;
use crate::repositories::testimonial_repository::TestimonialRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct TestimonialController {
    repository: TestimonialRepository,
}

impl TestimonialController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TestimonialRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Testimonial>> {
        self.repository.list().await
    }

    pub async fn create(&self, request: CreateTestimonialRequest) -> AppResult<Testimonial> {
        request.validate()?;
        self.repository.create(request).await
    }

    pub async fn update(&self, id: Uuid, request: UpdateTestimonialRequest) -> AppResult<Testimonial> {
        request.validate()?;
        self.repository
            .update(id, request)
            .await?
            .ok_or_else(|| not_found_error("Testimonial"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Testimonial"));
        }
        Ok(())
    }
}
