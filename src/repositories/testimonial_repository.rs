//! Repositorio de testimonios

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::testimonial_dto::{CreateTestimonialRequest, UpdateTestimonialRequest};
use crate::models::testimonial::Testimonial;
use crate::utils::errors::AppResult;

pub struct TestimonialRepository {
    pool: PgPool,
}

impl TestimonialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Testimonial>> {
        let testimonials = sqlx::query_as::<_, Testimonial>(
            "SELECT * FROM testimonials ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(testimonials)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Testimonial>> {
        let testimonial = sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(testimonial)
    }

    pub async fn create(&self, request: CreateTestimonialRequest) -> AppResult<Testimonial> {
        let now = Utc::now();
        let testimonial = sqlx::query_as::<_, Testimonial>(
            r#"
            INSERT INTO testimonials (id, name, role, content, rating, image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.name)
        .bind(request.role)
        .bind(request.content)
        .bind(request.rating)
        .bind(request.image)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(testimonial)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateTestimonialRequest,
    ) -> AppResult<Option<Testimonial>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let testimonial = sqlx::query_as::<_, Testimonial>(
            r#"
            UPDATE testimonials
            SET name = $2, role = $3, content = $4, rating = $5, image = $6, updated_at = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.unwrap_or(current.name))
        .bind(request.role.unwrap_or(current.role))
        .bind(request.content.unwrap_or(current.content))
        .bind(request.rating.unwrap_or(current.rating))
        .bind(request.image.or(current.image))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(testimonial))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
