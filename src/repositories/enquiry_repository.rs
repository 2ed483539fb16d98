//! Repositorio de consultas (leads)

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::enquiry_dto::{CreateEnquiryRequest, EnquiryFilter, UpdateEnquiryRequest};
use crate::models::enquiry::{Enquiry, EnquiryStatus};
use crate::repositories::vehicle_repository::escape_like;
use crate::utils::errors::AppResult;

/// Construir el SELECT del listado de consultas
pub fn build_list_query(filter: &EnquiryFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb: QueryBuilder<'static, Postgres> = QueryBuilder::new("SELECT * FROM enquiries");
    let mut has_condition = false;

    if let Some(status) = filter.status {
        qb.push(" WHERE status = ").push_bind(status);
        has_condition = true;
    }

    if let Some(ref search) = filter.search {
        qb.push(if has_condition { " AND " } else { " WHERE " });
        let pattern = format!("%{}%", escape_like(search));
        qb.push("(name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR phone ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR email ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    qb.push(" ORDER BY created_at DESC");

    if let Some(limit) = filter.limit {
        qb.push(" LIMIT ").push_bind(limit);
    }

    qb
}

pub struct EnquiryRepository {
    pool: PgPool,
}

impl EnquiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filter: &EnquiryFilter) -> AppResult<Vec<Enquiry>> {
        let mut qb = build_list_query(filter);
        let enquiries = qb.build_query_as::<Enquiry>().fetch_all(&self.pool).await?;
        Ok(enquiries)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Enquiry>> {
        let enquiry = sqlx::query_as::<_, Enquiry>("SELECT * FROM enquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(enquiry)
    }

    pub async fn create(
        &self,
        request: CreateEnquiryRequest,
        vehicle_title: Option<String>,
    ) -> AppResult<Enquiry> {
        let now = Utc::now();
        let enquiry = sqlx::query_as::<_, Enquiry>(
            r#"
            INSERT INTO enquiries
                (id, name, phone, email, message, vehicle_id, vehicle_title,
                 status, notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.name)
        .bind(request.phone)
        .bind(request.email.map(|e| e.to_lowercase()))
        .bind(request.message)
        .bind(request.vehicle_id)
        .bind(vehicle_title)
        .bind(EnquiryStatus::New)
        .bind(Vec::<String>::new())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(enquiry)
    }

    pub async fn update(&self, id: Uuid, request: UpdateEnquiryRequest) -> AppResult<Option<Enquiry>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let enquiry = sqlx::query_as::<_, Enquiry>(
            r#"
            UPDATE enquiries
            SET name = $2, phone = $3, email = $4, message = $5,
                status = $6, vehicle_title = $7, updated_at = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.unwrap_or(current.name))
        .bind(request.phone.unwrap_or(current.phone))
        .bind(request.email.map(|e| e.to_lowercase()).or(current.email))
        .bind(request.message.unwrap_or(current.message))
        .bind(request.status.unwrap_or(current.status))
        .bind(request.vehicle_title.or(current.vehicle_title))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(enquiry))
    }

    /// Agregar una nota al final de la lista (append-only)
    pub async fn append_note(&self, id: Uuid, note: &str) -> AppResult<Option<Enquiry>> {
        let enquiry = sqlx::query_as::<_, Enquiry>(
            r#"
            UPDATE enquiries
            SET notes = array_append(notes, $2), updated_at = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(note)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(enquiry)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM enquiries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count_all(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM enquiries")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Consultas nuevas creadas desde `since` (para el dashboard)
    pub async fn count_new_since(&self, since: DateTime<Utc>) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM enquiries WHERE status = $1 AND created_at >= $2",
        )
        .bind(EnquiryStatus::New)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults_to_newest_first() {
        let qb = build_list_query(&EnquiryFilter::default());
        let sql = qb.sql();
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY created_at DESC"));
    }

    #[test]
    fn test_status_and_search_combined() {
        let filter = EnquiryFilter {
            status: Some(EnquiryStatus::New),
            search: Some("asha".to_string()),
            limit: Some(20),
        };
        let qb = build_list_query(&filter);
        let sql = qb.sql();
        assert!(sql.contains("WHERE status = $1"));
        assert!(sql.contains("AND (name ILIKE $2 OR phone ILIKE $3 OR email ILIKE $4)"));
        assert!(sql.contains("LIMIT $5"));
    }
}
