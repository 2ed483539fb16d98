//! Repositorio de vehículos
//!
//! El listado público arma su SQL dinámicamente con `QueryBuilder` a partir
//! de un `VehicleFilter` ya validado.

use chrono::Utc;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilter};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppResult;

/// Escapar comodines de LIKE en texto de búsqueda libre
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn push_clause(qb: &mut QueryBuilder<'_, Postgres>, has_condition: &mut bool) {
    if *has_condition {
        qb.push(" AND ");
    } else {
        qb.push(" WHERE ");
        *has_condition = true;
    }
}

/// Construir el SELECT del listado a partir del filtro
pub fn build_list_query(filter: &VehicleFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb: QueryBuilder<'static, Postgres> = QueryBuilder::new("SELECT * FROM vehicles");
    let mut has_condition = false;

    if let Some(status) = filter.status {
        push_clause(&mut qb, &mut has_condition);
        qb.push("status = ").push_bind(status);
    }

    if let Some(featured) = filter.featured {
        push_clause(&mut qb, &mut has_condition);
        qb.push("featured = ").push_bind(featured);
    }

    if let Some(ref brand) = filter.brand {
        push_clause(&mut qb, &mut has_condition);
        qb.push("brand = ").push_bind(brand.clone());
    }

    if let Some(fuel_type) = filter.fuel_type {
        push_clause(&mut qb, &mut has_condition);
        qb.push("fuel_type = ").push_bind(fuel_type);
    }

    if let Some(transmission) = filter.transmission {
        push_clause(&mut qb, &mut has_condition);
        qb.push("transmission = ").push_bind(transmission);
    }

    if let Some(min_price) = filter.min_price {
        push_clause(&mut qb, &mut has_condition);
        qb.push("price >= ").push_bind(min_price);
    }

    if let Some(max_price) = filter.max_price {
        push_clause(&mut qb, &mut has_condition);
        qb.push("price <= ").push_bind(max_price);
    }

    if let Some(ref search) = filter.search {
        push_clause(&mut qb, &mut has_condition);
        let pattern = format!("%{}%", escape_like(search));
        qb.push("(title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR brand ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR model ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    qb.push(" ORDER BY ");
    qb.push(filter.sort_by.order_clause());

    if let Some(limit) = filter.limit {
        qb.push(" LIMIT ").push_bind(limit);
    }

    qb
}

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filter: &VehicleFilter) -> AppResult<Vec<Vehicle>> {
        let mut qb = build_list_query(filter);
        let vehicles = qb.build_query_as::<Vehicle>().fetch_all(&self.pool).await?;
        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(vehicle)
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        let now = Utc::now();
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles
                (id, title, brand, model, year, price, fuel_type, transmission,
                 mileage, description, status, featured, images, specs, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.title)
        .bind(request.brand)
        .bind(request.model)
        .bind(request.year)
        .bind(request.price)
        .bind(request.fuel_type)
        .bind(request.transmission)
        .bind(request.mileage)
        .bind(request.description)
        .bind(request.status.unwrap_or(VehicleStatus::Available))
        .bind(request.featured.unwrap_or(false))
        .bind(request.images)
        .bind(Json(request.specs.unwrap_or_default()))
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Actualización parcial: los campos ausentes conservan el valor actual
    pub async fn update(&self, id: Uuid, request: UpdateVehicleRequest) -> AppResult<Option<Vehicle>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET title = $2, brand = $3, model = $4, year = $5, price = $6,
                fuel_type = $7, transmission = $8, mileage = $9, description = $10,
                status = $11, featured = $12, images = $13, specs = $14, updated_at = $15
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.title.unwrap_or(current.title))
        .bind(request.brand.unwrap_or(current.brand))
        .bind(request.model.unwrap_or(current.model))
        .bind(request.year.unwrap_or(current.year))
        .bind(request.price.unwrap_or(current.price))
        .bind(request.fuel_type.unwrap_or(current.fuel_type))
        .bind(request.transmission.unwrap_or(current.transmission))
        .bind(request.mileage.unwrap_or(current.mileage))
        .bind(request.description.unwrap_or(current.description))
        .bind(request.status.unwrap_or(current.status))
        .bind(request.featured.unwrap_or(current.featured))
        .bind(request.images.unwrap_or(current.images))
        .bind(request.specs.map(Json).unwrap_or(current.specs))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(vehicle))
    }

    /// Eliminar un vehículo; devuelve false si el id no existe
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count_all(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn count_by_status(&self, status: VehicleStatus) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vehicles WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::vehicle_dto::SortBy;
    use crate::models::vehicle::{FuelType, Transmission};

    #[test]
    fn test_empty_filter_has_no_where_clause() {
        let filter = VehicleFilter::default();
        let qb = build_list_query(&filter);
        let sql = qb.sql();
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY created_at DESC"));
    }

    #[test]
    fn test_price_bounds_are_inclusive_comparisons() {
        let filter = VehicleFilter {
            min_price: Some(100_000),
            max_price: Some(500_000),
            ..Default::default()
        };
        let qb = build_list_query(&filter);
        let sql = qb.sql();
        assert!(sql.contains("price >= $1"));
        assert!(sql.contains("price <= $2"));
    }

    #[test]
    fn test_search_is_case_insensitive_or_across_fields() {
        let filter = VehicleFilter {
            search: Some("bmw".to_string()),
            ..Default::default()
        };
        let qb = build_list_query(&filter);
        let sql = qb.sql();
        assert!(sql.contains("title ILIKE $1"));
        assert!(sql.contains("OR brand ILIKE $2"));
        assert!(sql.contains("OR model ILIKE $3"));
    }

    #[test]
    fn test_conditions_joined_with_and() {
        let filter = VehicleFilter {
            status: Some(VehicleStatus::Available),
            featured: Some(true),
            brand: Some("BMW".to_string()),
            fuel_type: Some(FuelType::Diesel),
            transmission: Some(Transmission::Automatic),
            ..Default::default()
        };
        let qb = build_list_query(&filter);
        let sql = qb.sql();
        assert_eq!(sql.matches(" WHERE ").count(), 1);
        assert_eq!(sql.matches(" AND ").count(), 4);
    }

    #[test]
    fn test_sort_options_map_to_order_clauses() {
        for (sort_by, clause) in [
            (SortBy::Newest, "ORDER BY created_at DESC"),
            (SortBy::PriceLow, "ORDER BY price ASC"),
            (SortBy::PriceHigh, "ORDER BY price DESC"),
            (SortBy::YearNew, "ORDER BY year DESC"),
        ] {
            let filter = VehicleFilter {
                sort_by,
                ..Default::default()
            };
            let qb = build_list_query(&filter);
            assert!(qb.sql().contains(clause), "missing {} in {}", clause, qb.sql());
        }
    }

    #[test]
    fn test_limit_is_bound_when_present() {
        let filter = VehicleFilter {
            limit: Some(6),
            ..Default::default()
        };
        let qb = build_list_query(&filter);
        assert!(qb.sql().contains("LIMIT $1"));

        let qb = build_list_query(&VehicleFilter::default());
        assert!(!qb.sql().contains("LIMIT"));
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("bmw"), "bmw");
    }
}
