//! DTOs de vehículos
//!
//! Incluye la configuración tipada de filtros del listado público:
//! los parámetros de query crudos (`VehicleListQuery`) se convierten en un
//! `VehicleFilter` validado antes de tocar el repositorio.

use serde::Deserialize;
use std::str::FromStr;
use validator::Validate;

use crate::models::vehicle::{FuelType, Transmission, VehicleSpecs, VehicleStatus};
use crate::utils::errors::AppError;

/// Sentinelas del catálogo: el frontend los manda cuando el usuario
/// no seleccionó ningún filtro concreto.
const ALL_BRANDS: &str = "All Brands";
const ALL_FUEL_TYPES: &str = "All Fuel Types";
const ALL_TRANSMISSIONS: &str = "All Transmissions";

/// Orden del listado. Valores desconocidos caen en `Newest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    YearNew,
}

impl SortBy {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("price-low") => Self::PriceLow,
            Some("price-high") => Self::PriceHigh,
            Some("year-new") => Self::YearNew,
            _ => Self::Newest,
        }
    }

    /// Cláusula ORDER BY correspondiente
    pub fn order_clause(self) -> &'static str {
        match self {
            Self::Newest => "created_at DESC",
            Self::PriceLow => "price ASC",
            Self::PriceHigh => "price DESC",
            Self::YearNew => "year DESC",
        }
    }
}

/// Parámetros crudos del query string (camelCase como los manda el browser).
/// Los numéricos mal formados se rechazan con 400 en la deserialización.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListQuery {
    pub status: Option<String>,
    pub featured: Option<String>,
    pub brand: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub limit: Option<i64>,
}

/// Filtro validado del listado de vehículos
#[derive(Debug, Default)]
pub struct VehicleFilter {
    pub status: Option<VehicleStatus>,
    pub featured: Option<bool>,
    pub brand: Option<String>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub search: Option<String>,
    pub sort_by: SortBy,
    pub limit: Option<i64>,
}

/// Descartar valores vacíos o sentinela antes de interpretarlos
fn meaningful(value: Option<String>, sentinel: &str) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != sentinel)
}

impl TryFrom<VehicleListQuery> for VehicleFilter {
    type Error = AppError;

    fn try_from(query: VehicleListQuery) -> Result<Self, Self::Error> {
        // Sin `status` explícito se listan los tres estados
        let status = query
            .status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| VehicleStatus::from_str(s).map_err(AppError::BadRequest))
            .transpose()?;

        // `featured` solo aplica con el literal "true"
        let featured = match query.featured.as_deref() {
            Some("true") => Some(true),
            _ => None,
        };

        let fuel_type = meaningful(query.fuel_type, ALL_FUEL_TYPES)
            .map(|s| FuelType::from_str(&s).map_err(AppError::BadRequest))
            .transpose()?;

        let transmission = meaningful(query.transmission, ALL_TRANSMISSIONS)
            .map(|s| Transmission::from_str(&s).map_err(AppError::BadRequest))
            .transpose()?;

        if let Some(limit) = query.limit {
            if limit < 0 {
                return Err(AppError::BadRequest("limit must be non-negative".to_string()));
            }
        }

        Ok(Self {
            status,
            featured,
            brand: meaningful(query.brand, ALL_BRANDS),
            fuel_type,
            transmission,
            min_price: query.min_price,
            max_price: query.max_price,
            search: query.search.filter(|s| !s.trim().is_empty()),
            sort_by: SortBy::from_param(query.sort_by.as_deref()),
            limit: query.limit,
        })
    }
}

/// Request para crear un vehículo (admin)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required (max 200 characters)"))]
    pub title: String,
    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,
    pub year: i32,
    #[validate(range(min = 0, message = "Price must be positive"))]
    pub price: i64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    #[validate(range(min = 0, message = "Mileage must be positive"))]
    pub mileage: i32,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub status: Option<VehicleStatus>,
    pub featured: Option<bool>,
    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Vec<String>,
    pub specs: Option<VehicleSpecs>,
}

/// Request de actualización parcial (admin). Los campos ausentes conservan
/// su valor actual; los presentes se revalidan.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required (max 200 characters)"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: Option<String>,
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: Option<String>,
    pub year: Option<i32>,
    #[validate(range(min = 0, message = "Price must be positive"))]
    pub price: Option<i64>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    #[validate(range(min = 0, message = "Mileage must be positive"))]
    pub mileage: Option<i32>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    pub status: Option<VehicleStatus>,
    pub featured: Option<bool>,
    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Option<Vec<String>>,
    pub specs: Option<VehicleSpecs>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_mapping() {
        assert_eq!(SortBy::from_param(Some("price-low")), SortBy::PriceLow);
        assert_eq!(SortBy::from_param(Some("price-high")), SortBy::PriceHigh);
        assert_eq!(SortBy::from_param(Some("year-new")), SortBy::YearNew);
        assert_eq!(SortBy::from_param(Some("newest")), SortBy::Newest);
        // Valores desconocidos caen al default
        assert_eq!(SortBy::from_param(Some("oldest")), SortBy::Newest);
        assert_eq!(SortBy::from_param(None), SortBy::Newest);
    }

    #[test]
    fn test_sentinels_are_skipped() {
        let query = VehicleListQuery {
            brand: Some("All Brands".to_string()),
            fuel_type: Some("All Fuel Types".to_string()),
            transmission: Some("All Transmissions".to_string()),
            ..Default::default()
        };
        let filter = VehicleFilter::try_from(query).unwrap();
        assert!(filter.brand.is_none());
        assert!(filter.fuel_type.is_none());
        assert!(filter.transmission.is_none());
    }

    #[test]
    fn test_featured_requires_literal_true() {
        let query = VehicleListQuery {
            featured: Some("true".to_string()),
            ..Default::default()
        };
        assert_eq!(VehicleFilter::try_from(query).unwrap().featured, Some(true));

        let query = VehicleListQuery {
            featured: Some("yes".to_string()),
            ..Default::default()
        };
        assert!(VehicleFilter::try_from(query).unwrap().featured.is_none());
    }

    #[test]
    fn test_invalid_enum_values_rejected() {
        let query = VehicleListQuery {
            status: Some("archived".to_string()),
            ..Default::default()
        };
        assert!(matches!(VehicleFilter::try_from(query), Err(AppError::BadRequest(_))));

        let query = VehicleListQuery {
            fuel_type: Some("Steam".to_string()),
            ..Default::default()
        };
        assert!(matches!(VehicleFilter::try_from(query), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_absent_status_means_no_constraint() {
        let filter = VehicleFilter::try_from(VehicleListQuery::default()).unwrap();
        assert!(filter.status.is_none());
    }

    #[test]
    fn test_negative_limit_rejected() {
        let query = VehicleListQuery {
            limit: Some(-5),
            ..Default::default()
        };
        assert!(matches!(VehicleFilter::try_from(query), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_create_request_requires_images() {
        let request = CreateVehicleRequest {
            title: "2019 BMW 320d".to_string(),
            brand: "BMW".to_string(),
            model: "320d".to_string(),
            year: 2019,
            price: 2_450_000,
            fuel_type: FuelType::Diesel,
            transmission: Transmission::Automatic,
            mileage: 42_000,
            description: "Single owner, full service history".to_string(),
            status: None,
            featured: None,
            images: vec![],
            specs: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("images"));
    }
}
