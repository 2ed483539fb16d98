//! Modelo de vehículo del catálogo

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

/// Tipo de combustible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "fuel_type")]
pub enum FuelType {
    #[sqlx(rename = "Petrol")]
    Petrol,
    #[sqlx(rename = "Diesel")]
    Diesel,
    #[sqlx(rename = "Electric")]
    Electric,
    #[sqlx(rename = "Hybrid")]
    Hybrid,
    #[sqlx(rename = "CNG")]
    CNG,
}

impl std::str::FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Petrol" => Ok(Self::Petrol),
            "Diesel" => Ok(Self::Diesel),
            "Electric" => Ok(Self::Electric),
            "Hybrid" => Ok(Self::Hybrid),
            "CNG" => Ok(Self::CNG),
            other => Err(format!("Invalid fuel type '{}'", other)),
        }
    }
}

/// Tipo de transmisión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transmission_type")]
pub enum Transmission {
    #[sqlx(rename = "Manual")]
    Manual,
    #[sqlx(rename = "Automatic")]
    Automatic,
}

impl std::str::FromStr for Transmission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Manual" => Ok(Self::Manual),
            "Automatic" => Ok(Self::Automatic),
            other => Err(format!("Invalid transmission '{}'", other)),
        }
    }
}

/// Estado de publicación de un vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "vehicle_status")]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[sqlx(rename = "available")]
    Available,
    #[sqlx(rename = "sold")]
    Sold,
    #[sqlx(rename = "reserved")]
    Reserved,
}

impl std::str::FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "sold" => Ok(Self::Sold),
            "reserved" => Ok(Self::Reserved),
            other => Err(format!("Invalid status '{}'", other)),
        }
    }
}

/// Ficha técnica opcional del vehículo
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleSpecs {
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub seats: Option<i32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub owners: Option<i32>,
}

/// Vehículo del inventario. Se serializa directamente como respuesta pública
/// (no contiene campos internos).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: i64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub mileage: i32,
    pub description: String,
    pub status: VehicleStatus,
    pub featured: bool,
    pub images: Vec<String>,
    pub specs: Json<VehicleSpecs>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_fuel_type_from_str() {
        assert_eq!(FuelType::from_str("Petrol").unwrap(), FuelType::Petrol);
        assert_eq!(FuelType::from_str("CNG").unwrap(), FuelType::CNG);
        assert!(FuelType::from_str("petrol").is_err());
        assert!(FuelType::from_str("Steam").is_err());
    }

    #[test]
    fn test_vehicle_status_from_str() {
        assert_eq!(VehicleStatus::from_str("available").unwrap(), VehicleStatus::Available);
        assert_eq!(VehicleStatus::from_str("sold").unwrap(), VehicleStatus::Sold);
        assert!(VehicleStatus::from_str("Available").is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&VehicleStatus::Reserved).unwrap(), "\"reserved\"");
    }
}
