//! Utilidades de validación
//!
//! Funciones helper de validación compartidas entre controladores.

use chrono::Datelike;
use validator::ValidationError;

/// Validar que el año del vehículo sea razonable (1900 hasta el año próximo)
pub fn validate_year(year: i32) -> Result<(), ValidationError> {
    let max_year = chrono::Utc::now().date_naive().year() + 1;
    if year < 1900 || year > max_year {
        let mut error = ValidationError::new("year");
        error.message = Some("Year must be between 1900 and next year".into());
        error.add_param("value".into(), &year);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone = value.chars().filter(|c| c.is_ascii_digit()).collect::<String>();
    if clean_phone.len() < 10 || clean_phone.len() > 15 {
        let mut error = ValidationError::new("phone");
        error.message = Some("Phone must contain 10 to 15 digits".into());
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Normalizar una nota: recortar espacios y rechazar si queda vacía
pub fn normalize_note(note: &str) -> Option<String> {
    let trimmed = note.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
