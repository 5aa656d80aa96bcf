//! Utilidades de validación
//!
//! Funciones helper usadas por los requests del registro, tanto desde
//! `#[validate(custom = ...)]` como directamente en el registro.

use chrono::NaiveDate;
use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que una magnitud sea finita y no negativa
pub fn validate_non_negative(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        let mut error = ValidationError::new("non_negative");
        error.add_param("actual".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que la fecha de fin no sea anterior a la de inicio
pub fn validate_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end < start {
        let mut error = ValidationError::new("date_order");
        error.add_param("start".into(), &start.to_string());
        error.add_param("end".into(), &end.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar coordenadas geográficas
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
    let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
    if !lat_ok || !lon_ok {
        let mut error = ValidationError::new("coordinates");
        error.add_param("latitude".into(), &latitude.to_string());
        error.add_param("longitude".into(), &longitude.to_string());
        return Err(error);
    }
    Ok(())
}
