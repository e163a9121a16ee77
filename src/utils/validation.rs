//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos,
//! usadas por los DTOs (via `validator`) y por los controllers.

use validator::ValidationError;

/// Validar que un string no esté en blanco
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_vehicle_number(value: &str) -> Result<(), ValidationError> {
    // Formato básico: KA-01-12345 o similar
    let clean_number = value.replace([' ', '-', '_'], "");
    if clean_number.len() < 4 || clean_number.len() > 15 {
        let mut error = ValidationError::new("vehicle_number");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}
