//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema y su
//! conversión a respuestas HTTP. Hay dos familias: resultados esperados
//! (el caller decide qué hacer con ellos) y violaciones de contrato
//! (mal uso del API). Ninguna tumba el proceso.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    // --- Resultados esperados: la operación no pudo proceder ---
    #[error("User '{0}' not found")]
    UnknownUser(String),

    #[error("Vehicle '{vehicle}' not found for user '{owner}'")]
    UnknownVehicle { owner: String, vehicle: String },

    #[error("Vehicle '{0}' is already in an active ride")]
    VehicleAlreadyActive(String),

    #[error("No matching rides found")]
    NoMatchingRide,

    #[error("No suitable ride found based on the strategy")]
    NoSuitableRide,

    #[error("No active ride found for vehicle '{0}'")]
    NoActiveRideForVehicle(String),

    // --- Violaciones de contrato: mal uso por parte del caller ---
    #[error("User '{0}' already exists")]
    DuplicateUser(String),

    #[error("Seat count must be at least 1")]
    InvalidCapacity,

    #[error("Unknown matching strategy '{0}'")]
    UnknownStrategy(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Código estable legible por máquina, uno por variante
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnknownUser(_) => "UNKNOWN_USER",
            AppError::UnknownVehicle { .. } => "UNKNOWN_VEHICLE",
            AppError::VehicleAlreadyActive(_) => "VEHICLE_ALREADY_ACTIVE",
            AppError::NoMatchingRide => "NO_MATCHING_RIDE",
            AppError::NoSuitableRide => "NO_SUITABLE_RIDE",
            AppError::NoActiveRideForVehicle(_) => "NO_ACTIVE_RIDE_FOR_VEHICLE",
            AppError::DuplicateUser(_) => "DUPLICATE_USER",
            AppError::InvalidCapacity => "INVALID_CAPACITY",
            AppError::UnknownStrategy(_) => "UNKNOWN_STRATEGY",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownUser(_)
            | AppError::UnknownVehicle { .. }
            | AppError::NoMatchingRide
            | AppError::NoSuitableRide
            | AppError::NoActiveRideForVehicle(_) => StatusCode::NOT_FOUND,

            AppError::VehicleAlreadyActive(_) | AppError::DuplicateUser(_) => StatusCode::CONFLICT,

            AppError::InvalidCapacity
            | AppError::UnknownStrategy(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,

            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("⚠️ Operación rechazada [{}]: {}", self.code(), self);

        let error_response = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
            code: self.code().to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_outcomes_map_to_not_found() {
        assert_eq!(AppError::NoMatchingRide.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::UnknownUser("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::NoActiveRideForVehicle("Polo".into()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_conflicts_map_to_409() {
        assert_eq!(AppError::DuplicateUser("Amit".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::VehicleAlreadyActive("Swift".into()).status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_contract_violations_map_to_400() {
        assert_eq!(AppError::InvalidCapacity.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::UnknownStrategy("x".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(AppError::NoSuitableRide.code(), "NO_SUITABLE_RIDE");
        assert_eq!(AppError::InvalidCapacity.code(), "INVALID_CAPACITY");
    }
}
