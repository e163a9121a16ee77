//! Motor de selección de rides
//!
//! El filtrado de candidatos (ruta exacta, asientos suficientes, ride
//! activo) vive en el controller; aquí solo se decide CUÁL de los
//! candidatos gana. Cada estrategia es una función pura de la lista de
//! candidatos a lo sumo un elegido, detrás de un trait común: añadir
//! una estrategia nueva no toca el filtrado.

pub mod most_vacant;
pub mod preferred_vehicle;
pub mod strategy;

pub use most_vacant::MostVacant;
pub use preferred_vehicle::PreferredVehicle;
pub use strategy::SelectionStrategy;

use crate::utils::errors::{AppError, AppResult};

/// Resolver el token de estrategia del request a una implementación.
/// El set es cerrado: cualquier otro token es `UnknownStrategy`.
pub fn strategy_from_request(
    strategy: &str,
    preferred_vehicle_name: Option<&str>,
) -> AppResult<Box<dyn SelectionStrategy>> {
    match strategy {
        "MostVacant" => Ok(Box::new(MostVacant)),
        "PreferredVehicle" => Ok(Box::new(PreferredVehicle::new(preferred_vehicle_name))),
        other => Err(AppError::UnknownStrategy(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_strategy_tokens_resolve() {
        assert_eq!(strategy_from_request("MostVacant", None).unwrap().name(), "MostVacant");
        assert_eq!(
            strategy_from_request("PreferredVehicle", Some("Activa")).unwrap().name(),
            "PreferredVehicle"
        );
    }

    #[test]
    fn test_unknown_strategy_token_is_rejected() {
        let err = strategy_from_request("Fastest", None).unwrap_err();
        assert!(matches!(err, AppError::UnknownStrategy(token) if token == "Fastest"));
    }
}
