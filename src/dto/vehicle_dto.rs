use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Request para registrar un vehículo a nombre de un usuario
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterVehicleRequest {
    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub owner_name: String,

    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub vehicle_name: String,

    #[validate(custom = "crate::utils::validation::validate_vehicle_number")]
    pub number: String,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub owner: String,
    pub name: String,
    pub number: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            owner: vehicle.owner.clone(),
            name: vehicle.name.clone(),
            number: vehicle.number.clone(),
            created_at: vehicle.created_at,
        }
    }
}
