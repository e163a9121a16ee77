use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::ride::Ride;

/// Request para ofrecer un ride
///
/// `seats` no se valida aquí: el núcleo responde `InvalidCapacity`
/// para cero asientos.
#[derive(Debug, Deserialize, Validate)]
pub struct OfferRideRequest {
    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub user_name: String,

    #[validate(
        length(min = 1, max = 200),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub origin: String,

    #[validate(
        length(min = 1, max = 200),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub destination: String,

    pub seats: u32,

    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub vehicle_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OfferRideResponse {
    pub ride_id: u64,
    pub driver: String,
    pub vehicle_name: String,
    pub origin: String,
    pub destination: String,
    pub total_seats: u32,
}

/// Request para reservar asientos en un ride publicado
#[derive(Debug, Deserialize, Validate)]
pub struct SelectRideRequest {
    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub user_name: String,

    #[validate(
        length(min = 1, max = 200),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub source: String,

    #[validate(
        length(min = 1, max = 200),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub destination: String,

    pub seats: u32,

    /// Token de estrategia: "MostVacant" o "PreferredVehicle"
    pub strategy: String,

    /// Solo tiene sentido con PreferredVehicle; su ausencia con esa
    /// estrategia se reporta como NoSuitableRide
    pub preferred_vehicle_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectRideResponse {
    pub ride_id: u64,
    pub driver: String,
    pub vehicle_name: String,
    pub seats_booked: u32,
    pub available_seats: u32,
}

/// Request para terminar el ride activo de un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct EndRideRequest {
    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub vehicle_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EndRideResponse {
    pub ride_id: u64,
    pub vehicle_name: String,
}

/// Response de ride para listados
#[derive(Debug, Serialize, Deserialize)]
pub struct RideResponse {
    pub id: u64,
    pub driver: String,
    pub vehicle_name: String,
    pub vehicle_number: String,
    pub origin: String,
    pub destination: String,
    pub total_seats: u32,
    pub available_seats: u32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Ride> for RideResponse {
    fn from(ride: &Ride) -> Self {
        Self {
            id: ride.id,
            driver: ride.driver.clone(),
            vehicle_name: ride.vehicle.name.clone(),
            vehicle_number: ride.vehicle.number.clone(),
            origin: ride.origin.clone(),
            destination: ride.destination.clone(),
            total_seats: ride.total_seats,
            available_seats: ride.available_seats,
            active: ride.active,
            created_at: ride.created_at,
        }
    }
}
