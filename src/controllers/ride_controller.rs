//! Controller de rides
//!
//! Aquí viven las tres operaciones del motor: ofrecer, reservar y
//! terminar. Cada una se ejecuta completa bajo el lock de escritura del
//! registro, así dos reservas concurrentes no pueden sobre-reservar un
//! ride ni dos offers concurrentes duplicar un vehículo activo.

use tracing::info;
use validator::Validate;

use crate::dto::ride_dto::{
    EndRideRequest, EndRideResponse, OfferRideRequest, OfferRideResponse, RideResponse,
    SelectRideRequest, SelectRideResponse,
};
use crate::dto::ApiResponse;
use crate::models::ride::Ride;
use crate::services::matching::strategy_from_request;
use crate::state::SharedRegistry;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation;

pub struct RideController {
    registry: SharedRegistry,
}

impl RideController {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// Publicar un ride nuevo sobre un vehículo del usuario.
    /// Un vehículo (nombre + matrícula) solo puede tener un ride activo,
    /// da igual el conductor o la ruta.
    pub async fn offer(&self, request: OfferRideRequest) -> AppResult<ApiResponse<OfferRideResponse>> {
        request.validate()?;
        validation::validate_positive(request.seats).map_err(|_| AppError::InvalidCapacity)?;

        let mut guard = self.registry.write().await;
        let registry = &mut *guard;

        let vehicle = {
            let user = registry
                .users
                .get(&request.user_name)
                .ok_or_else(|| AppError::UnknownUser(request.user_name.clone()))?;
            user.find_vehicle(&request.vehicle_name)
                .cloned()
                .ok_or_else(|| AppError::UnknownVehicle {
                    owner: request.user_name.clone(),
                    vehicle: request.vehicle_name.clone(),
                })?
        };

        if registry
            .ledger
            .active_ride_for_vehicle(&vehicle.name, &vehicle.number)
            .is_some()
        {
            return Err(AppError::VehicleAlreadyActive(vehicle.name));
        }

        let ride_id = registry.ledger.next_id();
        let ride = Ride::new(
            ride_id,
            request.user_name.clone(),
            vehicle,
            request.origin.clone(),
            request.destination.clone(),
            request.seats,
        );
        let response = OfferRideResponse {
            ride_id,
            driver: ride.driver.clone(),
            vehicle_name: ride.vehicle.name.clone(),
            origin: ride.origin.clone(),
            destination: ride.destination.clone(),
            total_seats: ride.total_seats,
        };
        registry.ledger.insert(ride);

        let driver = registry
            .users
            .get_mut(&request.user_name)
            .ok_or_else(|| AppError::Internal("driver vanished during offer".to_string()))?;
        driver.rides_offered += 1;

        info!(
            "🚗 Ride {} ofrecido por {} con {}: {} a {} ({} asientos)",
            response.ride_id,
            response.driver,
            response.vehicle_name,
            response.origin,
            response.destination,
            response.total_seats
        );
        Ok(ApiResponse::success_with_message(
            response,
            format!("Ride ofrecido por '{}'", request.user_name),
        ))
    }

    /// Reservar asientos: filtra candidatos (ruta exacta, asientos
    /// suficientes, activos) y deja la elección a la estrategia pedida.
    pub async fn select(&self, request: SelectRideRequest) -> AppResult<ApiResponse<SelectRideResponse>> {
        request.validate()?;

        let mut guard = self.registry.write().await;
        let registry = &mut *guard;

        if registry.users.get(&request.user_name).is_none() {
            return Err(AppError::UnknownUser(request.user_name.clone()));
        }

        let chosen_id = {
            let candidates: Vec<&Ride> = registry
                .ledger
                .all()
                .filter(|r| {
                    r.active
                        && r.available_seats >= request.seats
                        && r.matches_route(&request.source, &request.destination)
                })
                .collect();

            // Sin candidatos es un resultado normal, no un error del caller;
            // por eso se reporta antes de mirar siquiera la estrategia.
            if candidates.is_empty() {
                return Err(AppError::NoMatchingRide);
            }

            let strategy = strategy_from_request(
                &request.strategy,
                request.preferred_vehicle_name.as_deref(),
            )?;
            strategy
                .select(&candidates)
                .map(|r| r.id)
                .ok_or(AppError::NoSuitableRide)?
        };

        let ride = registry
            .ledger
            .get_mut(chosen_id)
            .ok_or_else(|| AppError::Internal("selected ride vanished from ledger".to_string()))?;
        // re-chequeo y descuento en el mismo paso, bajo el mismo lock
        if !ride.book_seats(request.seats) {
            return Err(AppError::Internal("seat re-check failed for selected ride".to_string()));
        }
        let response = SelectRideResponse {
            ride_id: ride.id,
            driver: ride.driver.clone(),
            vehicle_name: ride.vehicle.name.clone(),
            seats_booked: request.seats,
            available_seats: ride.available_seats,
        };

        let rider = registry
            .users
            .get_mut(&request.user_name)
            .ok_or_else(|| AppError::Internal("rider vanished during select".to_string()))?;
        rider.rides_taken += 1;
        rider.taken_rides.push(chosen_id);

        info!(
            "🎫 {} reservó {} asiento(s) en el ride {}",
            request.user_name, request.seats, response.ride_id
        );
        Ok(ApiResponse::success_with_message(
            response,
            format!(
                "'{}' reservó el ride {} con {} asiento(s)",
                request.user_name, chosen_id, request.seats
            ),
        ))
    }

    /// Terminar el primer ride activo (en orden de ledger) del vehículo
    /// con ese nombre. Irreversible; el ride queda para las estadísticas.
    pub async fn end(&self, request: EndRideRequest) -> AppResult<ApiResponse<EndRideResponse>> {
        request.validate()?;

        let mut registry = self.registry.write().await;
        let ride = registry
            .ledger
            .first_active_by_vehicle_name_mut(&request.vehicle_name)
            .ok_or_else(|| AppError::NoActiveRideForVehicle(request.vehicle_name.clone()))?;

        ride.end();
        let response = EndRideResponse {
            ride_id: ride.id,
            vehicle_name: request.vehicle_name.clone(),
        };

        info!("🏁 Ride {} del vehículo {} terminado", response.ride_id, request.vehicle_name);
        Ok(ApiResponse::success_with_message(
            response,
            format!("Ride del vehículo '{}' terminado", request.vehicle_name),
        ))
    }

    pub async fn list(&self) -> AppResult<Vec<RideResponse>> {
        let registry = self.registry.read().await;
        Ok(registry.ledger.all().map(RideResponse::from).collect())
    }
}
