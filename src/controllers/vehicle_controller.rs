use tracing::info;
use validator::Validate;

use crate::dto::vehicle_dto::{RegisterVehicleRequest, VehicleResponse};
use crate::dto::ApiResponse;
use crate::models::vehicle::Vehicle;
use crate::state::SharedRegistry;
use crate::utils::errors::{AppError, AppResult};

pub struct VehicleController {
    registry: SharedRegistry,
}

impl VehicleController {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    pub async fn register(
        &self,
        request: RegisterVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        let mut registry = self.registry.write().await;
        let vehicle = Vehicle::new(
            request.owner_name.clone(),
            request.vehicle_name.clone(),
            request.number.clone(),
        );
        let response = VehicleResponse::from(&vehicle);
        registry.users.add_vehicle(&request.owner_name, vehicle)?;

        info!(
            "🚙 Vehículo registrado: {} ({}) de {}",
            request.vehicle_name, request.number, request.owner_name
        );
        Ok(ApiResponse::success_with_message(
            response,
            format!(
                "Vehículo '{}' registrado para '{}'",
                request.vehicle_name, request.owner_name
            ),
        ))
    }

    pub async fn list_by_owner(&self, owner_name: &str) -> AppResult<Vec<VehicleResponse>> {
        let registry = self.registry.read().await;
        let user = registry
            .users
            .get(owner_name)
            .ok_or_else(|| AppError::UnknownUser(owner_name.to_string()))?;

        Ok(user.vehicles.iter().map(VehicleResponse::from).collect())
    }
}
