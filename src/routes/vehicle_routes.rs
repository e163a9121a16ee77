use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{RegisterVehicleRequest, VehicleResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_vehicle))
        .route("/:owner", get(list_vehicles_by_owner))
}

async fn register_vehicle(
    State(state): State<AppState>,
    Json(request): Json<RegisterVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.registry.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn list_vehicles_by_owner(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.registry.clone());
    let response = controller.list_by_owner(&owner).await?;
    Ok(Json(response))
}
