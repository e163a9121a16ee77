use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::ride_controller::RideController;
use crate::dto::ride_dto::{
    EndRideRequest, EndRideResponse, OfferRideRequest, OfferRideResponse, RideResponse,
    SelectRideRequest, SelectRideResponse,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_ride_router() -> Router<AppState> {
    Router::new()
        .route("/offer", post(offer_ride))
        .route("/select", post(select_ride))
        .route("/end", post(end_ride))
        .route("/", get(list_rides))
}

async fn offer_ride(
    State(state): State<AppState>,
    Json(request): Json<OfferRideRequest>,
) -> Result<Json<ApiResponse<OfferRideResponse>>, AppError> {
    let controller = RideController::new(state.registry.clone());
    let response = controller.offer(request).await?;
    Ok(Json(response))
}

async fn select_ride(
    State(state): State<AppState>,
    Json(request): Json<SelectRideRequest>,
) -> Result<Json<ApiResponse<SelectRideResponse>>, AppError> {
    let controller = RideController::new(state.registry.clone());
    let response = controller.select(request).await?;
    Ok(Json(response))
}

async fn end_ride(
    State(state): State<AppState>,
    Json(request): Json<EndRideRequest>,
) -> Result<Json<ApiResponse<EndRideResponse>>, AppError> {
    let controller = RideController::new(state.registry.clone());
    let response = controller.end(request).await?;
    Ok(Json(response))
}

async fn list_rides(
    State(state): State<AppState>,
) -> Result<Json<Vec<RideResponse>>, AppError> {
    let controller = RideController::new(state.registry.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
