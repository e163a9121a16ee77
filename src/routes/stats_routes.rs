use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::stats_controller::StatsController;
use crate::dto::stats_dto::RideStatsResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_stats_router() -> Router<AppState> {
    Router::new().route("/", get(ride_stats))
}

async fn ride_stats(
    State(state): State<AppState>,
) -> Result<Json<RideStatsResponse>, AppError> {
    let controller = StatsController::new(state.registry.clone());
    let response = controller.ride_stats().await?;
    Ok(Json(response))
}
