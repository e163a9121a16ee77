use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::user_controller::UserController;
use crate::dto::user_dto::{RegisterUserRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/", get(list_users))
}

async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.registry.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let controller = UserController::new(state.registry.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
