use tracing::info;
use validator::Validate;

use crate::dto::user_dto::{RegisterUserRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::models::user::User;
use crate::state::SharedRegistry;
use crate::utils::errors::AppResult;

pub struct UserController {
    registry: SharedRegistry,
}

impl UserController {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    pub async fn register(&self, request: RegisterUserRequest) -> AppResult<ApiResponse<UserResponse>> {
        request.validate()?;

        let mut registry = self.registry.write().await;
        let user = User::new(request.name.clone(), request.age);
        let response = UserResponse::from(&user);
        registry.users.register(user)?;

        info!("👤 Usuario registrado: {} ({} años)", request.name, request.age);
        Ok(ApiResponse::success_with_message(
            response,
            format!("Usuario '{}' registrado exitosamente", request.name),
        ))
    }

    pub async fn list(&self) -> AppResult<Vec<UserResponse>> {
        let registry = self.registry.read().await;
        Ok(registry.users.iter_in_order().map(UserResponse::from).collect())
    }
}
