use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::User;

/// Request para registrar un usuario
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(
        length(min = 1, max = 100),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub name: String,

    #[validate(range(min = 1, max = 130))]
    pub age: u32,
}

/// Response de usuario para la API
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub name: String,
    pub age: u32,
    pub vehicle_count: usize,
    pub rides_offered: u32,
    pub rides_taken: u32,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            age: user.age,
            vehicle_count: user.vehicles.len(),
            rides_offered: user.rides_offered,
            rides_taken: user.rides_taken,
            created_at: user.created_at,
        }
    }
}
