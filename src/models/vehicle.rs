//! Modelo de Vehicle
//!
//! Un vehículo pertenece en exclusiva a su dueño y es inmutable una vez
//! creado. La unicidad "en ride activo" se comprueba por el par
//! (nombre, matrícula), no aquí.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub owner: String,
    pub name: String,
    pub number: String,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(owner: String, name: String, number: String) -> Self {
        Self {
            owner,
            name,
            number,
            created_at: Utc::now(),
        }
    }
}
