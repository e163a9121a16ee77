//! Modelo de User
//!
//! Este módulo contiene el struct User. La identidad es el nombre,
//! único e inmutable; los contadores los mantienen los controllers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::vehicle::Vehicle;

/// Usuario registrado en el sistema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub vehicles: Vec<Vehicle>,
    pub rides_offered: u32,
    pub rides_taken: u32,
    /// Ids de los rides reservados, en orden de reserva
    pub taken_rides: Vec<u64>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, age: u32) -> Self {
        Self {
            name,
            age,
            vehicles: Vec::new(),
            rides_offered: 0,
            rides_taken: 0,
            taken_rides: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    /// Primer vehículo del usuario con ese nombre
    pub fn find_vehicle(&self, vehicle_name: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.name == vehicle_name)
    }
}
