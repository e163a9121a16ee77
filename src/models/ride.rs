//! Modelo de Ride
//!
//! Un ride nace activo con todos los asientos libres y nunca se borra:
//! queda en el ledger para las estadísticas históricas. Invariante:
//! 0 <= available_seats <= total_seats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::vehicle::Vehicle;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    pub id: u64,
    /// Nombre del conductor que ofreció el ride
    pub driver: String,
    pub vehicle: Vehicle,
    pub origin: String,
    pub destination: String,
    pub total_seats: u32,
    pub available_seats: u32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Ride {
    pub fn new(
        id: u64,
        driver: String,
        vehicle: Vehicle,
        origin: String,
        destination: String,
        seats: u32,
    ) -> Self {
        Self {
            id,
            driver,
            vehicle,
            origin,
            destination,
            total_seats: seats,
            available_seats: seats,
            active: true,
            created_at: Utc::now(),
        }
    }

    /// Igualdad exacta de strings, sin fuzzy ni case-insensitive
    pub fn matches_route(&self, source: &str, destination: &str) -> bool {
        self.origin == source && self.destination == destination
    }

    /// Re-valida y descuenta asientos en un solo paso.
    /// Devuelve false sin mutar nada si el ride no puede absorber la reserva.
    pub fn book_seats(&mut self, seats: u32) -> bool {
        if !self.active || self.available_seats < seats {
            return false;
        }
        self.available_seats -= seats;
        true
    }

    /// Terminar el ride. Irreversible: no existe reactivación.
    pub fn end(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride() -> Ride {
        let vehicle = Vehicle::new("Amit".to_string(), "Swift".to_string(), "KA-01-12345".to_string());
        Ride::new(1, "Amit".to_string(), vehicle, "Hyderabad".to_string(), "Bangalore".to_string(), 2)
    }

    #[test]
    fn test_book_seats_decrements() {
        let mut r = ride();
        assert!(r.book_seats(1));
        assert_eq!(r.available_seats, 1);
        assert_eq!(r.total_seats, 2);
    }

    #[test]
    fn test_book_seats_never_overbooks() {
        let mut r = ride();
        assert!(r.book_seats(2));
        assert!(!r.book_seats(1));
        assert_eq!(r.available_seats, 0);
    }

    #[test]
    fn test_book_seats_rejects_inactive() {
        let mut r = ride();
        r.end();
        assert!(!r.book_seats(1));
        assert_eq!(r.available_seats, 2);
    }

    #[test]
    fn test_matches_route_is_exact() {
        let r = ride();
        assert!(r.matches_route("Hyderabad", "Bangalore"));
        assert!(!r.matches_route("hyderabad", "Bangalore"));
        assert!(!r.matches_route("Bangalore", "Hyderabad"));
    }
}
