//! Ledger de rides
//!
//! Colección de todos los rides creados durante la vida del proceso,
//! activos y terminados. Los ids son monotónicos desde 1 y nunca se
//! reutilizan; iterar por id equivale a iterar en orden de inserción.

use std::collections::BTreeMap;

use crate::models::ride::Ride;

#[derive(Debug)]
pub struct RideLedger {
    rides: BTreeMap<u64, Ride>,
    next_id: u64,
}

impl Default for RideLedger {
    fn default() -> Self {
        Self {
            rides: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl RideLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Devuelve el contador actual y lo avanza; nunca se resetea
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, ride: Ride) {
        self.rides.insert(ride.id, ride);
    }

    pub fn get(&self, id: u64) -> Option<&Ride> {
        self.rides.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Ride> {
        self.rides.get_mut(&id)
    }

    /// Todos los rides en orden de inserción, activos e inactivos
    pub fn all(&self) -> impl Iterator<Item = &Ride> {
        self.rides.values()
    }

    /// Ride activo para el par (nombre, matrícula) del vehículo, si existe.
    /// Un vehículo solo puede estar en un ride activo a la vez.
    pub fn active_ride_for_vehicle(&self, vehicle_name: &str, vehicle_number: &str) -> Option<&Ride> {
        self.rides
            .values()
            .find(|r| r.active && r.vehicle.name == vehicle_name && r.vehicle.number == vehicle_number)
    }

    /// Primer ride activo (en orden de ledger) cuyo vehículo tiene ese
    /// nombre. Dos vehículos homónimos de dueños distintos resuelven al
    /// primero del ledger: comportamiento documentado, no corregido.
    pub fn first_active_by_vehicle_name_mut(&mut self, vehicle_name: &str) -> Option<&mut Ride> {
        self.rides
            .values_mut()
            .find(|r| r.active && r.vehicle.name == vehicle_name)
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}
