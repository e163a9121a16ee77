//! Services module
//!
//! Este módulo contiene la lógica de negocio reutilizable por los
//! controllers; hoy, el motor de selección de rides.

pub mod matching;

pub use matching::{strategy_from_request, MostVacant, PreferredVehicle, SelectionStrategy};
