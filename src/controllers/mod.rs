//! Controllers
//!
//! Cada controller encapsula las operaciones del núcleo sobre un recurso.
//! Toda operación toma el lock del registro una sola vez y o bien aplica
//! su secuencia completa o no cambia nada.

pub mod ride_controller;
pub mod stats_controller;
pub mod user_controller;
pub mod vehicle_controller;
