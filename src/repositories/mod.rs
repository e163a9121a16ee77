//! Capa de datos en memoria
//!
//! Este módulo contiene el registro de usuarios y el ledger de rides.
//! `RideRegistry` es el objeto dueño de todo el estado del núcleo: una
//! instancia por proceso de servidor (o por test), nunca globals.

pub mod ride_ledger;
pub mod user_registry;

pub use ride_ledger::RideLedger;
pub use user_registry::UserRegistry;

/// Estado completo del registro: usuarios + ledger, mutados siempre
/// juntos bajo el mismo lock (ver `state::SharedRegistry`).
#[derive(Debug, Default)]
pub struct RideRegistry {
    pub users: UserRegistry,
    pub ledger: RideLedger,
}

impl RideRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}
