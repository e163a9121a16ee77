//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo el registro vive en memoria detrás
//! de un único RwLock: cada operación del núcleo se ejecuta completa
//! dentro de ese límite de exclusión.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::RideRegistry;

/// Registro compartido entre handlers
pub type SharedRegistry = Arc<RwLock<RideRegistry>>;

#[derive(Clone)]
pub struct AppState {
    pub registry: SharedRegistry,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            registry: Arc::new(RwLock::new(RideRegistry::new())),
            config,
        }
    }
}
