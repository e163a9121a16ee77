use serde::{Deserialize, Serialize};

/// Estadísticas de un usuario: contadores mantenidos por los controllers
/// más `in_progress`, que se calcula fresco en cada consulta.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserStatsResponse {
    pub name: String,
    pub rides_offered: u32,
    pub rides_taken: u32,
    pub in_progress: u32,
}

/// Response del reporte completo, en orden de registro de usuarios
#[derive(Debug, Serialize, Deserialize)]
pub struct RideStatsResponse {
    pub users: Vec<UserStatsResponse>,
}
