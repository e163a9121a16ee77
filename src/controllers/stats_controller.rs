use crate::dto::stats_dto::{RideStatsResponse, UserStatsResponse};
use crate::state::SharedRegistry;
use crate::utils::errors::AppResult;

/// Reporte de estadísticas por usuario, en orden de registro.
///
/// `in_progress` se calcula contra el flag `active` actual de cada ride,
/// no contra una foto tomada al reservar: un ride terminado deja de
/// contar para todos en cuanto se termina. Un conductor que reserva su
/// propio ride cuenta doble; comportamiento heredado y documentado.
pub struct StatsController {
    registry: SharedRegistry,
}

impl StatsController {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    pub async fn ride_stats(&self) -> AppResult<RideStatsResponse> {
        // lock de lectura: misma frontera de exclusión que las mutaciones,
        // así el reporte es una foto consistente
        let registry = self.registry.read().await;

        let users = registry
            .users
            .iter_in_order()
            .map(|user| {
                let driving = registry
                    .ledger
                    .all()
                    .filter(|r| r.active && r.driver == user.name)
                    .count();
                let riding = user
                    .taken_rides
                    .iter()
                    .filter(|&&id| registry.ledger.get(id).is_some_and(|r| r.active))
                    .count();

                UserStatsResponse {
                    name: user.name.clone(),
                    rides_offered: user.rides_offered,
                    rides_taken: user.rides_taken,
                    in_progress: (driving + riding) as u32,
                }
            })
            .collect();

        Ok(RideStatsResponse { users })
    }
}
