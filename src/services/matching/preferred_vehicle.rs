use crate::models::ride::Ride;
use crate::services::matching::strategy::SelectionStrategy;

/// Elige el primer candidato cuyo vehículo tiene el nombre preferido.
/// Sin nombre preferido (o en blanco) no hay elección posible: el
/// controller lo reporta como `NoSuitableRide`.
#[derive(Debug)]
pub struct PreferredVehicle {
    vehicle_name: Option<String>,
}

impl PreferredVehicle {
    pub fn new(vehicle_name: Option<&str>) -> Self {
        Self {
            vehicle_name: vehicle_name
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from),
        }
    }
}

impl SelectionStrategy for PreferredVehicle {
    fn name(&self) -> &'static str {
        "PreferredVehicle"
    }

    fn select<'a>(&self, candidates: &[&'a Ride]) -> Option<&'a Ride> {
        let wanted = self.vehicle_name.as_deref()?;
        candidates.iter().copied().find(|r| r.vehicle.name == wanted)
    }
}
