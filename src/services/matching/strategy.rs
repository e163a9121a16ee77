use crate::models::ride::Ride;

/// Trait para las estrategias de selección de rides.
///
/// Recibe el conjunto de candidatos ya filtrado (ruta exacta, asientos
/// suficientes, activos) en orden de ledger y devuelve el ride elegido,
/// o `None` si ninguno satisface la estrategia.
pub trait SelectionStrategy: Send + Sync + std::fmt::Debug {
    /// Nombre del token con el que se pide la estrategia
    fn name(&self) -> &'static str;

    /// Elegir exactamente un candidato, o ninguno
    fn select<'a>(&self, candidates: &[&'a Ride]) -> Option<&'a Ride>;
}
