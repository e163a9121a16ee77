use crate::models::ride::Ride;
use crate::services::matching::strategy::SelectionStrategy;

/// Elige el candidato con más asientos libres. Los empates los gana el
/// primero encontrado en orden de ledger, es decir el de id más bajo.
#[derive(Debug, Default)]
pub struct MostVacant;

impl SelectionStrategy for MostVacant {
    fn name(&self) -> &'static str {
        "MostVacant"
    }

    fn select<'a>(&self, candidates: &[&'a Ride]) -> Option<&'a Ride> {
        let mut best: Option<&Ride> = None;
        for &ride in candidates {
            match best {
                // solo un estrictamente mayor desbanca al actual
                Some(current) if ride.available_seats <= current.available_seats => {}
                _ => best = Some(ride),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::Vehicle;

    fn ride(id: u64, available: u32) -> Ride {
        let vehicle = Vehicle::new("Ritu".to_string(), format!("V{}", id), format!("KA-{}", id));
        let mut r = Ride::new(id, "Ritu".to_string(), vehicle, "A".to_string(), "B".to_string(), 4);
        r.available_seats = available;
        r
    }

    #[test]
    fn test_picks_candidate_with_most_seats() {
        let (a, b, c) = (ride(1, 1), ride(2, 3), ride(3, 2));
        let candidates = vec![&a, &b, &c];

        let chosen = MostVacant.select(&candidates).unwrap();
        assert_eq!(chosen.id, 2);
    }

    #[test]
    fn test_tie_goes_to_lowest_id() {
        let (a, b, c) = (ride(1, 2), ride(2, 3), ride(3, 3));
        let candidates = vec![&a, &b, &c];

        let chosen = MostVacant.select(&candidates).unwrap();
        assert_eq!(chosen.id, 2);
    }

    #[test]
    fn test_empty_candidates_yield_none() {
        assert!(MostVacant.select(&[]).is_none());
    }
}
