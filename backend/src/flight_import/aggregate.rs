use common::model::airport::Airport;
use common::model::flight::FlightRecord;
use std::collections::HashMap;

/// Per-destination summary for one import run. Never persisted; only used to
/// build `visited` rows.
#[derive(Debug, Clone)]
pub struct Destination {
    pub airport: Airport,
    pub visit_count: u32,
}

/// Folds usable flights into one aggregate per destination airport code.
/// Iteration order of the result is unspecified.
pub fn aggregate_destinations(flights: &[FlightRecord]) -> HashMap<String, Destination> {
    let mut destinations: HashMap<String, Destination> = HashMap::new();
    for flight in flights {
        destinations
            .entry(flight.to_airport.code.clone())
            .and_modify(|destination| destination.visit_count += 1)
            .or_insert_with(|| Destination {
                airport: flight.to_airport.clone(),
                visit_count: 1,
            });
    }
    destinations
}
