use crate::model::airport::Airport;
use serde::{Deserialize, Serialize};

/// A usable flight extracted from a Flighty CSV export.
///
/// Only flights whose origin and destination both resolved against the
/// airport directory become `FlightRecord`s; anything else is dropped during
/// extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRecord {
    pub date: String,
    pub airline: String,
    pub flight_number: String,
    pub from: String,
    pub to: String,
    pub from_airport: Airport,
    pub to_airport: Airport,
    pub departure_scheduled: Option<String>,
    pub departure_actual: Option<String>,
    pub arrival_scheduled: Option<String>,
    pub arrival_actual: Option<String>,
    pub aircraft: Option<String>,
}

impl FlightRecord {
    /// Key used to recognize an already-recorded flight during upload merges.
    pub fn identity(&self) -> String {
        format!(
            "{}_{}_{}_{}_{}",
            self.date, self.airline, self.flight_number, self.from, self.to
        )
    }
}

/// One endpoint of a rendered flight route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEndpoint {
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// An origin/destination pair served to the globe visualization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRoute {
    pub from: RouteEndpoint,
    pub to: RouteEndpoint,
    pub date: String,
    pub airline: String,
    pub flight_number: String,
}

impl From<&FlightRecord> for FlightRoute {
    fn from(flight: &FlightRecord) -> Self {
        FlightRoute {
            from: RouteEndpoint {
                code: flight.from_airport.code.clone(),
                name: flight.from_airport.city.clone(),
                latitude: flight.from_airport.latitude,
                longitude: flight.from_airport.longitude,
            },
            to: RouteEndpoint {
                code: flight.to_airport.code.clone(),
                name: flight.to_airport.city.clone(),
                latitude: flight.to_airport.latitude,
                longitude: flight.to_airport.longitude,
            },
            date: flight.date.clone(),
            airline: flight.airline.clone(),
            flight_number: flight.flight_number.clone(),
        }
    }
}
