use crate::airports::AirportDirectory;
use crate::config::AppConfig;
use crate::flight_import::aggregate::aggregate_destinations;
use crate::flight_import::import::{read_csv_source, run_import};
use crate::flight_import::parser::{self, extract_flights};
use crate::store::Database;
use common::model::flight::FlightRecord;
use common::model::summary::UploadSummary;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Header written back to the stored export. Twenty columns, so a rewritten
/// file parses with the same positional layout it was read with.
pub const EXPORT_HEADER: &str = "Date,Airline,Flight,From,To,Dep Terminal,Dep Gate,\
Arr Terminal,Arr Gate,Canceled,Diverted To,Departure (Scheduled),Departure (Actual),\
Take off (Scheduled),Take off (Actual),Landing (Scheduled),Arrival (Scheduled),\
Arrival (Actual),Landing (Actual),Aircraft Type Name";

/// Appends uploaded flights that are not already recorded, keyed by flight
/// identity. Returns the merged list and how many were new.
pub fn merge_flights(
    existing: Vec<FlightRecord>,
    uploaded: Vec<FlightRecord>,
) -> (Vec<FlightRecord>, usize) {
    let known: HashSet<String> = existing.iter().map(FlightRecord::identity).collect();
    let mut merged = existing;
    let mut added = 0usize;

    for flight in uploaded {
        if known.contains(&flight.identity()) {
            continue;
        }
        merged.push(flight);
        added += 1;
    }
    (merged, added)
}

/// Renders flights back into export format. Fields containing commas are
/// quoted the same way the line parser unquotes them.
pub fn render_csv(flights: &[FlightRecord]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    for flight in flights {
        let mut fields = vec![String::new(); 20];
        fields[parser::COL_DATE] = flight.date.clone();
        fields[parser::COL_AIRLINE] = flight.airline.clone();
        fields[parser::COL_FLIGHT_NUMBER] = flight.flight_number.clone();
        fields[parser::COL_FROM] = flight.from.clone();
        fields[parser::COL_TO] = flight.to.clone();
        fields[parser::COL_DEPARTURE_SCHEDULED] =
            flight.departure_scheduled.clone().unwrap_or_default();
        fields[parser::COL_DEPARTURE_ACTUAL] =
            flight.departure_actual.clone().unwrap_or_default();
        fields[parser::COL_ARRIVAL_SCHEDULED] =
            flight.arrival_scheduled.clone().unwrap_or_default();
        fields[parser::COL_ARRIVAL_ACTUAL] = flight.arrival_actual.clone().unwrap_or_default();
        fields[parser::COL_AIRCRAFT] = flight.aircraft.clone().unwrap_or_default();

        out.push('\n');
        let row = fields
            .iter()
            .map(|field| quote_field(field))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&row);
    }
    out.push('\n');
    out
}

fn quote_field(value: &str) -> String {
    if value.contains(',') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

/// The upload flow: merge the uploaded flights into the stored export,
/// rewrite the file when anything is new, then run the refresh cycle.
pub fn merge_and_refresh(
    config: &AppConfig,
    airports: &AirportDirectory,
    uploaded: Vec<FlightRecord>,
) -> Result<UploadSummary, String> {
    let existing = read_csv_source(&config.flight_csv_path)
        .map(|text| extract_flights(&text, airports))
        .unwrap_or_default();

    let processed = uploaded.len();
    let (merged, added) = merge_flights(existing, uploaded);
    let duplicates = processed - added;

    if added == 0 {
        return Ok(UploadSummary {
            message: format!(
                "All {} flights already exist in the system. No new flights added.",
                processed
            ),
            processed,
            added: 0,
            duplicates,
            destinations: 0,
            countries: 0,
        });
    }

    let rendered = render_csv(&merged);
    if let Some(parent) = Path::new(&config.flight_csv_path).parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    fs::write(&config.flight_csv_path, &rendered).map_err(|e| e.to_string())?;

    let db = Database::open(&config.db_path).map_err(|e| e.to_string())?;
    let import = run_import(&db, airports, &rendered).map_err(|e| e.to_string())?;

    let countries = aggregate_destinations(&merged)
        .values()
        .map(|destination| destination.airport.country.clone())
        .collect::<HashSet<_>>()
        .len();

    Ok(UploadSummary {
        message: format!(
            "Successfully processed {} flights. Added {} new flights and {} destinations. \
             Updated {} countries visited.",
            processed, added, import.destinations_added, countries
        ),
        processed,
        added,
        duplicates,
        destinations: import.destinations_added,
        countries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_import::parser::tests::{csv, row};
    use common::model::location::LocationType;

    fn flights_from(rows: &[String]) -> Vec<FlightRecord> {
        let directory = AirportDirectory::new();
        extract_flights(&csv(rows), &directory)
    }

    #[test]
    fn reuploading_the_same_flights_adds_nothing() {
        let flights = flights_from(&[
            row("2024-01-05", "Delta", "DL100", "SFO", "JFK"),
            row("2024-02-01", "United", "UA30", "JFK", "LHR"),
        ]);

        let (merged, added) = merge_flights(flights.clone(), flights.clone());
        assert_eq!(added, 0);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn new_flights_are_appended_after_existing() {
        let existing = flights_from(&[row("2024-01-05", "Delta", "DL100", "SFO", "JFK")]);
        let uploaded = flights_from(&[
            row("2024-01-05", "Delta", "DL100", "SFO", "JFK"),
            row("2024-03-01", "United", "UA30", "JFK", "LHR"),
        ]);

        let (merged, added) = merge_flights(existing, uploaded);
        assert_eq!(added, 1);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].flight_number, "UA30");
    }

    #[test]
    fn rendered_csv_parses_back_to_the_same_flights() {
        let directory = AirportDirectory::new();
        let flights = flights_from(&[
            row("2024-01-05", "Delta", "DL100", "SFO", "JFK"),
            row("2024-02-01", "United", "UA30", "JFK", "LHR"),
        ]);

        let reparsed = extract_flights(&render_csv(&flights), &directory);
        let identities: Vec<String> = reparsed.iter().map(FlightRecord::identity).collect();
        let expected: Vec<String> = flights.iter().map(FlightRecord::identity).collect();
        assert_eq!(identities, expected);
        assert_eq!(reparsed[0].aircraft.as_deref(), Some("Airbus A320"));
    }

    #[test]
    fn fields_with_commas_survive_the_round_trip() {
        let directory = AirportDirectory::new();
        let mut flights = flights_from(&[row("2024-01-05", "Delta", "DL100", "SFO", "JFK")]);
        flights[0].airline = "Delta, Inc".to_string();

        let reparsed = extract_flights(&render_csv(&flights), &directory);
        assert_eq!(reparsed[0].airline, "Delta, Inc");
    }

    #[test]
    fn upload_refresh_writes_file_and_rebuilds_destinations() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            db_path: dir.path().join("test.sqlite").to_string_lossy().into_owned(),
            flight_csv_path: dir.path().join("export.csv").to_string_lossy().into_owned(),
        };
        let directory = AirportDirectory::new();
        let uploaded = flights_from(&[
            row("2024-01-05", "Delta", "DL100", "SFO", "JFK"),
            row("2024-02-01", "United", "UA30", "JFK", "LHR"),
        ]);

        let summary = merge_and_refresh(&config, &directory, uploaded.clone()).unwrap();
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.added, 2);
        assert_eq!(summary.duplicates, 0);
        assert_eq!(summary.destinations, 2);
        assert_eq!(summary.countries, 2);
        assert!(Path::new(&config.flight_csv_path).exists());

        let db = Database::open(&config.db_path).unwrap();
        assert_eq!(
            db.list_locations_by_type(LocationType::Visited).unwrap().len(),
            2
        );

        // Same upload again: everything is a duplicate, nothing changes.
        let again = merge_and_refresh(&config, &directory, uploaded).unwrap();
        assert_eq!(again.added, 0);
        assert_eq!(again.duplicates, 2);
        assert_eq!(
            db.list_locations_by_type(LocationType::Visited).unwrap().len(),
            2
        );
    }
}
