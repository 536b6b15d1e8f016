use crate::airports::AirportDirectory;
use crate::config::AppConfig;
use crate::flight_import::aggregate::aggregate_destinations;
use crate::flight_import::parser::extract_flights;
use crate::store::Database;
use common::model::location::{LocationType, NewLocation};
use common::model::summary::ImportSummary;
use log::{info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Substring embedded in the notes of every importer-created row. The purge
/// step finds its own rows by it; manual entries never carry it.
pub const IMPORT_MARKER: &str = "Flight destination";

/// Two locations within this many degrees of latitude AND longitude count as
/// the same place, roughly a kilometre.
pub const COORD_TOLERANCE: f64 = 0.01;

/// Reads the stored CSV export. A missing file and an effectively empty one
/// are the same condition: nothing to import.
pub fn read_csv_source(path: &str) -> Option<String> {
    if !Path::new(path).exists() {
        return None;
    }
    match fs::read_to_string(path) {
        Ok(text) if text.trim().is_empty() => None,
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Could not read flight CSV {}: {}", path, e);
            None
        }
    }
}

/// One full refresh against the configured CSV file. An unavailable source is
/// a no-op, not a failure.
pub fn run_import_from_file(
    config: &AppConfig,
    airports: &AirportDirectory,
) -> Result<ImportSummary, String> {
    let csv_text = match read_csv_source(&config.flight_csv_path) {
        Some(text) => text,
        None => {
            info!(
                "Flight CSV {} not found or empty, skipping import",
                config.flight_csv_path
            );
            return Ok(ImportSummary::default());
        }
    };

    let db = Database::open(&config.db_path).map_err(|e| e.to_string())?;
    run_import(&db, airports, &csv_text).map_err(|e| e.to_string())
}

/// The refresh cycle: purge previously imported destinations, rebuild them
/// from the given CSV text, and update the countries-visited counter.
///
/// Rebuilding always reflects the latest export exactly, at the cost of
/// discarding manual edits made to an imported row since the last run. A
/// destination is skipped when any existing location sits within
/// `COORD_TOLERANCE` of it; the store is re-queried per destination so rows
/// inserted earlier in the same run count as occupied coordinates too.
pub fn run_import(
    db: &Database,
    airports: &AirportDirectory,
    csv_text: &str,
) -> rusqlite::Result<ImportSummary> {
    if csv_text.trim().is_empty() {
        return Ok(ImportSummary::default());
    }

    let purged = db.delete_imported_visited(IMPORT_MARKER)?;
    if purged > 0 {
        info!("Purged {} previously imported destinations", purged);
    }

    let flights = extract_flights(csv_text, airports);
    let destinations = aggregate_destinations(&flights);

    let mut added = 0usize;
    for destination in destinations.values() {
        let existing = db.list_locations()?;
        let occupied = existing.iter().any(|location| {
            (location.latitude - destination.airport.latitude).abs() < COORD_TOLERANCE
                && (location.longitude - destination.airport.longitude).abs() < COORD_TOLERANCE
        });
        if occupied {
            continue;
        }

        let new_location = NewLocation {
            name: format!(
                "{}, {}",
                destination.airport.city, destination.airport.country
            ),
            latitude: destination.airport.latitude,
            longitude: destination.airport.longitude,
            location_type: LocationType::Visited,
            visit_date: None,
            notes: Some(import_notes(
                &destination.airport.code,
                destination.visit_count,
            )),
        };
        match db.create_location(&new_location) {
            Ok(_) => added += 1,
            Err(e) => warn!(
                "Could not store destination {}: {}",
                destination.airport.code, e
            ),
        }
    }

    let countries: HashSet<&str> = destinations
        .values()
        .map(|destination| destination.airport.country.as_str())
        .collect();
    if !countries.is_empty() {
        db.set_setting("countries_visited", &countries.len().to_string())?;
    }

    info!(
        "Imported {} destinations from {} flights",
        added,
        flights.len()
    );
    Ok(ImportSummary {
        flights_processed: flights.len(),
        destinations_added: added,
    })
}

fn import_notes(code: &str, visits: u32) -> String {
    let plural = if visits == 1 { "" } else { "s" };
    format!("{}: {} ({} visit{})", IMPORT_MARKER, code, visits, plural)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight_import::parser::tests::{csv, row};

    fn manual_visited(name: &str, lat: f64, lon: f64) -> NewLocation {
        NewLocation {
            name: name.to_string(),
            latitude: lat,
            longitude: lon,
            location_type: LocationType::Visited,
            visit_date: Some("2023-05".to_string()),
            notes: Some("Added by hand".to_string()),
        }
    }

    #[test]
    fn scenario_two_usable_flights_one_destination() {
        let db = Database::open_in_memory().unwrap();
        let directory = AirportDirectory::new();
        let text = csv(&[
            row("2024-01-05", "Delta", "DL100", "SFO", "JFK"),
            row("2024-02-01", "Delta", "DL200", "LAX", "JFK"),
            row("2024-03-01", "Delta", "DL300", "SFO", "ZZZ"),
        ]);

        let summary = run_import(&db, &directory, &text).unwrap();
        assert_eq!(summary.flights_processed, 2);
        assert_eq!(summary.destinations_added, 1);

        let visited = db.list_locations_by_type(LocationType::Visited).unwrap();
        assert_eq!(visited.len(), 1);
        assert_eq!(visited[0].name, "New York, USA");
        assert_eq!(
            visited[0].notes.as_deref(),
            Some("Flight destination: JFK (2 visits)")
        );
        assert!(visited[0].visit_date.is_none());
    }

    #[test]
    fn reimport_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        let directory = AirportDirectory::new();
        let text = csv(&[
            row("2024-01-05", "Delta", "DL100", "SFO", "JFK"),
            row("2024-02-01", "United", "UA30", "JFK", "LHR"),
        ]);

        // Destination insertion order is unspecified, so compare as sets.
        let visited_names = |db: &Database| {
            let mut names: Vec<String> = db
                .list_locations_by_type(LocationType::Visited)
                .unwrap()
                .iter()
                .map(|l| l.name.clone())
                .collect();
            names.sort();
            names
        };

        run_import(&db, &directory, &text).unwrap();
        let first = visited_names(&db);

        let summary = run_import(&db, &directory, &text).unwrap();
        let second = visited_names(&db);

        assert_eq!(first, second);
        assert_eq!(summary.destinations_added, first.len());
    }

    #[test]
    fn nearby_manual_location_blocks_insert_and_survives() {
        let db = Database::open_in_memory().unwrap();
        let directory = AirportDirectory::new();
        // Within 0.01 degrees of JFK (40.6398, -73.7789).
        db.create_location(&manual_visited("Queens trip", 40.6401, -73.7785))
            .unwrap();

        let text = csv(&[row("2024-01-05", "Delta", "DL100", "SFO", "JFK")]);
        let summary = run_import(&db, &directory, &text).unwrap();

        assert_eq!(summary.flights_processed, 1);
        assert_eq!(summary.destinations_added, 0);

        let visited = db.list_locations_by_type(LocationType::Visited).unwrap();
        assert_eq!(visited.len(), 1);
        assert_eq!(visited[0].name, "Queens trip");
    }

    #[test]
    fn empty_text_leaves_store_untouched() {
        let db = Database::open_in_memory().unwrap();
        let directory = AirportDirectory::new();
        db.create_location(&manual_visited("Oslo, Norway", 59.91, 10.75))
            .unwrap();

        let summary = run_import(&db, &directory, "  \n ").unwrap();
        assert_eq!(summary.flights_processed, 0);
        assert_eq!(summary.destinations_added, 0);
        assert_eq!(db.list_locations().unwrap().len(), 1);
        assert!(db.get_setting("countries_visited").unwrap().is_none());
    }

    #[test]
    fn countries_visited_tracks_distinct_countries() {
        let db = Database::open_in_memory().unwrap();
        let directory = AirportDirectory::new();
        let text = csv(&[
            row("2024-01-05", "Delta", "DL100", "SFO", "JFK"),
            row("2024-02-01", "United", "UA30", "JFK", "LHR"),
            row("2024-03-01", "BA", "BA117", "LHR", "LGW"),
        ]);

        run_import(&db, &directory, &text).unwrap();
        let setting = db.get_setting("countries_visited").unwrap().unwrap();
        assert_eq!(setting.value, "2");
    }

    #[test]
    fn missing_source_file_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            db_path: dir.path().join("test.sqlite").to_string_lossy().into_owned(),
            flight_csv_path: dir.path().join("missing.csv").to_string_lossy().into_owned(),
        };
        let directory = AirportDirectory::new();

        let summary = run_import_from_file(&config, &directory).unwrap();
        assert_eq!(summary.flights_processed, 0);
        assert_eq!(summary.destinations_added, 0);
    }

    #[test]
    fn import_from_file_reads_the_stored_export() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("export.csv");
        let text = csv(&[row("2024-01-05", "Delta", "DL100", "SFO", "JFK")]);
        fs::write(&csv_path, &text).unwrap();

        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            db_path: dir.path().join("test.sqlite").to_string_lossy().into_owned(),
            flight_csv_path: csv_path.to_string_lossy().into_owned(),
        };
        let directory = AirportDirectory::new();

        let summary = run_import_from_file(&config, &directory).unwrap();
        assert_eq!(summary.flights_processed, 1);
        assert_eq!(summary.destinations_added, 1);
    }
}
