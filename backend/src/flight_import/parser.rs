use crate::airports::AirportDirectory;
use common::model::flight::FlightRecord;
use log::debug;

// Flighty export layout, shared with the writer in `merge`. Columns are
// positional; the header row only contributes its field count.
pub(crate) const COL_DATE: usize = 0;
pub(crate) const COL_AIRLINE: usize = 1;
pub(crate) const COL_FLIGHT_NUMBER: usize = 2;
pub(crate) const COL_FROM: usize = 3;
pub(crate) const COL_TO: usize = 4;
pub(crate) const COL_DEPARTURE_SCHEDULED: usize = 11;
pub(crate) const COL_DEPARTURE_ACTUAL: usize = 12;
pub(crate) const COL_ARRIVAL_SCHEDULED: usize = 16;
pub(crate) const COL_ARRIVAL_ACTUAL: usize = 17;
pub(crate) const COL_AIRCRAFT: usize = 19;

/// Splits one CSV line into trimmed fields.
///
/// A double quote toggles the in-quotes flag and is never copied into the
/// field, so quoted fields may contain literal commas. Embedded quotes are
/// not escapable. The field after the last comma is always emitted, even
/// when empty.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Extracts usable flights from full CSV text, in input order.
///
/// The header line is discarded. Rows with fewer fields than the header are
/// skipped. A flight is kept only when both its airport codes resolve
/// against the directory; the number of rows dropped for unknown codes is
/// logged in aggregate, never per row.
pub fn extract_flights(csv_text: &str, airports: &AirportDirectory) -> Vec<FlightRecord> {
    let mut lines = csv_text.trim().lines();
    let header = match lines.next() {
        Some(header) => header,
        None => return Vec::new(),
    };
    let header_len = header.split(',').count();

    let mut flights = Vec::new();
    let mut unresolved = 0usize;

    for line in lines {
        let values = parse_line(line);
        if values.len() < header_len {
            continue;
        }

        let from = field(&values, COL_FROM);
        let to = field(&values, COL_TO);
        let (from_airport, to_airport) = match (airports.lookup(&from), airports.lookup(&to)) {
            (Some(from_airport), Some(to_airport)) => {
                (from_airport.clone(), to_airport.clone())
            }
            _ => {
                unresolved += 1;
                continue;
            }
        };

        flights.push(FlightRecord {
            date: field(&values, COL_DATE),
            airline: field(&values, COL_AIRLINE),
            flight_number: field(&values, COL_FLIGHT_NUMBER),
            from,
            to,
            from_airport,
            to_airport,
            departure_scheduled: optional_field(&values, COL_DEPARTURE_SCHEDULED),
            departure_actual: optional_field(&values, COL_DEPARTURE_ACTUAL),
            arrival_scheduled: optional_field(&values, COL_ARRIVAL_SCHEDULED),
            arrival_actual: optional_field(&values, COL_ARRIVAL_ACTUAL),
            aircraft: optional_field(&values, COL_AIRCRAFT),
        });
    }

    if unresolved > 0 {
        debug!("{} flights skipped for unknown airport codes", unresolved);
    }
    flights
}

fn field(values: &[String], index: usize) -> String {
    values.get(index).cloned().unwrap_or_default()
}

fn optional_field(values: &[String], index: usize) -> Option<String> {
    values
        .get(index)
        .filter(|value| !value.is_empty())
        .cloned()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::super::merge::EXPORT_HEADER;
    use super::*;

    /// Builds one 20-field data row with blanks in the unused columns.
    pub(crate) fn row(date: &str, airline: &str, number: &str, from: &str, to: &str) -> String {
        let mut fields = vec![""; 20];
        fields[COL_DATE] = date;
        fields[COL_AIRLINE] = airline;
        fields[COL_FLIGHT_NUMBER] = number;
        fields[COL_FROM] = from;
        fields[COL_TO] = to;
        fields[COL_DEPARTURE_SCHEDULED] = "08:00";
        fields[COL_DEPARTURE_ACTUAL] = "08:12";
        fields[COL_ARRIVAL_SCHEDULED] = "11:00";
        fields[COL_ARRIVAL_ACTUAL] = "11:05";
        fields[COL_AIRCRAFT] = "Airbus A320";
        fields.join(",")
    }

    pub(crate) fn csv(rows: &[String]) -> String {
        let mut text = String::from(EXPORT_HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn parse_line_splits_and_trims() {
        assert_eq!(parse_line("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn parse_line_keeps_commas_inside_quotes() {
        assert_eq!(
            parse_line("2024-01-05,\"Delta, Inc\",DL100"),
            vec!["2024-01-05", "Delta, Inc", "DL100"]
        );
    }

    #[test]
    fn parse_line_emits_trailing_empty_field() {
        assert_eq!(parse_line("a,b,"), vec!["a", "b", ""]);
        assert_eq!(parse_line(""), vec![""]);
    }

    #[test]
    fn parse_line_drops_quote_characters() {
        assert_eq!(parse_line("\"JFK\",LAX"), vec!["JFK", "LAX"]);
    }

    #[test]
    fn extractor_skips_short_rows() {
        let directory = AirportDirectory::new();
        let text = csv(&[
            row("2024-01-05", "Delta", "DL100", "SFO", "JFK"),
            "2024-02-01,Delta,DL200,SFO,JFK".to_string(),
        ]);
        let flights = extract_flights(&text, &directory);
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].date, "2024-01-05");
    }

    #[test]
    fn extractor_drops_unresolved_codes() {
        let directory = AirportDirectory::new();
        let text = csv(&[
            row("2024-01-05", "Delta", "DL100", "SFO", "JFK"),
            row("2024-02-01", "Delta", "DL200", "SFO", "ZZZ"),
            row("2024-03-01", "Delta", "DL300", "ZZZ", "JFK"),
        ]);
        let flights = extract_flights(&text, &directory);
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].to_airport.code, "JFK");
    }

    #[test]
    fn extractor_preserves_input_order_and_fields() {
        let directory = AirportDirectory::new();
        let text = csv(&[
            row("2024-01-05", "Delta", "DL100", "SFO", "JFK"),
            row("2024-02-01", "United", "UA22", "JFK", "LHR"),
        ]);
        let flights = extract_flights(&text, &directory);
        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0].airline, "Delta");
        assert_eq!(flights[1].airline, "United");
        assert_eq!(flights[1].aircraft.as_deref(), Some("Airbus A320"));
        assert_eq!(flights[1].departure_scheduled.as_deref(), Some("08:00"));
    }

    #[test]
    fn extractor_handles_empty_input() {
        let directory = AirportDirectory::new();
        assert!(extract_flights("", &directory).is_empty());
        assert!(extract_flights(EXPORT_HEADER, &directory).is_empty());
    }
}
