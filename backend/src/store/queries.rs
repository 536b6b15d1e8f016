use super::Database;
use chrono::Utc;
use common::model::location::{Location, LocationPatch, LocationType, NewLocation};
use common::model::setting::Setting;
use rusqlite::{params, Result, Row};

const LOCATION_COLUMNS: &str = "id, name, latitude, longitude, type, visit_date, notes, updated_at";

fn location_from_row(row: &Row) -> Result<Location> {
    let type_text: String = row.get(4)?;
    let location_type = LocationType::parse(&type_text).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            rusqlite::types::Type::Text,
            format!("unknown location type '{}'", type_text).into(),
        )
    })?;
    Ok(Location {
        id: row.get(0)?,
        name: row.get(1)?,
        latitude: row.get(2)?,
        longitude: row.get(3)?,
        location_type,
        visit_date: row.get(5)?,
        notes: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

impl Database {
    // ── Locations ────────────────────────────────────────────────

    pub fn list_locations(&self) -> Result<Vec<Location>> {
        let mut stmt = self.connection().prepare(&format!(
            "SELECT {} FROM locations ORDER BY id",
            LOCATION_COLUMNS
        ))?;
        let locations = stmt
            .query_map([], location_from_row)?
            .collect::<Result<Vec<_>>>()?;
        Ok(locations)
    }

    pub fn get_location(&self, id: i64) -> Result<Option<Location>> {
        match self.connection().query_row(
            &format!("SELECT {} FROM locations WHERE id = ?1", LOCATION_COLUMNS),
            params![id],
            location_from_row,
        ) {
            Ok(location) => Ok(Some(location)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn list_locations_by_type(&self, location_type: LocationType) -> Result<Vec<Location>> {
        let mut stmt = self.connection().prepare(&format!(
            "SELECT {} FROM locations WHERE type = ?1 ORDER BY id",
            LOCATION_COLUMNS
        ))?;
        let locations = stmt
            .query_map(params![location_type.as_str()], location_from_row)?
            .collect::<Result<Vec<_>>>()?;
        Ok(locations)
    }

    /// First row of the given type. The UI assumes `current` and `home` are
    /// singletons, so "first" is "the" row for those.
    pub fn first_location_of_type(&self, location_type: LocationType) -> Result<Option<Location>> {
        match self.connection().query_row(
            &format!(
                "SELECT {} FROM locations WHERE type = ?1 ORDER BY id LIMIT 1",
                LOCATION_COLUMNS
            ),
            params![location_type.as_str()],
            location_from_row,
        ) {
            Ok(location) => Ok(Some(location)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn create_location(&self, location: &NewLocation) -> Result<Location> {
        let now = Utc::now().to_rfc3339();
        self.connection().execute(
            "INSERT INTO locations (name, latitude, longitude, type, visit_date, notes, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                location.name,
                location.latitude,
                location.longitude,
                location.location_type.as_str(),
                location.visit_date,
                location.notes,
                now
            ],
        )?;
        Ok(Location {
            id: self.connection().last_insert_rowid(),
            name: location.name.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            location_type: location.location_type,
            visit_date: location.visit_date.clone(),
            notes: location.notes.clone(),
            updated_at: now,
        })
    }

    /// Applies a partial update. Returns `None` when the row does not exist.
    pub fn update_location(&self, id: i64, patch: &LocationPatch) -> Result<Option<Location>> {
        let existing = match self.get_location(id)? {
            Some(location) => location,
            None => return Ok(None),
        };

        let now = Utc::now().to_rfc3339();
        let name = patch.name.clone().unwrap_or(existing.name);
        let latitude = patch.latitude.unwrap_or(existing.latitude);
        let longitude = patch.longitude.unwrap_or(existing.longitude);
        let location_type = patch.location_type.unwrap_or(existing.location_type);
        let visit_date = patch.visit_date.clone().or(existing.visit_date);
        let notes = patch.notes.clone().or(existing.notes);

        self.connection().execute(
            "UPDATE locations SET name = ?1, latitude = ?2, longitude = ?3, type = ?4, \
             visit_date = ?5, notes = ?6, updated_at = ?7 WHERE id = ?8",
            params![
                name,
                latitude,
                longitude,
                location_type.as_str(),
                visit_date,
                notes,
                now,
                id
            ],
        )?;
        Ok(Some(Location {
            id,
            name,
            latitude,
            longitude,
            location_type,
            visit_date,
            notes,
            updated_at: now,
        }))
    }

    pub fn delete_location(&self, id: i64) -> Result<bool> {
        let deleted = self
            .connection()
            .execute("DELETE FROM locations WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    /// Updates the `current` row in place, creating it when missing.
    pub fn upsert_current_location(&self, place: &NewLocation) -> Result<Location> {
        match self.first_location_of_type(LocationType::Current)? {
            Some(existing) => {
                let patch = LocationPatch {
                    name: Some(place.name.clone()),
                    latitude: Some(place.latitude),
                    longitude: Some(place.longitude),
                    location_type: Some(LocationType::Current),
                    visit_date: place.visit_date.clone(),
                    notes: place.notes.clone(),
                };
                self.update_location(existing.id, &patch)?
                    .ok_or(rusqlite::Error::QueryReturnedNoRows)
            }
            None => self.create_location(&NewLocation {
                location_type: LocationType::Current,
                ..place.clone()
            }),
        }
    }

    /// Removes every visited row whose notes carry the importer marker.
    /// Manually entered rows never carry it and survive.
    pub fn delete_imported_visited(&self, marker: &str) -> Result<usize> {
        let deleted = self.connection().execute(
            "DELETE FROM locations WHERE type = 'visited' AND notes LIKE '%' || ?1 || '%'",
            params![marker],
        )?;
        Ok(deleted)
    }

    // ── Settings ─────────────────────────────────────────────────

    pub fn list_settings(&self) -> Result<Vec<Setting>> {
        let mut stmt = self
            .connection()
            .prepare("SELECT id, key, value, updated_at FROM settings ORDER BY key")?;
        let settings = stmt
            .query_map([], |row| {
                Ok(Setting {
                    id: row.get(0)?,
                    key: row.get(1)?,
                    value: row.get(2)?,
                    updated_at: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>>>()?;
        Ok(settings)
    }

    pub fn get_setting(&self, key: &str) -> Result<Option<Setting>> {
        match self.connection().query_row(
            "SELECT id, key, value, updated_at FROM settings WHERE key = ?1",
            params![key],
            |row| {
                Ok(Setting {
                    id: row.get(0)?,
                    key: row.get(1)?,
                    value: row.get(2)?,
                    updated_at: row.get(3)?,
                })
            },
        ) {
            Ok(setting) => Ok(Some(setting)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<Setting> {
        let now = Utc::now().to_rfc3339();
        self.connection().execute(
            "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        self.get_setting(key)?
            .ok_or(rusqlite::Error::QueryReturnedNoRows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visited(name: &str, lat: f64, lon: f64, notes: Option<&str>) -> NewLocation {
        NewLocation {
            name: name.to_string(),
            latitude: lat,
            longitude: lon,
            location_type: LocationType::Visited,
            visit_date: None,
            notes: notes.map(|n| n.to_string()),
        }
    }

    #[test]
    fn create_and_list_locations() {
        let db = Database::open_in_memory().unwrap();
        let created = db
            .create_location(&visited("Paris, France", 48.8566, 2.3522, Some("Great food")))
            .unwrap();
        assert!(created.id > 0);

        let all = db.list_locations().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Paris, France");
        assert_eq!(all[0].location_type, LocationType::Visited);
    }

    #[test]
    fn list_by_type_filters() {
        let db = Database::open_in_memory().unwrap();
        db.init_defaults().unwrap();
        db.create_location(&visited("London, UK", 51.5074, -0.1278, None))
            .unwrap();

        let visited_rows = db.list_locations_by_type(LocationType::Visited).unwrap();
        assert_eq!(visited_rows.len(), 1);
        let home = db.first_location_of_type(LocationType::Home).unwrap();
        assert!(home.is_some());
    }

    #[test]
    fn partial_update_keeps_untouched_fields() {
        let db = Database::open_in_memory().unwrap();
        let created = db
            .create_location(&visited("Lisbon", 38.7223, -9.1393, Some("old notes")))
            .unwrap();

        let patch = LocationPatch {
            name: Some("Lisbon, Portugal".to_string()),
            ..LocationPatch::default()
        };
        let updated = db.update_location(created.id, &patch).unwrap().unwrap();
        assert_eq!(updated.name, "Lisbon, Portugal");
        assert_eq!(updated.latitude, created.latitude);
        assert_eq!(updated.notes.as_deref(), Some("old notes"));
    }

    #[test]
    fn update_missing_location_returns_none() {
        let db = Database::open_in_memory().unwrap();
        let patch = LocationPatch::default();
        assert!(db.update_location(999, &patch).unwrap().is_none());
    }

    #[test]
    fn delete_location_reports_existence() {
        let db = Database::open_in_memory().unwrap();
        let created = db.create_location(&visited("Rome", 41.9, 12.5, None)).unwrap();
        assert!(db.delete_location(created.id).unwrap());
        assert!(!db.delete_location(created.id).unwrap());
    }

    #[test]
    fn upsert_current_creates_then_updates_in_place() {
        let db = Database::open_in_memory().unwrap();

        let place = NewLocation {
            name: "Berlin, Germany".to_string(),
            latitude: 52.52,
            longitude: 13.405,
            location_type: LocationType::Current,
            visit_date: None,
            notes: None,
        };
        let first = db.upsert_current_location(&place).unwrap();

        let moved = NewLocation {
            name: "Madrid, Spain".to_string(),
            latitude: 40.4168,
            longitude: -3.7038,
            ..place
        };
        let second = db.upsert_current_location(&moved).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.name, "Madrid, Spain");
        assert_eq!(
            db.list_locations_by_type(LocationType::Current).unwrap().len(),
            1
        );
    }

    #[test]
    fn purge_only_removes_marked_rows() {
        let db = Database::open_in_memory().unwrap();
        db.create_location(&visited("Oslo, Norway", 59.91, 10.75, Some("Manual entry")))
            .unwrap();
        db.create_location(&visited(
            "New York, USA",
            40.6398,
            -73.7789,
            Some("Flight destination: JFK (2 visits)"),
        ))
        .unwrap();

        let purged = db.delete_imported_visited("Flight destination").unwrap();
        assert_eq!(purged, 1);

        let remaining = db.list_locations().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Oslo, Norway");
    }

    #[test]
    fn settings_upsert_round_trip() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.get_setting("countries_visited").unwrap().is_none());

        let created = db.set_setting("countries_visited", "12").unwrap();
        let updated = db.set_setting("countries_visited", "13").unwrap();
        assert_eq!(created.id, updated.id);
        assert_eq!(updated.value, "13");
        assert_eq!(db.list_settings().unwrap().len(), 1);
    }

    #[test]
    fn init_defaults_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        db.init_defaults().unwrap();
        db.init_defaults().unwrap();

        assert_eq!(db.list_locations().unwrap().len(), 2);
        let setting = db.get_setting("countries_visited").unwrap().unwrap();
        assert_eq!(setting.value, "37");
    }
}
