//! SQLite persistence for locations and settings.
//!
//! `Database` wraps a single `rusqlite::Connection`; handlers open one per
//! operation against the configured file. Schema lives in `schema.sql` and is
//! applied idempotently on every open.

mod queries;

use common::model::location::{LocationType, NewLocation};
use log::info;
use rusqlite::{Connection, Result};

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Database { conn };
        db.configure_pragmas()?;
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        db.configure_pragmas()?;
        db.init_schema()?;
        Ok(db)
    }

    fn configure_pragmas(&self) -> Result<()> {
        self.conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(())
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Seeds the singleton rows the globe expects on a fresh database.
    /// Existing rows are left untouched, so this is safe to run every start.
    pub fn init_defaults(&self) -> Result<()> {
        if self.first_location_of_type(LocationType::Home)?.is_none() {
            self.create_location(&NewLocation {
                name: "Brooklyn, NY".to_string(),
                latitude: 40.7128,
                longitude: -74.0060,
                location_type: LocationType::Home,
                visit_date: None,
                notes: Some("Home base in Brooklyn".to_string()),
            })?;
            info!("Created default home location");
        }

        if self.first_location_of_type(LocationType::Current)?.is_none() {
            self.create_location(&NewLocation {
                name: "Brooklyn, NY".to_string(),
                latitude: 40.7128,
                longitude: -74.0060,
                location_type: LocationType::Current,
                visit_date: None,
                notes: Some("Currently in Brooklyn".to_string()),
            })?;
            info!("Created default current location");
        }

        if self.get_setting("countries_visited")?.is_none() {
            self.set_setting("countries_visited", "37")?;
            info!("Created countries_visited setting");
        }

        Ok(())
    }
}
