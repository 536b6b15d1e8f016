//! Flight CSV import pipeline.
//!
//! Turns a Flighty CSV export into `visited` rows on the globe. The pipeline
//! has four stages:
//!
//! - `parser`: splits raw CSV lines (quote-aware) and extracts usable
//!   `FlightRecord`s, dropping rows whose airport codes do not resolve.
//! - `aggregate`: folds usable flights into per-destination visit counts.
//! - `merge`: reconciles an uploaded export with the stored one, adding only
//!   flights not seen before.
//! - `import`: the refresh cycle. Purges previously imported rows, rebuilds
//!   them from the current CSV, and maintains the countries-visited counter.
//!
//! A refresh is a full rebuild, not an append: rows carrying the importer
//! marker in their notes are deleted and reinserted so the store always
//! mirrors the latest export. Manually entered rows are never touched.

mod aggregate;
mod import;
mod merge;
mod parser;

pub use aggregate::{aggregate_destinations, Destination};
pub use import::{
    read_csv_source, run_import, run_import_from_file, COORD_TOLERANCE, IMPORT_MARKER,
};
pub use merge::{merge_and_refresh, merge_flights, render_csv};
pub use parser::{extract_flights, parse_line};

use std::sync::Arc;
use tokio::sync::Mutex;

/// Serializes refresh cycles. The startup hook and the HTTP triggers all take
/// this lock, so two imports can never interleave their purge and insert
/// steps.
#[derive(Clone)]
pub struct ImportLock {
    pub mutex: Arc<Mutex<()>>,
}

impl ImportLock {
    pub fn new() -> Self {
        ImportLock {
            mutex: Arc::new(Mutex::new(())),
        }
    }
}
