use serde::{Deserialize, Serialize};

/// Result of one import refresh cycle.
///
/// `flights_processed` counts usable flights, meaning rows whose origin and
/// destination both resolved.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ImportSummary {
    pub flights_processed: usize,
    pub destinations_added: usize,
}

/// Response of the CSV upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSummary {
    pub message: String,
    pub processed: usize,
    pub added: usize,
    pub duplicates: usize,
    pub destinations: usize,
    pub countries: usize,
}
