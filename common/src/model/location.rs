use serde::{Deserialize, Serialize};

/// Discriminates the three kinds of rows in the locations table.
///
/// The globe treats `current` and `home` as singletons; the store itself does
/// not enforce that, callers keep the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Current,
    Home,
    Visited,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Current => "current",
            LocationType::Home => "home",
            LocationType::Visited => "visited",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "current" => Some(LocationType::Current),
            "home" => Some(LocationType::Home),
            "visited" => Some(LocationType::Visited),
            _ => None,
        }
    }
}

/// A persisted location row as served by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    pub visit_date: Option<String>,
    pub notes: Option<String>,
    pub updated_at: String,
}

/// Payload for creating a location, either from the admin dashboard or from
/// the flight importer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    #[serde(default)]
    pub visit_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update for an existing location. Absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, rename = "type")]
    pub location_type: Option<LocationType>,
    #[serde(default)]
    pub visit_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
