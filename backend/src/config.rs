use std::env;

/// Runtime configuration, read once at startup from `TRAVELGLOBE_*`
/// environment variables. Every value has a local-development default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// SQLite database file holding locations and settings.
    pub db_path: String,
    /// Stored Flighty CSV export, the source the importer refreshes from.
    pub flight_csv_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            host: env_or("TRAVELGLOBE_HOST", "127.0.0.1"),
            port: env_or("TRAVELGLOBE_PORT", "8080")
                .parse()
                .unwrap_or(8080),
            db_path: env_or("TRAVELGLOBE_DB", "travelglobe.sqlite"),
            flight_csv_path: env_or("TRAVELGLOBE_FLIGHT_CSV", "data/flighty-export.csv"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
