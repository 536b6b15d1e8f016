//! Admin-tunable settings endpoints. The only key the system maintains on
//! its own is `countries_visited`, refreshed by the flight importer.

mod get;
mod list;
mod set;

use actix_web::web::{get, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/settings";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{key}", get().to(get::process))
        .route("/{key}", put().to(set::process))
}
