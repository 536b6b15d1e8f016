//! # Location Service Module
//!
//! CRUD endpoints over the locations table, backing both the globe view and
//! the admin dashboard. Singleton semantics for the `current` and `home`
//! rows live here, not in the store: `GET /current` and `GET /home` return
//! the first row of their type, and `PUT /current` updates it in place.
//!
//! ## Registered Routes:
//!
//! * **`GET /api/locations`**: every location, all types.
//! * **`GET /api/locations/current`**: the current location, 404 when none.
//! * **`GET /api/locations/home`**: the home base, 404 when none.
//! * **`GET /api/locations/visited`**: all visited places.
//! * **`POST /api/locations`**: create from a `NewLocation` payload.
//! * **`PUT /api/locations/current`**: upsert the current location.
//! * **`PUT /api/locations/{id}`**: partial update of one row.
//! * **`DELETE /api/locations/{id}`**: remove one row.

mod create;
mod get_current;
mod get_home;
mod get_visited;
mod list;
mod remove;
mod update;
mod update_current;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/locations";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/current", get().to(get_current::process))
        .route("/current", put().to(update_current::process))
        .route("/home", get().to(get_home::process))
        .route("/visited", get().to(get_visited::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(remove::process))
}
