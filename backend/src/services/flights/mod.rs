//! # Flight Data Service Module
//!
//! Endpoints around the stored Flighty CSV export.
//!
//! ## Registered Routes:
//!
//! * **`POST /api/flights/upload`**:
//!     - **Handler**: `upload::process`
//!     - **Description**: Accepts a multipart CSV export (`file` field). New
//!       flights are merged into the stored export by flight identity, the
//!       file is rewritten, and the visited-locations refresh runs. Responds
//!       with processed/added/duplicate counts.
//!
//! * **`POST /api/flights/import`**:
//!     - **Handler**: `import::process`
//!     - **Description**: Runs the refresh cycle against the stored export
//!       without uploading anything. Same operation the startup hook runs.
//!
//! * **`GET /api/flights/routes`**:
//!     - **Handler**: `routes::process`
//!     - **Description**: Origin/destination coordinate pairs for the globe
//!       arcs, parsed from the stored export. Empty list when no export is
//!       stored.

mod import;
mod routes;
mod upload;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/flights";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/upload", post().to(upload::process))
        .route("/import", post().to(import::process))
        .route("/routes", get().to(routes::process))
}
