use crate::config::AppConfig;
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder};
use common::model::location::{Location, LocationType, NewLocation};
use serde::Deserialize;
use serde_json::json;

/// `PUT /current` payload: a place without a type. The handler pins the type
/// to `current` so a client cannot retarget another row kind through this
/// route.
#[derive(Debug, Deserialize)]
pub struct UpdateCurrentRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub visit_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

pub(crate) async fn process(
    config: web::Data<AppConfig>,
    payload: web::Json<UpdateCurrentRequest>,
) -> impl Responder {
    match update_current(&config, payload.into_inner()).await {
        Ok(location) => HttpResponse::Ok().json(location),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({ "message": format!("Failed to update current location: {}", e) })),
    }
}

async fn update_current(
    config: &AppConfig,
    payload: UpdateCurrentRequest,
) -> Result<Location, String> {
    let db = Database::open(&config.db_path).map_err(|e| e.to_string())?;
    let place = NewLocation {
        name: payload.name,
        latitude: payload.latitude,
        longitude: payload.longitude,
        location_type: LocationType::Current,
        visit_date: payload.visit_date,
        notes: payload.notes,
    };
    db.upsert_current_location(&place).map_err(|e| e.to_string())
}
