use crate::config::AppConfig;
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder};
use common::model::location::LocationType;
use serde_json::json;

pub(crate) async fn process(config: web::Data<AppConfig>) -> impl Responder {
    let db = match Database::open(&config.db_path) {
        Ok(db) => db,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .json(json!({ "message": format!("Failed to fetch current location: {}", e) }))
        }
    };
    match db.first_location_of_type(LocationType::Current) {
        Ok(Some(location)) => HttpResponse::Ok().json(location),
        Ok(None) => {
            HttpResponse::NotFound().json(json!({ "message": "Current location not found" }))
        }
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({ "message": format!("Failed to fetch current location: {}", e) })),
    }
}
