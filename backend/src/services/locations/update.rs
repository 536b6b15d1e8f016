use crate::config::AppConfig;
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder};
use common::model::location::LocationPatch;
use serde_json::json;

pub(crate) async fn process(
    config: web::Data<AppConfig>,
    id: web::Path<i64>,
    payload: web::Json<LocationPatch>,
) -> impl Responder {
    let db = match Database::open(&config.db_path) {
        Ok(db) => db,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .json(json!({ "message": format!("Failed to update location: {}", e) }))
        }
    };
    match db.update_location(id.into_inner(), &payload) {
        Ok(Some(location)) => HttpResponse::Ok().json(location),
        Ok(None) => HttpResponse::NotFound().json(json!({ "message": "Location not found" })),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({ "message": format!("Failed to update location: {}", e) })),
    }
}
