use crate::config::AppConfig;
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub(crate) async fn process(config: web::Data<AppConfig>, id: web::Path<i64>) -> impl Responder {
    let db = match Database::open(&config.db_path) {
        Ok(db) => db,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .json(json!({ "message": format!("Failed to delete location: {}", e) }))
        }
    };
    match db.delete_location(id.into_inner()) {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().json(json!({ "message": "Location not found" })),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({ "message": format!("Failed to delete location: {}", e) })),
    }
}
