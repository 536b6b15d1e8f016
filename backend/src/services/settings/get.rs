use crate::config::AppConfig;
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub(crate) async fn process(config: web::Data<AppConfig>, key: web::Path<String>) -> impl Responder {
    let db = match Database::open(&config.db_path) {
        Ok(db) => db,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .json(json!({ "message": format!("Failed to fetch setting: {}", e) }))
        }
    };
    match db.get_setting(&key) {
        Ok(Some(setting)) => HttpResponse::Ok().json(setting),
        Ok(None) => HttpResponse::NotFound().json(json!({ "message": "Setting not found" })),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({ "message": format!("Failed to fetch setting: {}", e) })),
    }
}
