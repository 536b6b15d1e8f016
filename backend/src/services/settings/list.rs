use crate::config::AppConfig;
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder};
use common::model::setting::Setting;
use serde_json::json;

pub(crate) async fn process(config: web::Data<AppConfig>) -> impl Responder {
    match list_settings(&config).await {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({ "message": format!("Failed to fetch settings: {}", e) })),
    }
}

async fn list_settings(config: &AppConfig) -> Result<Vec<Setting>, String> {
    let db = Database::open(&config.db_path).map_err(|e| e.to_string())?;
    db.list_settings().map_err(|e| e.to_string())
}
