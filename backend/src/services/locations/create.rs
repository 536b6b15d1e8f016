use crate::config::AppConfig;
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder};
use common::model::location::{Location, NewLocation};
use serde_json::json;

pub(crate) async fn process(
    config: web::Data<AppConfig>,
    payload: web::Json<NewLocation>,
) -> impl Responder {
    if payload.name.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Location name must not be empty" }));
    }
    match create_location(&config, &payload).await {
        Ok(location) => HttpResponse::Created().json(location),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({ "message": format!("Failed to create location: {}", e) })),
    }
}

async fn create_location(config: &AppConfig, payload: &NewLocation) -> Result<Location, String> {
    let db = Database::open(&config.db_path).map_err(|e| e.to_string())?;
    db.create_location(payload).map_err(|e| e.to_string())
}
