use crate::config::AppConfig;
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder};
use common::model::location::{Location, LocationType};
use serde_json::json;

pub(crate) async fn process(config: web::Data<AppConfig>) -> impl Responder {
    match visited_locations(&config).await {
        Ok(locations) => HttpResponse::Ok().json(locations),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({ "message": format!("Failed to fetch visited locations: {}", e) })),
    }
}

async fn visited_locations(config: &AppConfig) -> Result<Vec<Location>, String> {
    let db = Database::open(&config.db_path).map_err(|e| e.to_string())?;
    db.list_locations_by_type(LocationType::Visited)
        .map_err(|e| e.to_string())
}
