use crate::config::AppConfig;
use crate::store::Database;
use actix_web::{web, HttpResponse, Responder};
use common::model::setting::Setting;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct SetSettingRequest {
    pub value: String,
}

pub(crate) async fn process(
    config: web::Data<AppConfig>,
    key: web::Path<String>,
    payload: web::Json<SetSettingRequest>,
) -> impl Responder {
    if payload.value.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({ "message": "Value is required" }));
    }
    match set_setting(&config, &key, &payload.value).await {
        Ok(setting) => HttpResponse::Ok().json(setting),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({ "message": format!("Failed to update setting: {}", e) })),
    }
}

async fn set_setting(config: &AppConfig, key: &str, value: &str) -> Result<Setting, String> {
    let db = Database::open(&config.db_path).map_err(|e| e.to_string())?;
    db.set_setting(key, value).map_err(|e| e.to_string())
}
