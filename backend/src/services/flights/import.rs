use crate::airports::AirportDirectory;
use crate::config::AppConfig;
use crate::flight_import::{self, ImportLock};
use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde_json::json;

/// Runs one refresh cycle against the stored export. Held behind the import
/// lock so it cannot interleave with an upload or the startup pass.
pub(crate) async fn process(
    config: web::Data<AppConfig>,
    airports: web::Data<AirportDirectory>,
    lock: web::Data<ImportLock>,
) -> impl Responder {
    let _guard = lock.mutex.lock().await;

    let config = config.get_ref().clone();
    let result =
        web::block(move || flight_import::run_import_from_file(&config, airports.get_ref())).await;

    match result {
        Ok(Ok(summary)) => HttpResponse::Ok().json(summary),
        Ok(Err(e)) => {
            error!("Flight import failed: {}", e);
            HttpResponse::InternalServerError()
                .json(json!({ "message": format!("Failed to import flight data: {}", e) }))
        }
        Err(e) => {
            error!("Flight import task failed: {}", e);
            HttpResponse::InternalServerError()
                .json(json!({ "message": format!("Failed to import flight data: {}", e) }))
        }
    }
}
