use crate::airports::AirportDirectory;
use crate::config::AppConfig;
use crate::flight_import::{extract_flights, merge_and_refresh, ImportLock};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::model::summary::UploadSummary;
use futures_util::StreamExt;
use serde_json::json;

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: `200 OK` with the upload summary as JSON.
/// - On failure: `400 Bad Request` with the error message.
pub(crate) async fn process(
    payload: Multipart,
    config: web::Data<AppConfig>,
    airports: web::Data<AirportDirectory>,
    lock: web::Data<ImportLock>,
) -> impl Responder {
    match upload_flight_csv(payload, config, airports, lock).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => HttpResponse::BadRequest().json(json!({ "message": format!("{}", e) })),
    }
}

/// Reads the uploaded CSV out of the multipart body, merges it into the
/// stored export and runs the refresh cycle under the import lock.
async fn upload_flight_csv(
    mut payload: Multipart,
    config: web::Data<AppConfig>,
    airports: web::Data<AirportDirectory>,
    lock: web::Data<ImportLock>,
) -> Result<UploadSummary, Box<dyn std::error::Error>> {
    let mut csv_bytes: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if field_name.as_deref() == Some("file") {
            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                .unwrap_or_default();
            if !filename.ends_with(".csv") {
                return Err("The file must end with .csv".into());
            }

            let mut bytes = Vec::new();
            while let Some(chunk) = field.next().await {
                bytes.extend_from_slice(&chunk?);
            }
            csv_bytes = Some(bytes);
        }
    }

    let bytes = csv_bytes.ok_or("No CSV file provided")?;
    let uploaded_text = String::from_utf8(bytes).map_err(|_| "CSV is not valid UTF-8")?;

    let uploaded = extract_flights(&uploaded_text, &airports);
    if uploaded.is_empty() {
        return Err("No valid flight data found in CSV".into());
    }

    let _guard = lock.mutex.lock().await;

    let config = config.get_ref().clone();
    let summary =
        web::block(move || merge_and_refresh(&config, airports.get_ref(), uploaded)).await??;
    Ok(summary)
}
