mod airports;
mod config;
mod flight_import;
mod services;
mod store;

use crate::airports::AirportDirectory;
use crate::config::AppConfig;
use crate::flight_import::ImportLock;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = AppConfig::from_env();
    let url = format!("http://{}:{}", config.host, config.port);

    // Schema and singleton rows must exist before any request or import
    // touches the database.
    let db = store::Database::open(&config.db_path).map_err(to_io_error)?;
    db.init_defaults().map_err(to_io_error)?;
    drop(db);

    let app_config = web::Data::new(config.clone());
    let airports = web::Data::new(AirportDirectory::new());
    let import_lock = web::Data::new(ImportLock::new());
    info!("Airport directory loaded with {} airports", airports.len());

    {
        let _url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&_url_clone);
        });
    }

    // Startup refresh of imported destinations. Best effort: failures are
    // logged and the server keeps serving.
    {
        let config = config.clone();
        let airports = airports.clone();
        let lock = import_lock.clone();
        tokio::spawn(async move {
            let _guard = lock.mutex.lock().await;
            let result = web::block(move || {
                flight_import::run_import_from_file(&config, airports.get_ref())
            })
            .await;
            match result {
                Ok(Ok(summary)) => info!(
                    "Startup flight import: {} flights, {} new destinations",
                    summary.flights_processed, summary.destinations_added
                ),
                Ok(Err(e)) => error!("Startup flight import failed: {}", e),
                Err(e) => error!("Startup flight import task failed: {}", e),
            }
        });
    }

    info!("Server running at {}", url);

    let bind_addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(app_config.clone())
            .app_data(airports.clone())
            .app_data(import_lock.clone())
            .service(services::locations::configure_routes())
            .service(services::settings::configure_routes())
            .service(services::flights::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind(bind_addr)?
    .run()
    .await
}

fn to_io_error(e: rusqlite::Error) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e)
}
