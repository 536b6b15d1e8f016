use crate::airports::AirportDirectory;
use crate::config::AppConfig;
use crate::flight_import::{extract_flights, read_csv_source};
use actix_web::{web, HttpResponse, Responder};
use common::model::flight::FlightRoute;

pub(crate) async fn process(
    config: web::Data<AppConfig>,
    airports: web::Data<AirportDirectory>,
) -> impl Responder {
    // No stored export simply means no arcs to draw.
    let csv_text = match read_csv_source(&config.flight_csv_path) {
        Some(text) => text,
        None => return HttpResponse::Ok().json(Vec::<FlightRoute>::new()),
    };

    let routes: Vec<FlightRoute> = extract_flights(&csv_text, &airports)
        .iter()
        .map(FlightRoute::from)
        .collect();
    HttpResponse::Ok().json(routes)
}
