//! Static airport directory.
//!
//! Built once in `main` from the table below and injected as shared app data;
//! read-only for the life of the process. Lookups are case-insensitive on the
//! 3-letter code. An unknown code is an absence, not an error: the flight
//! extractor uses it as a filtering signal.

use common::model::airport::Airport;
use std::collections::HashMap;

pub struct AirportDirectory {
    by_code: HashMap<String, Airport>,
}

impl AirportDirectory {
    pub fn new() -> Self {
        let by_code = AIRPORTS
            .iter()
            .map(|&(code, name, city, country, latitude, longitude)| {
                (
                    code.to_string(),
                    Airport {
                        code: code.to_string(),
                        name: name.to_string(),
                        city: city.to_string(),
                        country: country.to_string(),
                        latitude,
                        longitude,
                    },
                )
            })
            .collect();
        AirportDirectory { by_code }
    }

    pub fn lookup(&self, code: &str) -> Option<&Airport> {
        self.by_code.get(&code.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }
}

type AirportRow = (&'static str, &'static str, &'static str, &'static str, f64, f64);

#[rustfmt::skip]
static AIRPORTS: &[AirportRow] = &[
    // US mainland
    ("SJC", "Norman Y. Mineta San José International Airport", "San Jose", "USA", 37.3626, -121.9291),
    ("SFO", "San Francisco International Airport", "San Francisco", "USA", 37.6213, -122.3790),
    ("OAK", "Oakland International Airport", "Oakland", "USA", 37.7214, -122.2208),
    ("LAX", "Los Angeles International Airport", "Los Angeles", "USA", 33.9425, -118.4081),
    ("JFK", "John F. Kennedy International Airport", "New York", "USA", 40.6398, -73.7789),
    ("LGA", "LaGuardia Airport", "New York", "USA", 40.7769, -73.8740),
    ("EWR", "Newark Liberty International Airport", "Newark", "USA", 40.6925, -74.1687),
    ("ORD", "O'Hare International Airport", "Chicago", "USA", 41.9786, -87.9048),
    ("MDW", "Chicago Midway International Airport", "Chicago", "USA", 41.7868, -87.7522),
    ("SEA", "Seattle-Tacoma International Airport", "Seattle", "USA", 47.4502, -122.3088),
    ("DEN", "Denver International Airport", "Denver", "USA", 39.8561, -104.6737),
    ("PHX", "Phoenix Sky Harbor International Airport", "Phoenix", "USA", 33.4373, -112.0078),
    ("LAS", "McCarran International Airport", "Las Vegas", "USA", 36.0840, -115.1537),
    ("AUS", "Austin-Bergstrom International Airport", "Austin", "USA", 30.1945, -97.6699),
    ("DFW", "Dallas/Fort Worth International Airport", "Dallas", "USA", 32.8998, -97.0403),
    ("MCI", "Kansas City International Airport", "Kansas City", "USA", 39.2976, -94.7139),
    ("CLE", "Cleveland Hopkins International Airport", "Cleveland", "USA", 41.4117, -81.8498),
    ("PWM", "Portland International Jetport", "Portland", "USA", 43.6462, -70.3093),
    ("BOI", "Boise Airport", "Boise", "USA", 43.5644, -116.2228),
    ("JAC", "Jackson Hole Airport", "Jackson", "USA", 43.6073, -110.7377),
    ("RNO", "Reno-Tahoe International Airport", "Reno", "USA", 39.4991, -119.7681),
    ("SBA", "Santa Barbara Airport", "Santa Barbara", "USA", 34.4262, -119.8406),
    ("SNA", "John Wayne Airport", "Orange County", "USA", 33.6757, -117.8681),
    ("SLC", "Salt Lake City International Airport", "Salt Lake City", "USA", 40.7884, -111.9778),
    ("LBB", "Lubbock Preston Smith International Airport", "Lubbock", "USA", 33.6636, -101.8227),
    ("SAV", "Savannah/Hilton Head International Airport", "Savannah", "USA", 32.1276, -81.2021),
    ("FLL", "Fort Lauderdale-Hollywood International Airport", "Fort Lauderdale", "USA", 25.7959, -80.2870),
    // Hawaii
    ("OGG", "Kahului Airport", "Maui", "USA", 20.8986, -156.4307),
    ("HNL", "Daniel K. Inouye International Airport", "Honolulu", "USA", 21.3099, -157.8581),
    ("LIH", "Lihue Airport", "Kauai", "USA", 21.9760, -159.3390),
    // Mexico
    ("PVR", "Puerto Vallarta International Airport", "Puerto Vallarta", "Mexico", 20.6801, -105.2544),
    ("CUN", "Cancun International Airport", "Cancun", "Mexico", 21.0365, -86.8771),
    ("MEX", "Mexico City International Airport", "Mexico City", "Mexico", 19.4363, -99.0721),
    // Europe
    ("LHR", "Heathrow Airport", "London", "UK", 51.4700, -0.4543),
    ("LGW", "Gatwick Airport", "London", "UK", 51.1481, -0.1903),
    ("CDG", "Charles de Gaulle Airport", "Paris", "France", 49.0097, 2.5479),
    ("FRA", "Frankfurt Airport", "Frankfurt", "Germany", 50.0379, 8.5622),
    ("AMS", "Amsterdam Airport Schiphol", "Amsterdam", "Netherlands", 52.3105, 4.7683),
    ("MXP", "Milan Malpensa Airport", "Milan", "Italy", 45.6306, 8.7231),
    ("LIN", "Milan Linate Airport", "Milan", "Italy", 45.4454, 9.2816),
    ("BCN", "Barcelona Airport", "Barcelona", "Spain", 41.2974, 2.0833),
    ("LED", "Pulkovo Airport", "St. Petersburg", "Russia", 59.8003, 30.2625),
    ("ATH", "Athens International Airport", "Athens", "Greece", 37.9364, 23.9445),
    ("SKG", "Thessaloniki Airport", "Thessaloniki", "Greece", 40.5197, 22.9709),
    ("BRU", "Brussels Airport", "Brussels", "Belgium", 50.9014, 4.4844),
    ("ZRH", "Zurich Airport", "Zurich", "Switzerland", 47.4647, 8.5492),
    ("GVA", "Geneva Airport", "Geneva", "Switzerland", 46.2380, 6.1090),
    ("IST", "Istanbul Airport", "Istanbul", "Turkey", 41.2619, 28.7279),
    ("VKO", "Vnukovo Airport", "Moscow", "Russia", 55.5914, 37.2615),
    // Asia and Middle East
    ("ICN", "Incheon International Airport", "Seoul", "South Korea", 37.4602, 126.4407),
    ("DXB", "Dubai International Airport", "Dubai", "UAE", 25.2532, 55.3657),
    // South and Central America
    ("GIG", "Rio de Janeiro-Galeão International Airport", "Rio de Janeiro", "Brazil", -22.8099, -43.2505),
    ("SDU", "Santos Dumont Airport", "Rio de Janeiro", "Brazil", -22.9105, -43.1635),
    ("GRU", "São Paulo-Guarulhos International Airport", "São Paulo", "Brazil", -23.4356, -46.4731),
    ("CGH", "São Paulo-Congonhas Airport", "São Paulo", "Brazil", -23.6262, -46.6565),
    ("MVD", "Montevideo Airport", "Montevideo", "Uruguay", -34.8384, -56.0308),
    ("SCL", "Santiago International Airport", "Santiago", "Chile", -33.3927, -70.7854),
    ("LIM", "Jorge Chávez International Airport", "Lima", "Peru", -12.0219, -77.1143),
    ("CUZ", "Alejandro Velasco Astete International Airport", "Cusco", "Peru", -13.5358, -71.9389),
    ("BOG", "El Dorado International Airport", "Bogotá", "Colombia", 4.7016, -74.1469),
    ("MDE", "José María Córdova International Airport", "Medellín", "Colombia", 6.1644, -75.4231),
    ("EOH", "Olaya Herrera Airport", "Medellín", "Colombia", 6.2205, -75.5906),
    ("PTY", "Tocumen International Airport", "Panama City", "Panama", 9.0714, -79.3835),
    ("AEP", "Jorge Newbery Airfield", "Buenos Aires", "Argentina", -34.5592, -58.4156),
];
