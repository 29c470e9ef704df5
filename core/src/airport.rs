//! Airport directory used for city names on previews.

use serde::Serialize;

/// A known airport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Airport {
    /// IATA code
    pub code: &'static str,
    /// City served
    pub city: &'static str,
    /// Location, serialized as `{"lat": .., "lon": ..}`
    pub coordinates: Coordinates,
}

/// Latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
}

const fn airport(code: &'static str, city: &'static str, lat: f64, lon: f64) -> Airport {
    Airport {
        code,
        city,
        coordinates: Coordinates { lat, lon },
    }
}

const AIRPORTS: [Airport; 10] = [
    airport("DEL", "Delhi", 28.6139, 77.2090),
    airport("BOM", "Mumbai", 19.0760, 72.8777),
    airport("BLR", "Bangalore", 12.9716, 77.5946),
    airport("MAA", "Chennai", 13.0827, 80.2707),
    airport("HYD", "Hyderabad", 17.3850, 78.4867),
    airport("CCU", "Kolkata", 22.5726, 88.3639),
    airport("AMD", "Ahmedabad", 23.0225, 72.5714),
    airport("GOI", "Goa", 15.2993, 74.1240),
    airport("PNQ", "Pune", 18.5204, 73.8567),
    airport("COK", "Kochi", 9.9312, 76.2673),
];

/// Every airport in the directory.
#[must_use]
pub const fn all() -> &'static [Airport] {
    &AIRPORTS
}

/// Find an airport by code, ignoring case.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static Airport> {
    AIRPORTS.iter().find(|a| a.code.eq_ignore_ascii_case(code))
}

/// Uppercased city name for a code, if known.
#[must_use]
pub fn city_name(code: &str) -> Option<String> {
    lookup(code).map(|a| a.city.to_uppercase())
}
