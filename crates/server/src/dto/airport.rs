use airdist::{
    airports::{Airport, AirportDetails},
    shared::geo::Coordinate,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportDto {
    pub code: String,
    pub name: String,
    pub label: String,
}

impl AirportDto {
    pub fn from(airport: &Airport) -> Self {
        Self {
            code: airport.code.to_string(),
            name: airport.name.to_string(),
            label: airport.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportDetailsDto {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub display_name: String,
    pub coordinate: Coordinate,
}

impl AirportDetailsDto {
    pub fn from(airport: &AirportDetails) -> Self {
        Self {
            code: airport.code.clone(),
            name: airport.name.clone(),
            city: airport.city.clone(),
            country: airport.country.clone(),
            display_name: airport.display_name(),
            coordinate: airport.coordinate,
        }
    }
}
