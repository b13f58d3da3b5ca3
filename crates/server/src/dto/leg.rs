use airdist::{airports::FlightLeg, shared::geo::Coordinate};
use serde::{Deserialize, Serialize};

use crate::dto::AirportDetailsDto;

/// Everything needed to render the result card and the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightLegDto {
    pub from: AirportDetailsDto,
    pub to: AirportDetailsDto,
    pub distance_nm: f64,
    pub label: String,
    pub midpoint: Coordinate,
    pub line: [Coordinate; 2],
}

impl FlightLegDto {
    pub fn from(leg: &FlightLeg) -> Self {
        Self {
            from: AirportDetailsDto::from(&leg.from),
            to: AirportDetailsDto::from(&leg.to),
            distance_nm: leg.distance.as_nautical_miles(),
            label: leg.distance.to_string(),
            midpoint: leg.midpoint(),
            line: leg.polyline(),
        }
    }
}
