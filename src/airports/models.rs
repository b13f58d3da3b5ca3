use std::{collections::HashMap, fmt::Display, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::shared::{
    Searchable, fuzzy,
    geo::{Coordinate, Distance},
};

/// One entry of the static airport list.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Airport {
    pub code: Arc<str>,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
}

impl Airport {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.trim().to_uppercase().into(),
            name: name.trim().into(),
            normalized_name: fuzzy::normalize(name).into(),
        }
    }

    /// Label shown in the selection list, e.g. `Los Angeles Intl (LAX)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

impl Searchable for Airport {
    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

/// Row of the CSV form of the airport list.
#[derive(Debug, Deserialize)]
pub(crate) struct AirportRecord {
    pub code: String,
    pub name: String,
}

/// Column oriented export of the airport list:
/// `{"code": {"0": "JFK", ..}, "name": {"0": "John F Kennedy Intl", ..}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct AirportColumns {
    pub code: HashMap<String, String>,
    pub name: HashMap<String, String>,
}

/// An airport resolved by the lookup provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportDetails {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub coordinate: Coordinate,
}

impl AirportDetails {
    pub fn display_name(&self) -> String {
        format!("{}, {}, {}", self.name, self.city, self.country)
    }
}

impl Display for AirportDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.code)
    }
}

/// Two resolved airports and the great-circle distance between them.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightLeg {
    pub from: AirportDetails,
    pub to: AirportDetails,
    pub distance: Distance,
}

impl FlightLeg {
    pub fn new(from: AirportDetails, to: AirportDetails) -> Self {
        let distance = from.coordinate.distance(&to.coordinate);
        Self { from, to, distance }
    }

    /// Centre of the map showing both airports.
    pub fn midpoint(&self) -> Coordinate {
        self.from.coordinate.midpoint(&self.to.coordinate)
    }

    /// Straight line drawn between the two markers.
    pub fn polyline(&self) -> [Coordinate; 2] {
        [self.from.coordinate, self.to.coordinate]
    }
}

impl Display for FlightLeg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}: {}", self.from.code, self.to.code, self.distance)
    }
}
