use std::{cmp, fmt::Display, iter::Sum};

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine kernel.
pub const EARTH_RADIUS: Distance = Distance::from_nautical_miles(3440.0);
pub(crate) const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Great-circle distance in nautical miles between two points given in degrees.
///
/// No range checking is done, NaN and out of range input flow through the
/// arithmetic as is. Callers that need validation should use
/// [`Coordinate::is_valid`] first.
pub fn great_circle_distance_nm(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dist_lat = f64::to_radians(lat2 - lat1);
    let dist_lon = f64::to_radians(lon2 - lon1);
    let a = f64::sin(dist_lat / 2.0) * f64::sin(dist_lat / 2.0)
        + f64::cos(f64::to_radians(lat1))
            * f64::cos(f64::to_radians(lat2))
            * f64::sin(dist_lon / 2.0)
            * f64::sin(dist_lon / 2.0);
    // Rounding can push `a` just past 1 for near antipodes.
    let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(f64::max(1.0 - a, 0.0)));
    EARTH_RADIUS.as_nautical_miles() * c
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} nautical miles", self.0)
    }
}

impl Distance {
    pub const fn from_nautical_miles(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_meters(distance: f64) -> Self {
        Self(distance / METERS_PER_NAUTICAL_MILE)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self::from_meters(distance * 1000.0)
    }

    pub const fn as_nautical_miles(&self) -> f64 {
        self.0
    }

    pub const fn as_meters(&self) -> f64 {
        self.0 * METERS_PER_NAUTICAL_MILE
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.as_meters() / 1000.0
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

/// Averages latitudes and longitudes component wise.
impl Sum for Coordinate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut count: usize = 0;
        let mut lat: f64 = 0.0;
        let mut lon: f64 = 0.0;
        iter.for_each(|coordinate| {
            count += 1;
            lat += coordinate.latitude;
            lon += coordinate.longitude;
        });
        let count = count as f64;
        Self {
            latitude: lat / count,
            longitude: lon / count,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.latitude, value.longitude)
    }
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance(&self, coord: &Self) -> Distance {
        Distance::from_nautical_miles(great_circle_distance_nm(
            self.latitude,
            self.longitude,
            coord.latitude,
            coord.longitude,
        ))
    }

    /// Plain average of the two points, not the great-circle midpoint.
    pub fn midpoint(&self, coord: &Self) -> Self {
        [*self, *coord].into_iter().sum()
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[test]
fn distance_test() {
    let paris = Coordinate::new(48.85800943005911, 2.3514350059357927);
    let london = Coordinate::new(51.5052389927712, -0.12495407345099824);
    let d = paris.distance(&london);
    assert!((d.as_kilometers() - 343.0).abs() < 5.0);
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1852.0);
    let dist_b = Distance::from_nautical_miles(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_kilometers(2.0);
    let dist_b = Distance::from_nautical_miles(1.0);
    assert!(dist_a > dist_b)
}

#[test]
fn distance_display_test() {
    let dist = Distance::from_nautical_miles(2145.929);
    assert_eq!(dist.to_string(), "2145.93 nautical miles");
}
