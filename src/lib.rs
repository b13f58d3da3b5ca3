pub mod airports;
pub mod shared;

pub mod prelude {
    pub use crate::airports::{Airport, AirportDetails, AirportDirectory, FlightLeg};
    pub use crate::shared::geo::{Coordinate, Distance, EARTH_RADIUS, great_circle_distance_nm};
}
