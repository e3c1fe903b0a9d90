use crate::util::error::GridError;
use geo_types::{Coord, Point};

/// Anything that can stand in for a latitude/longitude pair in degrees.
///
/// `geo_types` values map their `x` to longitude and `y` to latitude.
pub trait Coordinate {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn latitude(&self) -> f64 {
        self.0
    }
    fn longitude(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn latitude(&self) -> f64 {
        self.y()
    }
    fn longitude(&self) -> f64 {
        self.x()
    }
}

impl Coordinate for Coord<f64> {
    fn latitude(&self) -> f64 {
        self.y
    }
    fn longitude(&self) -> f64 {
        self.x
    }
}

/// Checks that a pair of degrees names a point on the globe.
pub fn validate_coordinate<C: Coordinate>(coord: &C) -> Result<(), GridError> {
    let lat = coord.latitude();
    let lon = coord.longitude();
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(GridError::InvalidCoordinate(lat, lon));
    }
    Ok(())
}
