use crate::core::constants::{EARTH_RADIUS_METERS, POLAR_LATITUDE_EPSILON};
use crate::core::geometry::GeoPoint;
use crate::util::coord::Coordinate;
use crate::util::error::GridError;

/// The point reached by moving `meters` both north and east of `reference`.
///
/// The displacement is applied independently along the meridian and the
/// parallel through the reference, so the result is the far corner of a
/// square of side `meters`, not the endpoint of a single geodesic.
///
/// # Example
/// ```
/// use quadgrid_rs::diagonal_offset;
///
/// # fn main() -> Result<(), quadgrid_rs::GridError> {
/// let p = diagonal_offset(1040.0, &(6.38, -75.45))?;
/// assert!(p.latitude > 6.38 && p.longitude > -75.45);
/// # Ok(())
/// # }
/// ```
pub fn diagonal_offset<C: Coordinate>(meters: f64, reference: &C) -> Result<GeoPoint, GridError> {
    let lat = reference.latitude();
    if 90.0 - lat.abs() < POLAR_LATITUDE_EPSILON {
        return Err(GridError::DegenerateConfiguration(format!(
            "reference latitude {} is too close to a pole for a longitude offset",
            lat
        )));
    }

    let delta_lat = (meters / EARTH_RADIUS_METERS).to_degrees();
    let delta_lon = (meters / (EARTH_RADIUS_METERS * lat.to_radians().cos())).to_degrees();

    Ok(GeoPoint::new(lat + delta_lat, reference.longitude() + delta_lon))
}
