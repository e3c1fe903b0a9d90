use crate::core::constants::EARTH_RADIUS_METERS;
use crate::util::coord::Coordinate;

/// Great-circle distance in meters between two points, by the haversine
/// formula on a sphere of [`EARTH_RADIUS_METERS`].
///
/// # Example
/// ```
/// use quadgrid_rs::haversine_meters;
///
/// let d = haversine_meters(&(6.381370, -75.456900), &(6.082295, -75.700190));
/// assert!(d > 40_000.0 && d < 44_000.0);
/// ```
pub fn haversine_meters<C: Coordinate>(a: &C, b: &C) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lon1 = a.longitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let lon2 = b.longitude().to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push h a hair outside [0, 1] for near-antipodal pairs
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}
