/// Spherical earth radius in meters (WGS84 semi-major axis).
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Target cell side length in meters when the caller does not supply one.
pub const DEFAULT_CELL_SIDE_METERS: f64 = 1040.0;

/// Reference latitudes within this many degrees of a pole make the
/// meter-to-degree longitude conversion unbounded and are rejected.
pub const POLAR_LATITUDE_EPSILON: f64 = 1e-6;

/// Upper bound on cells produced by a single fill before tiling is aborted.
pub const MAX_FILL_CELLS: usize = 4_194_304;
