use crate::core::distance::haversine_meters;
use crate::util::coord::Coordinate;
use geo_types::{Coord, LineString, Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn from_coordinate<C: Coordinate>(coord: &C) -> Self {
        Self::new(coord.latitude(), coord.longitude())
    }

    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl Coordinate for GeoPoint {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Point::new(point.longitude, point.latitude)
    }
}

/// An axis-aligned rectangular cell in latitude/longitude space.
///
/// The north corners share a latitude, the south corners share a latitude,
/// and likewise for the west and east longitudes. Zero-area cells are
/// allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub north_west: GeoPoint,
    pub north_east: GeoPoint,
    pub south_west: GeoPoint,
    pub south_east: GeoPoint,
}

impl Cell {
    /// Builds the cell spanned by two opposite diagonal corners, given in
    /// any order.
    ///
    /// # Example
    /// ```
    /// use quadgrid_rs::Cell;
    ///
    /// let cell = Cell::span(&(6.38, -75.70), &(6.08, -75.45));
    /// assert_eq!(cell.north_east.latitude, 6.38);
    /// assert_eq!(cell.north_east.longitude, -75.45);
    /// assert_eq!(cell.south_west.latitude, 6.08);
    /// assert_eq!(cell.south_west.longitude, -75.70);
    /// ```
    pub fn span<C: Coordinate>(corner_a: &C, corner_b: &C) -> Self {
        let north = corner_a.latitude().max(corner_b.latitude());
        let south = corner_a.latitude().min(corner_b.latitude());
        let east = corner_a.longitude().max(corner_b.longitude());
        let west = corner_a.longitude().min(corner_b.longitude());

        Self {
            north_west: GeoPoint::new(north, west),
            north_east: GeoPoint::new(north, east),
            south_west: GeoPoint::new(south, west),
            south_east: GeoPoint::new(south, east),
        }
    }

    pub fn from_rect(rect: &Rect<f64>) -> Self {
        Self::span(&rect.min(), &rect.max())
    }

    /// Arithmetic midpoint of the cell's corners.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.north_west.latitude + self.south_west.latitude) / 2.0,
            (self.south_west.longitude + self.south_east.longitude) / 2.0,
        )
    }

    /// Great-circle length of the south-west to north-east diagonal.
    pub fn diagonal_meters(&self) -> f64 {
        haversine_meters(&self.south_west, &self.north_east)
    }

    /// The cell boundary as a closed counter-clockwise ring.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let ring = vec![
            Coord {
                x: self.south_west.longitude,
                y: self.south_west.latitude,
            },
            Coord {
                x: self.south_east.longitude,
                y: self.south_east.latitude,
            },
            Coord {
                x: self.north_east.longitude,
                y: self.north_east.latitude,
            },
            Coord {
                x: self.north_west.longitude,
                y: self.north_west.latitude,
            },
            Coord {
                x: self.south_west.longitude,
                y: self.south_west.latitude,
            },
        ];
        Polygon::new(LineString::from(ring), vec![])
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord {
                x: self.south_west.longitude,
                y: self.south_west.latitude,
            },
            Coord {
                x: self.north_east.longitude,
                y: self.north_east.latitude,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_canonicalizes_any_corner_order() {
        let ne = (6.38, -75.45);
        let sw = (6.08, -75.70);
        let nw = (6.38, -75.70);
        let se = (6.08, -75.45);

        let expected = Cell::span(&sw, &ne);
        assert_eq!(Cell::span(&ne, &sw), expected);
        assert_eq!(Cell::span(&nw, &se), expected);
        assert_eq!(Cell::span(&se, &nw), expected);
    }

    #[test]
    fn test_span_corner_invariants() {
        let cell = Cell::span(&(6.38, -75.45), &(6.08, -75.70));

        assert_eq!(cell.north_west.latitude, cell.north_east.latitude);
        assert_eq!(cell.south_west.latitude, cell.south_east.latitude);
        assert_eq!(cell.north_west.longitude, cell.south_west.longitude);
        assert_eq!(cell.north_east.longitude, cell.south_east.longitude);

        assert!(cell.north_west.latitude >= cell.south_west.latitude);
        assert!(cell.north_east.longitude >= cell.north_west.longitude);
    }

    #[test]
    fn test_span_coincident_corners_is_degenerate() {
        let p = (6.38, -75.45);
        let cell = Cell::span(&p, &p);

        assert_eq!(cell.north_west, cell.south_east);
        assert_eq!(cell.diagonal_meters(), 0.0);
    }

    #[test]
    fn test_center_is_the_midpoint() {
        let cell = Cell::span(&(6.0, -76.0), &(7.0, -75.0));
        let center = cell.center();
        assert!((center.latitude - 6.5).abs() < 1e-12);
        assert!((center.longitude - -75.5).abs() < 1e-12);
    }

    #[test]
    fn test_to_polygon_is_a_closed_ring() {
        let cell = Cell::span(&(6.38, -75.45), &(6.08, -75.70));
        let polygon = cell.to_polygon();
        let exterior = polygon.exterior();

        assert_eq!(exterior.coords().count(), 5);
        assert_eq!(exterior.0[0], exterior.0[4]);
    }

    #[test]
    fn test_rect_round_trip() {
        let cell = Cell::span(&(6.38, -75.45), &(6.08, -75.70));
        let rect = cell.to_rect();
        assert_eq!(Cell::from_rect(&rect), cell);
    }

    #[test]
    fn test_geo_point_conversions() {
        let gp = GeoPoint::new(6.38, -75.45);
        let pt: Point<f64> = gp.into();
        assert_eq!(pt.x(), -75.45);
        assert_eq!(pt.y(), 6.38);
        assert_eq!(GeoPoint::from(pt), gp);
    }
}
