use crate::core::constants::DEFAULT_CELL_SIDE_METERS;
use crate::core::geometry::{Cell, GeoPoint};
use crate::core::grid::plan_cells;
use crate::util::coord::Coordinate;
use crate::util::error::GridError;
use geo_types::{Polygon, Rect};
use serde::{Deserialize, Serialize};

/// An ordered collection of cells tiling one bounding box.
///
/// Cells appear in generation order: row-major, south to north, west to
/// east within a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Cell>,
    target_side_meters: f64,
}

impl Grid {
    pub fn builder() -> GridBuilder {
        GridBuilder::new()
    }

    /// Plans the grid between two corner points.
    pub fn plan<C: Coordinate>(
        corner_a: &C,
        corner_b: &C,
        target_side_meters: f64,
    ) -> Result<Self, GridError> {
        let cells = plan_cells(corner_a, corner_b, target_side_meters)?;
        Ok(Self {
            cells,
            target_side_meters,
        })
    }

    /// Plans the grid over a `geo_types` rectangle (x = longitude,
    /// y = latitude).
    pub fn from_rect(rect: &Rect<f64>, target_side_meters: f64) -> Result<Self, GridError> {
        Self::plan(&rect.min(), &rect.max(), target_side_meters)
    }

    pub fn target_side_meters(&self) -> f64 {
        self.target_side_meters
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.iter().map(|cell| cell.to_polygon()).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&Cell>
    where
        F: Fn(&Cell) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }
}

/// Plans a grid between two corner points, falling back to
/// [`DEFAULT_CELL_SIDE_METERS`] when no target side length is given.
///
/// # Example
/// ```
/// use quadgrid_rs::plan_grid;
///
/// # fn main() -> Result<(), quadgrid_rs::GridError> {
/// let grid = plan_grid(&(6.3800, -75.4560), &(6.3791, -75.4551), None)?;
/// assert_eq!(grid.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn plan_grid<C: Coordinate>(
    corner_a: &C,
    corner_b: &C,
    target_side_meters: Option<f64>,
) -> Result<Grid, GridError> {
    Grid::plan(
        corner_a,
        corner_b,
        target_side_meters.unwrap_or(DEFAULT_CELL_SIDE_METERS),
    )
}

#[derive(Debug, Default)]
pub struct GridBuilder {
    corner_a: Option<GeoPoint>,
    corner_b: Option<GeoPoint>,
    target_side_meters: Option<f64>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn corner_a<C: Coordinate>(mut self, coord: &C) -> Self {
        self.corner_a = Some(GeoPoint::from_coordinate(coord));
        self
    }

    pub fn corner_b<C: Coordinate>(mut self, coord: &C) -> Self {
        self.corner_b = Some(GeoPoint::from_coordinate(coord));
        self
    }

    pub fn target_side_meters(mut self, meters: f64) -> Self {
        self.target_side_meters = Some(meters);
        self
    }

    pub fn build(self) -> Result<Grid, GridError> {
        let corner_a = self.corner_a.expect("corner_a must be set");
        let corner_b = self.corner_b.expect("corner_b must be set");
        let target = self
            .target_side_meters
            .unwrap_or(DEFAULT_CELL_SIDE_METERS);

        Grid::plan(&corner_a, &corner_b, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_plan_grid_uses_the_default_target() -> Result<(), GridError> {
        let grid = plan_grid(&(6.3800, -75.4560), &(6.3791, -75.4551), None)?;
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.target_side_meters(), DEFAULT_CELL_SIDE_METERS);
        Ok(())
    }

    #[test]
    fn test_plan_grid_with_explicit_target() -> Result<(), GridError> {
        let grid = plan_grid(&(6.3800, -75.4560), &(6.3791, -75.4551), Some(50.0))?;
        assert_eq!(grid.target_side_meters(), 50.0);
        assert!(grid.len() > 1);
        Ok(())
    }

    #[test]
    fn test_grid_builder() -> Result<(), GridError> {
        let grid = Grid::builder()
            .corner_a(&(6.3800, -75.4560))
            .corner_b(&(6.3791, -75.4551))
            .target_side_meters(1040.0)
            .build()?;

        assert_eq!(grid.len(), 1);
        assert_eq!(grid.target_side_meters(), 1040.0);
        Ok(())
    }

    #[test]
    fn test_grid_builder_default_target() -> Result<(), GridError> {
        let grid = Grid::builder()
            .corner_a(&(6.3800, -75.4560))
            .corner_b(&(6.3791, -75.4551))
            .build()?;

        assert_eq!(grid.target_side_meters(), DEFAULT_CELL_SIDE_METERS);
        Ok(())
    }

    #[test]
    fn test_grid_from_rect() -> Result<(), GridError> {
        let rect = Rect::new(
            coord! { x: -75.4560, y: 6.3791 },
            coord! { x: -75.4551, y: 6.3800 },
        );
        let grid = Grid::from_rect(&rect, 1040.0)?;
        assert_eq!(grid.len(), 1);
        Ok(())
    }

    #[test]
    fn test_grid_iteration_matches_len() -> Result<(), GridError> {
        let grid = plan_grid(&(6.20, -75.60), &(6.26, -75.54), None)?;

        let mut count = 0;
        for cell in grid.iter() {
            assert!(cell.north_east.latitude > cell.south_west.latitude);
            count += 1;
        }
        assert_eq!(count, grid.len());
        Ok(())
    }

    #[test]
    fn test_grid_filtering() -> Result<(), GridError> {
        let grid = plan_grid(&(6.20, -75.60), &(6.26, -75.54), None)?;
        let mid = (6.20 + 6.26) / 2.0;

        let northern = grid.filter(|cell| cell.south_west.latitude > mid);
        assert!(!northern.is_empty());
        assert!(northern.len() < grid.len());
        Ok(())
    }

    #[test]
    fn test_to_polygons_matches_cells() -> Result<(), GridError> {
        let grid = plan_grid(&(6.20, -75.60), &(6.26, -75.54), None)?;
        assert_eq!(grid.to_polygons().len(), grid.len());
        Ok(())
    }

    #[test]
    fn test_grid_propagates_planning_errors() {
        let result = plan_grid(&(91.0, 0.0), &(0.0, 0.0), None);
        assert!(matches!(result, Err(GridError::InvalidCoordinate(_, _))));

        let result = Grid::builder()
            .corner_a(&(6.38, -75.45))
            .corner_b(&(6.08, -75.70))
            .target_side_meters(-1.0)
            .build();
        assert!(matches!(result, Err(GridError::DegenerateConfiguration(_))));
    }
}
