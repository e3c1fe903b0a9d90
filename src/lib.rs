//! # quadgrid-rs
//!
//! Tiles the bounding box between two corner coordinates into a grid of
//! near-square cells of a target side length, for per-cell batch
//! processing such as issuing one capped query per cell against an
//! external data source.
//!
//! There are two main entry points.
//!
//! ### 1. `plan_grid` - One-shot Planning
//!
//! ```
//! use quadgrid_rs::plan_grid;
//!
//! # fn main() -> Result<(), quadgrid_rs::GridError> {
//! let grid = plan_grid(&(6.381370, -75.456900), &(6.082295, -75.700190), None)?;
//! println!("{} cells", grid.len());
//! for cell in grid.iter() {
//!     let _center = cell.center();
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Grid` - Builder and `geo_types` Interop
//!
//! ```
//! use quadgrid_rs::Grid;
//! use geo_types::point;
//!
//! # fn main() -> Result<(), quadgrid_rs::GridError> {
//! let grid = Grid::builder()
//!     .corner_a(&point! { x: -75.4560, y: 6.3800 })
//!     .corner_b(&point! { x: -75.4551, y: 6.3791 })
//!     .target_side_meters(1040.0)
//!     .build()?;
//!
//! let polygons = grid.to_polygons();
//! assert_eq!(polygons.len(), grid.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{Grid, GridBuilder, plan_grid};
pub use core::{
    Cell, DEFAULT_CELL_SIDE_METERS, EARTH_RADIUS_METERS, GeoPoint, MAX_FILL_CELLS,
    POLAR_LATITUDE_EPSILON, diagonal_offset, fill_cells, haversine_meters, plan_cells,
};
pub use util::{Coordinate, GridError, validate_coordinate};

pub use geo_types;
