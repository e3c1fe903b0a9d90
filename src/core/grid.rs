use crate::core::constants::MAX_FILL_CELLS;
use crate::core::distance::haversine_meters;
use crate::core::geometry::{Cell, GeoPoint};
use crate::core::offset::diagonal_offset;
use crate::util::coord::{Coordinate, validate_coordinate};
use crate::util::error::GridError;
use log::{debug, info};

/// Tiles `area` with cells of side `side_meters`, walking row by row from
/// the south-west corner.
///
/// Cells are laid down south to north, west to east within a row, and are
/// never clipped: the last row and column may overshoot the north and east
/// edges by up to one side length, so the union of the returned cells
/// always covers the area.
pub fn fill_cells(area: &Cell, side_meters: f64) -> Result<Vec<Cell>, GridError> {
    if !(side_meters > 0.0) {
        return Err(GridError::DegenerateConfiguration(format!(
            "cell side length must be positive, got {}",
            side_meters
        )));
    }

    let north_east = area.north_east;
    let west = area.south_west.longitude;

    let mut cells = Vec::new();
    let mut row_origin = area.south_west;

    while row_origin.latitude <= north_east.latitude {
        let mut cursor = row_origin;
        let mut row_top = row_origin.latitude;

        while cursor.longitude <= north_east.longitude {
            let diagonal = diagonal_offset(side_meters, &cursor)?;
            cells.push(Cell::span(&cursor, &diagonal));
            if cells.len() > MAX_FILL_CELLS {
                return Err(GridError::NonTerminatingTiling(MAX_FILL_CELLS));
            }
            // the offset is strictly north-east of the cursor, so both
            // loops advance every iteration
            row_top = diagonal.latitude;
            cursor = GeoPoint::new(cursor.latitude, diagonal.longitude);
        }

        row_origin = GeoPoint::new(row_top, west);
    }

    debug!(
        "filled area with {} cells of side {:.1} m",
        cells.len(),
        side_meters
    );
    Ok(cells)
}

/// Chooses a tiling strategy for the rectangle spanned by `a` and `b` and
/// returns the resulting cells in generation order.
///
/// Areas no wider than the target become a single cell, areas under twice
/// the target are split into quadrants around the midpoint, and anything
/// larger is filled with near-square cells whose diagonal is the target
/// length.
pub fn plan_cells<C: Coordinate>(
    a: &C,
    b: &C,
    target_side_meters: f64,
) -> Result<Vec<Cell>, GridError> {
    validate_coordinate(a)?;
    validate_coordinate(b)?;
    if !(target_side_meters > 0.0) {
        return Err(GridError::DegenerateConfiguration(format!(
            "target side length must be positive, got {}",
            target_side_meters
        )));
    }

    let corner_a = GeoPoint::from_coordinate(a);
    let corner_b = GeoPoint::from_coordinate(b);
    let bounds = Cell::span(&corner_a, &corner_b);

    let distance = haversine_meters(&corner_a, &corner_b);
    debug!(
        "corner distance {:.1} m, target side {:.1} m",
        distance, target_side_meters
    );

    let cells = if distance <= target_side_meters {
        vec![bounds]
    } else if distance < 2.0 * target_side_meters {
        quadrant_split(&bounds)
    } else {
        // side of the square whose diagonal is one target length, so the
        // fill's per-step diagonal matches the requested cell size
        let side = (target_side_meters * target_side_meters / 2.0).sqrt();
        fill_cells(&bounds, side)?
    };

    info!("planned {} cells", cells.len());
    Ok(cells)
}

/// Fixed 2x2 split around the arithmetic midpoint, south row first.
fn quadrant_split(bounds: &Cell) -> Vec<Cell> {
    let mid = bounds.center();
    vec![
        Cell::span(&bounds.south_west, &mid),
        Cell::span(&bounds.south_east, &mid),
        Cell::span(&bounds.north_west, &mid),
        Cell::span(&bounds.north_east, &mid),
    ]
}
