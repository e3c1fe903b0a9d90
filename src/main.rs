use quadgrid_rs::{GridError, plan_grid};

fn main() -> Result<(), GridError> {
    env_logger::init();

    let corner_a = (6.381370, -75.456900);
    let corner_b = (6.082295, -75.700190);

    let grid = plan_grid(&corner_a, &corner_b, None)?;

    println!("Planned {} cells", grid.len());
    println!("Target side: {} m", grid.target_side_meters());

    if let Some(cell) = grid.cells().first() {
        println!("South-west cell: {:?}", cell);
        println!("Diagonal: {:.1} m", cell.diagonal_meters());
    }

    Ok(())
}
