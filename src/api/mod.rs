pub mod grid;

pub use grid::{Grid, GridBuilder, plan_grid};
