/// Error type for quadgrid-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A latitude is outside [-90, 90] or a longitude outside [-180, 180].
    InvalidCoordinate(f64, f64),
    /// The tiling parameters make the meter-to-degree conversion undefined
    /// or unbounded (non-positive side length, near-polar reference).
    DegenerateConfiguration(String),
    /// The fill loop did not converge within the iteration cap.
    NonTerminatingTiling(usize),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidCoordinate(lat, lon) => {
                write!(f, "Invalid coordinate: latitude {}, longitude {}", lat, lon)
            }
            GridError::DegenerateConfiguration(msg) => {
                write!(f, "Degenerate configuration: {}", msg)
            }
            GridError::NonTerminatingTiling(max) => {
                write!(f, "Tiling did not converge within {} cells", max)
            }
        }
    }
}

impl std::error::Error for GridError {}
