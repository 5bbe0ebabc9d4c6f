use thiserror::Error;

/// Top-level error type for the bayform geometry core.
#[derive(Debug, Error)]
pub enum BayformError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors related to wall-chain and ceiling geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("wall index {index} is out of range for a chain of {wall_count} walls")]
    WallIndexOutOfRange { index: usize, wall_count: usize },

    #[error("wall length must be positive, got {0}")]
    InvalidWallLength(f64),

    #[error("explicit wall angle {0} is outside [-180, 180] degrees")]
    AngleOutOfRange(f64),

    #[error("height must be positive, got {0}")]
    NonPositiveHeight(f64),

    #[error("a radial ceiling needs at least 3 walls, got {count}")]
    TooFewWalls { count: usize },
}

/// Errors related to section layout and placement.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("section references wall index {index}, but the room has {wall_count} walls")]
    WallIndexOutOfRange { index: usize, wall_count: usize },

    #[error("section references unknown wall name \"{0}\"")]
    UnknownWallName(String),

    #[error("section {section_index} still has an unresolved fill width")]
    UnresolvedFillWidth { section_index: usize },

    #[error("no remaining length for fill sections on wall {wall_index}")]
    NoFillCapacity { wall_index: usize },

    #[error("cabinet count {cabinets} does not match transform count {transforms}")]
    CountMismatch { cabinets: usize, transforms: usize },
}

/// Convenience type alias for results using [`BayformError`].
pub type Result<T> = std::result::Result<T, BayformError>;
