use thiserror::Error;

/// Errors raised by the dungeon generation pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BspError {
    /// The requested map dimensions or room-size options can never satisfy
    /// the partitioner's size constraints.
    #[error("invalid generation parameters: {0}")]
    InvalidParameters(String),

    /// The retry loop exhausted its attempt budget without producing a
    /// fully connected layout.
    #[error("generation did not converge on a connected map within the retry budget")]
    GenerationIncomplete,

    /// The wall orientation filter was asked to classify a neighbourhood
    /// whose center cell is not a raw wall.
    #[error("invalid grid: orientation filter expects a raw wall at the center cell")]
    InvalidGrid,

    /// A geometry primitive could not be constructed from pipeline output.
    #[error(transparent)]
    Geometry(#[from] dungeonforge_geometry::GeometryError),
}

/// Result type alias for the generation pipeline.
pub type Result<T> = std::result::Result<T, BspError>;
