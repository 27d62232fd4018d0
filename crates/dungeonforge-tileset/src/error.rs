use thiserror::Error;

/// Errors raised while building or querying a texture catalog.
#[derive(Error, Debug)]
pub enum TilesetError {
    /// Failed to decode an image file.
    #[error("failed to load tile image: {0}")]
    Image(#[from] image::ImageError),

    /// The sprite sheet was too small for the requested tile grid.
    #[error("invalid tileset dimensions: {0}")]
    InvalidDimensions(String),

    /// A label the compositor asked for has no entry in the catalog.
    #[error("no tile registered for label ({0}, {1})")]
    MissingTile(i32, i32),
}

/// Result type alias for tileset operations.
pub type Result<T> = std::result::Result<T, TilesetError>;
