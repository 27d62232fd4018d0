//! Texture catalog for the dungeon generation pipeline.
//!
//! # Overview
//!
//! `dungeonforge-tileset` provides [`TileCatalog`], a `(family id, sub id)`
//! keyed lookup from a resolved [`dungeonforge_bsp::TileLabel`] to the
//! pixel image that represents it. It doesn't know about any particular
//! map; it's built once (from a sprite sheet, or from
//! [`TileCatalog::solid_colors`] for tests and headless use) and handed to
//! the compositor by reference.
//!
//! # Usage
//!
//! ```
//! use dungeonforge_bsp::TileLabel;
//! use dungeonforge_tileset::TileCatalog;
//!
//! let catalog = TileCatalog::solid_colors(16, 16);
//! let ground = catalog.get(TileLabel::Ground).unwrap();
//! assert_eq!(ground.width(), 16);
//! ```

#![deny(missing_docs)]

mod catalog;
mod error;

pub use catalog::TileCatalog;
pub use error::{Result, TilesetError};
