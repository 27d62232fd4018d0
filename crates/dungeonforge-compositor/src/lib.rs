//! CPU-based raster compositor for dungeon layouts.
//!
//! # Overview
//!
//! `dungeonforge-compositor` turns a [`TileGrid`] and a [`TileCatalog`]
//! into a pixel image: for every cell, it looks up the catalog entry for
//! that cell's label and blits it into a single RGBA buffer at the
//! matching pixel offset. It's useful for headless rendering, debugging
//! generated layouts, and golden-image tests, without any GPU or windowing
//! dependency.
//!
//! # Usage
//!
//! ```
//! use dungeonforge_bsp::{GenOptions, Map};
//! use dungeonforge_random::Rng;
//! use dungeonforge_tileset::TileCatalog;
//! use dungeonforge_compositor::composite;
//!
//! let mut rng = Rng::with_seed(1);
//! let map = Map::new(40, 30, &GenOptions::default(), &mut rng).unwrap();
//! let catalog = TileCatalog::solid_colors(8, 8);
//! let layers = composite(map.tiles(), &catalog).unwrap();
//! let bg = &layers["bg"];
//! assert_eq!(bg.width(), 40 * 8);
//! assert_eq!(bg.height(), 30 * 8);
//! ```

#![deny(missing_docs)]

use std::collections::HashMap;

use dungeonforge_bsp::TileGrid;
use dungeonforge_tileset::{Result, TileCatalog};
use image::{imageops::overlay, RgbaImage};

/// The name of the single layer [`composite`] produces today.
///
/// A named-layer return type leaves room for future layers (e.g. a
/// separate fog-of-war or decal layer) without changing the signature.
pub const BACKGROUND_LAYER: &str = "bg";

/// Composites `grid` against `catalog` into a single `"bg"` layer.
///
/// Each cell's label is looked up in `catalog` and overlaid onto the
/// output image at `(x * tile_width, y * tile_height)`.
///
/// # Errors
///
/// Returns the catalog's error if any cell's label has no registered
/// tile.
pub fn composite(grid: &TileGrid, catalog: &TileCatalog) -> Result<HashMap<String, RgbaImage>> {
    let tile_width = catalog.tile_width();
    let tile_height = catalog.tile_height();
    let pixel_width = grid.width() as u32 * tile_width;
    let pixel_height = grid.height() as u32 * tile_height;

    let mut canvas = RgbaImage::new(pixel_width, pixel_height);
    for (point, label) in grid.iter() {
        let tile = catalog.get(label)?;
        let px = i64::from(point.x) * i64::from(tile_width);
        let py = i64::from(point.y) * i64::from(tile_height);
        overlay(&mut canvas, tile, px, py);
    }

    let mut layers = HashMap::with_capacity(1);
    layers.insert(BACKGROUND_LAYER.to_string(), canvas);
    Ok(layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeonforge_bsp::{GenOptions, Map};
    use dungeonforge_random::Rng;

    #[test]
    fn composite_produces_a_fully_sized_background_layer() {
        let mut rng = Rng::with_seed(3);
        let map = Map::new(30, 25, &GenOptions::default(), &mut rng).unwrap();
        let catalog = TileCatalog::solid_colors(4, 4);

        let layers = composite(map.tiles(), &catalog).unwrap();
        let bg = &layers[BACKGROUND_LAYER];
        assert_eq!(bg.width(), 30 * 4);
        assert_eq!(bg.height(), 25 * 4);
    }

    #[test]
    fn composite_fails_on_an_incomplete_catalog() {
        let mut rng = Rng::with_seed(3);
        let map = Map::new(30, 25, &GenOptions::default(), &mut rng).unwrap();

        // A catalog missing WALL_BASE (or any other label) should surface
        // as an error rather than silently skipping cells.
        let empty = TileCatalog::from_bytes(
            &minimal_png(),
            1,
            1,
            &[(dungeonforge_bsp::TileLabel::Ground, (0, 0))],
        );
        if let Ok(catalog) = empty {
            assert!(composite(map.tiles(), &catalog).is_err());
        }
    }

    fn minimal_png() -> Vec<u8> {
        let img = RgbaImage::new(2, 2);
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }
}
