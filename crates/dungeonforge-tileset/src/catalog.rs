use std::collections::HashMap;

use dungeonforge_bsp::TileLabel;
use image::{DynamicImage, GenericImageView, ImageReader, Rgba, RgbaImage};

use crate::error::{Result, TilesetError};

/// Maps resolved [`TileLabel`]s to the pixel image that represents them.
///
/// Built once from a sprite sheet (or a placeholder palette) and handed
/// to the compositor by reference; the catalog has no knowledge of any
/// particular map, only of the label taxonomy.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    tile_width: u32,
    tile_height: u32,
    tiles: HashMap<(i32, i32), RgbaImage>,
}

impl TileCatalog {
    /// Width of a single tile, in pixels.
    #[must_use]
    pub const fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Height of a single tile, in pixels.
    #[must_use]
    pub const fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Looks up the image for a label.
    pub fn get(&self, label: TileLabel) -> Result<&RgbaImage> {
        self.tiles
            .get(&(label.id(), label.sub_id()))
            .ok_or(TilesetError::MissingTile(label.id(), label.sub_id()))
    }

    /// Loads a catalog from a sprite sheet on disk.
    ///
    /// `layout` pairs each label with its `(column, row)` cell in the
    /// sheet; any label not present in `layout` has no entry in the
    /// resulting catalog.
    pub fn from_file(
        path: &str,
        tile_width: u32,
        tile_height: u32,
        layout: &[(TileLabel, (u32, u32))],
    ) -> Result<Self> {
        let img = ImageReader::open(path)?.decode()?;
        Self::from_image(&img, tile_width, tile_height, layout)
    }

    /// Loads a catalog from sprite sheet bytes already in memory.
    pub fn from_bytes(
        data: &[u8],
        tile_width: u32,
        tile_height: u32,
        layout: &[(TileLabel, (u32, u32))],
    ) -> Result<Self> {
        let img = image::load_from_memory(data)?;
        Self::from_image(&img, tile_width, tile_height, layout)
    }

    fn from_image(
        img: &DynamicImage,
        tile_width: u32,
        tile_height: u32,
        layout: &[(TileLabel, (u32, u32))],
    ) -> Result<Self> {
        let (img_width, img_height) = img.dimensions();
        if tile_width == 0 || tile_height == 0 {
            return Err(TilesetError::InvalidDimensions(
                "tile dimensions must be non-zero".to_string(),
            ));
        }
        if img_width < tile_width || img_height < tile_height {
            return Err(TilesetError::InvalidDimensions(format!(
                "sprite sheet {img_width}x{img_height} is smaller than tile size {tile_width}x{tile_height}"
            )));
        }

        let sheet = img.to_rgba8();
        let mut tiles = HashMap::with_capacity(layout.len());
        for &(label, (col, row)) in layout {
            let src_x = col * tile_width;
            let src_y = row * tile_height;
            if src_x + tile_width > img_width || src_y + tile_height > img_height {
                return Err(TilesetError::InvalidDimensions(format!(
                    "cell ({col}, {row}) falls outside the sprite sheet"
                )));
            }
            let mut tile = RgbaImage::new(tile_width, tile_height);
            for y in 0..tile_height {
                for x in 0..tile_width {
                    tile.put_pixel(x, y, *sheet.get_pixel(src_x + x, src_y + y));
                }
            }
            tiles.insert((label.id(), label.sub_id()), tile);
        }

        Ok(Self {
            tile_width,
            tile_height,
            tiles,
        })
    }

    /// Builds a placeholder catalog where every label in the taxonomy
    /// maps to a single flat colour, keyed by family: void is black,
    /// ground shades of green, walls shades of grey. Useful for tests
    /// and for running the pipeline without real art assets.
    #[must_use]
    pub fn solid_colors(tile_width: u32, tile_height: u32) -> Self {
        let mut tiles = HashMap::new();
        for label in ALL_LABELS {
            let color = solid_color_for(label);
            let mut tile = RgbaImage::new(tile_width.max(1), tile_height.max(1));
            for pixel in tile.pixels_mut() {
                *pixel = color;
            }
            tiles.insert((label.id(), label.sub_id()), tile);
        }
        Self {
            tile_width: tile_width.max(1),
            tile_height: tile_height.max(1),
            tiles,
        }
    }
}

const ALL_LABELS: [TileLabel; 18] = [
    TileLabel::Void,
    TileLabel::Ground,
    TileLabel::GroundHall,
    TileLabel::GroundDoor,
    TileLabel::RawWall,
    TileLabel::WallBase,
    TileLabel::WallN,
    TileLabel::WallS,
    TileLabel::WallE,
    TileLabel::WallW,
    TileLabel::WallNe,
    TileLabel::WallNw,
    TileLabel::WallSe,
    TileLabel::WallSw,
    TileLabel::WallNeInt,
    TileLabel::WallNwInt,
    TileLabel::WallSeInt,
    TileLabel::WallSwInt,
];

fn solid_color_for(label: TileLabel) -> Rgba<u8> {
    match label.id() {
        0 => Rgba([0, 0, 0, 255]),
        1 => Rgba([40 + label.sub_id() as u8 * 30, 120, 40, 255]),
        _ => Rgba([90 + label.sub_id() as u8 * 8, 90 + label.sub_id() as u8 * 8, 100, 255]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_colors_covers_every_label() {
        let catalog = TileCatalog::solid_colors(8, 8);
        for label in ALL_LABELS {
            assert!(catalog.get(label).is_ok());
        }
    }

    #[test]
    fn missing_tile_reports_the_label() {
        let catalog = TileCatalog {
            tile_width: 8,
            tile_height: 8,
            tiles: HashMap::new(),
        };
        let err = catalog.get(TileLabel::Ground).unwrap_err();
        assert!(matches!(err, TilesetError::MissingTile(1, 0)));
    }

    #[test]
    fn from_image_rejects_oversized_tile() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));
        let err = TileCatalog::from_image(&img, 8, 8, &[]).unwrap_err();
        assert!(matches!(err, TilesetError::InvalidDimensions(_)));
    }
}
