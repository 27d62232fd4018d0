use std::collections::HashSet;

use dungeonforge_geometry::Rect;
use dungeonforge_random::Rng;

use crate::connectivity::is_connected;
use crate::corridor::{carve, CorridorContext, Hall};
use crate::error::{BspError, Result};
use crate::ids::SectionId;
use crate::orientation;
use crate::raster::rasterize;
use crate::room::{place_rooms, Door, Room};
use crate::section::{partition, Section};
use crate::tile::TileGrid;
use crate::wall::build_all;

/// How many times generation retries before giving up on a connected map.
const RETRY_LIMIT: u32 = 32;

/// Tunable parameters for a single generation run.
#[derive(Debug, Clone)]
pub struct GenOptions {
    /// Minimum room dimension, in cells.
    pub min_room_size: i32,
    /// Maximum room dimension, in cells; also bounds section size when
    /// combined with `margin`.
    pub max_room_size: i32,
    /// Minimum spacing between a room's border and its owning section's
    /// border.
    pub margin: i32,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            min_room_size: 6,
            max_room_size: 15,
            margin: 3,
        }
    }
}

impl GenOptions {
    /// Creates options with the default tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum room dimension.
    #[must_use]
    pub const fn with_min_room_size(mut self, value: i32) -> Self {
        self.min_room_size = value;
        self
    }

    /// Sets the maximum room dimension.
    #[must_use]
    pub const fn with_max_room_size(mut self, value: i32) -> Self {
        self.max_room_size = value;
        self
    }

    /// Sets the section margin.
    #[must_use]
    pub const fn with_margin(mut self, value: i32) -> Self {
        self.margin = value;
        self
    }
}

/// A fully generated dungeon layout: rooms, corridors, walls and the
/// rasterised, orientation-resolved tile grid.
#[derive(Debug)]
pub struct Map {
    width: i32,
    height: i32,
    rooms: Vec<Room>,
    #[allow(dead_code)]
    sections: Vec<Section>,
    #[allow(dead_code)]
    doors: Vec<Door>,
    #[allow(dead_code)]
    halls: Vec<Hall>,
    tiles: TileGrid,
}

impl Map {
    /// Generates a new dungeon of `width` x `height` cells.
    ///
    /// Retries the full pipeline (partition, rooms, corridors, walls)
    /// against the same injected [`Rng`] up to an internal retry budget
    /// until the result is fully connected, returning
    /// [`BspError::GenerationIncomplete`] if the budget is exhausted.
    pub fn new(width: i32, height: i32, options: &GenOptions, rng: &mut Rng) -> Result<Self> {
        Self::validate(width, height, options)?;

        for attempt in 0..RETRY_LIMIT {
            log::debug!("dungeon generation attempt {attempt} of {RETRY_LIMIT}");
            let (sections, rooms, doors, halls) = Self::build(width, height, options, rng);
            if is_connected(&sections, &rooms, &halls) {
                let raw = rasterize(&sections, &rooms, &doors, &halls, width, height);
                let tiles = orientation::apply(&raw)?;
                return Ok(Self {
                    width,
                    height,
                    rooms,
                    sections,
                    doors,
                    halls,
                    tiles,
                });
            }
        }

        log::warn!("dungeon generation exhausted {RETRY_LIMIT} attempts without a connected map");
        Err(BspError::GenerationIncomplete)
    }

    fn validate(width: i32, height: i32, options: &GenOptions) -> Result<()> {
        if options.min_room_size < 3 {
            return Err(BspError::InvalidParameters(
                "min_room_size must be at least 3".into(),
            ));
        }
        if options.max_room_size < options.min_room_size {
            return Err(BspError::InvalidParameters(
                "max_room_size must be >= min_room_size".into(),
            ));
        }
        if options.margin < 0 {
            return Err(BspError::InvalidParameters("margin must be >= 0".into()));
        }
        let max_size = options.max_room_size + 2 * options.margin;
        if width <= max_size || height <= max_size {
            return Err(BspError::InvalidParameters(format!(
                "map {width}x{height} is too small for max_room_size {} with margin {}",
                options.max_room_size, options.margin
            )));
        }
        Ok(())
    }

    fn build(
        width: i32,
        height: i32,
        options: &GenOptions,
        rng: &mut Rng,
    ) -> (Vec<Section>, Vec<Room>, Vec<Door>, Vec<Hall>) {
        let root_bounds = Rect::new_unchecked(0, 0, width, height);
        let mut sections = partition(
            root_bounds,
            options.min_room_size,
            options.max_room_size,
            options.margin,
            rng,
        );
        let mut rooms = place_rooms(&mut sections, rng);

        let mut doors = Vec::new();
        let mut halls = Vec::new();
        {
            let mut ctx = CorridorContext {
                sections: &mut sections,
                rooms: &mut rooms,
                doors: &mut doors,
                halls: &mut halls,
                hall_cells: HashSet::new(),
                width,
                height,
            };
            carve(&mut ctx, SectionId(0));
        }

        build_all(&mut sections, &rooms, &doors, &halls);

        (sections, rooms, doors, halls)
    }

    /// The map's width, in cells.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// The map's height, in cells.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// The rectangles of every placed room.
    #[must_use]
    pub fn rooms(&self) -> Vec<Rect> {
        self.rooms.iter().map(|r| r.rect).collect()
    }

    /// The rasterised, orientation-resolved tile grid.
    #[must_use]
    pub const fn tiles(&self) -> &TileGrid {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_a_connected_map_with_default_options() {
        let mut rng = Rng::with_seed(1);
        let options = GenOptions::default();
        let map = Map::new(100, 100, &options, &mut rng).unwrap();
        assert!(!map.rooms().is_empty());
        assert_eq!(map.tiles().width(), 100);
        assert_eq!(map.tiles().height(), 100);
    }

    #[test]
    fn rejects_a_map_too_small_for_its_options() {
        let mut rng = Rng::with_seed(1);
        let options = GenOptions::default();
        let err = Map::new(10, 10, &options, &mut rng).unwrap_err();
        assert_eq!(err, BspError::InvalidParameters(
            "map 10x10 is too small for max_room_size 15 with margin 3".into()
        ));
    }

    #[test]
    fn same_seed_produces_the_same_room_count() {
        let options = GenOptions::default();
        let mut rng1 = Rng::with_seed(42);
        let map1 = Map::new(80, 80, &options, &mut rng1).unwrap();
        let mut rng2 = Rng::with_seed(42);
        let map2 = Map::new(80, 80, &options, &mut rng2).unwrap();
        assert_eq!(map1.rooms().len(), map2.rooms().len());
    }
}
