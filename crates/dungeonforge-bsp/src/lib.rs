//! Binary-space-partitioned procedural dungeon generation.
//!
//! # Overview
//!
//! [`Map::new`] runs the full pipeline over a rectangular grid: a BSP
//! partitioner carves the area into sections, each leaf section gets a
//! room, a four-direction ray sweep carves corridors (and their doors)
//! between rooms, walls are extracted around every room and hall, the
//! result is rasterised into a labelled tile grid, and a 3x3 template
//! filter resolves each wall cell's orientation. If the resulting layout
//! isn't fully connected, the whole pipeline reruns against the same
//! injected [`Rng`](dungeonforge_random::Rng) up to an internal retry
//! budget.
//!
//! # Usage
//!
//! ```
//! use dungeonforge_bsp::{GenOptions, Map};
//! use dungeonforge_random::Rng;
//!
//! let mut rng = Rng::with_seed(1);
//! let map = Map::new(80, 50, &GenOptions::default(), &mut rng).unwrap();
//! assert!(!map.rooms().is_empty());
//! ```

#![deny(missing_docs)]

mod connectivity;
mod corridor;
mod error;
mod ids;
mod map;
mod orientation;
mod raster;
mod room;
mod section;
mod tile;
mod wall;

pub use error::{BspError, Result};
pub use map::{GenOptions, Map};
pub use room::Door;
pub use section::SplitDirection;
pub use tile::{TileGrid, TileLabel};

pub use corridor::Hall;
pub use ids::{DoorId, HallId, RoomId, SectionId};
pub use room::Room;
pub use section::Section;
