//! # Dungeonforge 🗺️
//!
//! ## A procedural BSP dungeon generator for Rust
//!
//! `dungeonforge` partitions a rectangular map with binary space
//! partitioning, carves a room into each resulting section, connects the
//! rooms with corridors, derives wall geometry, and classifies every cell
//! with a tile label ready for rendering. This crate is the main facade,
//! re-exporting the `dungeonforge` ecosystem.
//!
//! ## Core Principles
//!
//! -   **🦀 Pure Rust**: no C dependencies, for easy and fast builds.
//! -   **📦 Modular**: the library is split into small, focused crates.
//!     You only use what you need.
//! -   **🔁 Deterministic**: generation is driven entirely by a seeded
//!     RNG, so the same seed and options always produce the same map.
//! -   **📚 Well-documented**: aims for clear documentation and practical
//!     examples.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! dungeonforge = { version = "0.1.0", features = ["compositor"] }
//! ```
//!
//! Then, use the prelude to get started quickly:
//!
//! ```rust
//! use dungeonforge::prelude::*;
//!
//! let mut rng = Rng::with_seed(42);
//! let map = Map::new(60, 40, &GenOptions::default(), &mut rng).unwrap();
//!
//! println!("generated a {}x{} map with {} rooms", map.width(), map.height(), map.rooms().len());
//! ```
//!
//! ## Available Features
//!
//! -   `tileset`: loading and building texture catalogs for generated maps.
//! -   `compositor`: compositing a labelled map against a texture catalog
//!     into pixel layers.
//! -   `full`: enables all features.

#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![deny(missing_docs)]

// Re-export core crates (always available).
pub use dungeonforge_bsp as bsp;
pub use dungeonforge_geometry as geometry;
pub use dungeonforge_random as random;

// Optional feature-gated crates.
#[cfg(feature = "tileset")]
pub use dungeonforge_tileset as tileset;

#[cfg(feature = "compositor")]
pub use dungeonforge_compositor as compositor;

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types (always available).
    pub use crate::bsp::{
        BspError, Door, DoorId, GenOptions, Hall, HallId, Map, Room, RoomId, Section, SectionId,
        SplitDirection, TileGrid, TileLabel,
    };
    pub use crate::geometry::{Point, Rect};
    pub use crate::random::Rng;

    // Optional feature-gated items.
    #[cfg(feature = "tileset")]
    pub use crate::tileset::TileCatalog;

    #[cfg(feature = "compositor")]
    pub use crate::compositor::composite;
}
