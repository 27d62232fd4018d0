//! Seedable random number generation for dungeon generation.
//!
//! # Overview
//!
//! `dungeonforge-random` wraps [`rand`] behind a single [`Rng`] type with
//! the handful of operations the generation pipeline needs: inclusive
//! integer ranges, unit floats, and weighted coin flips. The wrapper can
//! be backed by the thread-local source (ad hoc generation) or by a
//! seeded `StdRng` (reproducible generation, required for tests and for
//! the retry loop in `dungeonforge-bsp`).
//!
//! # Usage
//!
//! ```
//! use dungeonforge_random::Rng;
//!
//! let mut rng = Rng::with_seed(1);
//! let n = rng.range(1, 6); // a d6
//! assert!((1..=6).contains(&n));
//! ```

#![deny(missing_docs)]

mod rng;

pub use rng::Rng;
