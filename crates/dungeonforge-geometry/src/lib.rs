//! Grid-cell geometry primitives for dungeon generation.
//!
//! # Overview
//!
//! `dungeonforge-geometry` provides the two value types every other crate
//! in this workspace builds on: [`Point`], an integer grid coordinate, and
//! [`Rect`], an axis-aligned rectangle of grid cells. Both are immutable
//! once constructed and carry no behaviour beyond containment and
//! iteration — rooms, halls, walls and sections are all "a `Rect` plus
//! some bookkeeping", built in `dungeonforge-bsp`.
//!
//! # Usage
//!
//! ```
//! use dungeonforge_geometry::{Point, Rect};
//!
//! let room = Rect::new(10, 10, 8, 6).unwrap();
//! assert_eq!(room.right(), 17);
//! assert_eq!(room.bottom(), 15);
//! assert!(room.contains(Point::new(10, 10).unwrap()));
//! assert!(!room.contains(Point::new(18, 10).unwrap()));
//! ```

#![deny(missing_docs)]

use thiserror::Error;

/// Errors raised by the geometry primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A negative coordinate or non-positive dimension was supplied to a
    /// primitive constructor.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Result type alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// A single grid cell coordinate.
///
/// Coordinates are non-negative; equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Creates a new point, failing if either coordinate is negative.
    pub fn new(x: i32, y: i32) -> Result<Self> {
        if x < 0 || y < 0 {
            return Err(GeometryError::InvalidGeometry(format!(
                "point coordinates must be non-negative, got ({x}, {y})"
            )));
        }
        Ok(Self { x, y })
    }

    /// Creates a point without validating its coordinates.
    ///
    /// Used internally by pipeline stages that compute a candidate
    /// coordinate (e.g. `room.x - 1`) before it is known to lie on the map;
    /// callers that hand a `Point` back across a crate boundary should
    /// prefer [`Point::new`].
    #[must_use]
    pub const fn new_unchecked(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the 8 neighbours of this point (N, S, E, W and diagonals),
    /// in no particular order.
    #[must_use]
    pub fn neighbours8(self) -> [Point; 8] {
        [
            Point::new_unchecked(self.x - 1, self.y - 1),
            Point::new_unchecked(self.x, self.y - 1),
            Point::new_unchecked(self.x + 1, self.y - 1),
            Point::new_unchecked(self.x - 1, self.y),
            Point::new_unchecked(self.x + 1, self.y),
            Point::new_unchecked(self.x - 1, self.y + 1),
            Point::new_unchecked(self.x, self.y + 1),
            Point::new_unchecked(self.x + 1, self.y + 1),
        ]
    }
}

/// An axis-aligned rectangle of grid cells.
///
/// Defined by a top-left corner `(x, y)` and a `width`/`height`; `right`
/// and `bottom` are the inclusive last column/row. All fields are
/// non-negative and the rectangle is immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and dimensions.
    ///
    /// Fails with [`GeometryError::InvalidGeometry`] if `x`, `y` are
    /// negative or `width`, `height` are not strictly positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        if x < 0 || y < 0 || width <= 0 || height <= 0 {
            return Err(GeometryError::InvalidGeometry(format!(
                "invalid rect: ({x}, {y}, {width}, {height})"
            )));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Creates a rectangle without validating its fields.
    ///
    /// Pipeline stages build candidate rects (e.g. a wall strip one cell
    /// outside a room) that are checked for validity only once placed on
    /// the map; use [`Rect::new`] at API boundaries.
    #[must_use]
    pub const fn new_unchecked(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The X coordinate of the rightmost column (inclusive).
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// The Y coordinate of the bottommost row (inclusive).
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Closed-box containment test: `x <= p.x <= right && y <= p.y <= bottom`.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.x <= p.x && p.x <= self.right() && self.y <= p.y && p.y <= self.bottom()
    }

    /// Returns `true` if `self` and `other` share at least one cell.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && self.right() >= other.x
            && self.y <= other.bottom()
            && self.bottom() >= other.y
    }

    /// Returns the center point of the rectangle, rounding toward the
    /// top-left on even spans.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new_unchecked(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Iterates over every cell contained in the rectangle, row-major.
    #[must_use]
    pub fn points(&self) -> RectIter {
        RectIter {
            rect: *self,
            cursor: 0,
        }
    }
}

/// Row-major iterator over the cells of a [`Rect`].
#[derive(Debug, Clone)]
pub struct RectIter {
    rect: Rect,
    cursor: i64,
}

impl Iterator for RectIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let total = i64::from(self.rect.width) * i64::from(self.rect.height);
        if self.cursor >= total {
            return None;
        }
        let row = self.cursor / i64::from(self.rect.width);
        let col = self.cursor % i64::from(self.rect.width);
        self.cursor += 1;
        Some(Point::new_unchecked(
            self.rect.x + col as i32,
            self.rect.y + row as i32,
        ))
    }
}

impl IntoIterator for Rect {
    type IntoIter = RectIter;
    type Item = Point;

    fn into_iter(self) -> Self::IntoIter {
        self.points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_rejects_negative() {
        assert!(Point::new(-1, 0).is_err());
        assert!(Point::new(0, -1).is_err());
        assert!(Point::new(0, 0).is_ok());
    }

    #[test]
    fn test_rect_derived_fields() {
        let rect = Rect::new(0, 0, 5, 5).unwrap();
        assert_eq!(rect.right(), 4);
        assert_eq!(rect.bottom(), 4);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(0, 0, 5, 5).unwrap();
        assert!(rect.contains(Point::new(4, 4).unwrap()));
        assert!(!rect.contains(Point::new(5, 5).unwrap()));
    }

    #[test]
    fn test_rect_rejects_invalid() {
        assert!(Rect::new(-1, 0, 5, 5).is_err());
        assert!(Rect::new(0, 0, 0, 5).is_err());
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0, 0, 5, 5).unwrap();
        let b = Rect::new(4, 4, 5, 5).unwrap();
        let c = Rect::new(10, 10, 2, 2).unwrap();
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_rect_points_count() {
        let rect = Rect::new(2, 3, 4, 2).unwrap();
        let pts: Vec<_> = rect.points().collect();
        assert_eq!(pts.len(), 8);
        assert_eq!(pts[0], Point::new(2, 3).unwrap());
        assert_eq!(pts[7], Point::new(5, 4).unwrap());
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(0, 0, 5, 5).unwrap();
        assert_eq!(rect.center(), Point::new(2, 2).unwrap());
    }
}
