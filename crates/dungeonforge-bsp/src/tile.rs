use dungeonforge_geometry::Point;

/// Family id shared by every label that should be treated alike by the
/// wall orientation filter and by texture lookup priority.
const FAMILY_VOID: i32 = 0;
const FAMILY_GROUND: i32 = 1;
const FAMILY_WALL: i32 = 2;

/// The full tile label taxonomy produced by the rasteriser and refined by
/// the wall orientation filter.
///
/// Every label carries a stable `(id, sub_id)` pair: `id` groups labels
/// into the three families the orientation filter matches against (void,
/// ground, wall), `sub_id` distinguishes individual variants within a
/// family. The pair is a texture-catalog key, not a rendering decision
/// made here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileLabel {
    /// Unused cell, outside every room, hall and wall.
    Void,
    /// Floor inside a room.
    Ground,
    /// Floor inside a hall.
    GroundHall,
    /// Floor at a door opening.
    GroundDoor,
    /// A wall cell not yet classified by the orientation filter.
    RawWall,
    /// Wall directly above ground: the player-facing face.
    WallBase,
    /// Wall with open ground to the north and walls on both sides.
    WallN,
    /// Wall with open void to the south and walls on both sides.
    WallS,
    /// Wall with open void to the east and walls above/below.
    WallE,
    /// Wall with open void to the west and walls above/below.
    WallW,
    /// Outer convex corner, north-east.
    WallNe,
    /// Outer convex corner, north-west (mirrors [`TileLabel::WallNe`]).
    WallNw,
    /// Outer convex corner, south-east.
    WallSe,
    /// Outer convex corner, south-west.
    WallSw,
    /// Inner concave corner, north-east.
    WallNeInt,
    /// Inner concave corner, north-west.
    WallNwInt,
    /// Inner concave corner, south-east.
    WallSeInt,
    /// Inner concave corner, south-west.
    WallSwInt,
}

impl TileLabel {
    /// Family id: which of void/ground/wall this label belongs to.
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Self::Void => FAMILY_VOID,
            Self::Ground | Self::GroundHall | Self::GroundDoor => FAMILY_GROUND,
            Self::RawWall
            | Self::WallBase
            | Self::WallN
            | Self::WallS
            | Self::WallE
            | Self::WallW
            | Self::WallNe
            | Self::WallNw
            | Self::WallSe
            | Self::WallSw
            | Self::WallNeInt
            | Self::WallNwInt
            | Self::WallSeInt
            | Self::WallSwInt => FAMILY_WALL,
        }
    }

    /// Sub-id: distinguishes this label from its family siblings.
    #[must_use]
    pub const fn sub_id(self) -> i32 {
        match self {
            Self::Void => 0,
            Self::Ground => 0,
            Self::GroundHall => 1,
            Self::GroundDoor => 2,
            Self::RawWall => 0,
            Self::WallBase => 1,
            Self::WallN => 2,
            Self::WallS => 3,
            Self::WallE => 4,
            Self::WallW => 5,
            Self::WallNe => 6,
            Self::WallNw => 7,
            Self::WallSe => 8,
            Self::WallSw => 9,
            Self::WallNeInt => 10,
            Self::WallNwInt => 11,
            Self::WallSeInt => 12,
            Self::WallSwInt => 13,
        }
    }
}

/// A rectangular grid of resolved tile labels.
///
/// Produced by the rasteriser, then refined in place by the wall
/// orientation filter. This is the "labelled grid" the compositor crate
/// consumes.
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: i32,
    height: i32,
    cells: Vec<TileLabel>,
}

impl TileGrid {
    pub(crate) fn filled(width: i32, height: i32, label: TileLabel) -> Self {
        Self {
            width,
            height,
            cells: vec![label; (width as usize) * (height as usize)],
        }
    }

    /// Width of the grid, in cells.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid, in cells.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns the label at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> TileLabel {
        assert!(x >= 0 && y >= 0 && x < self.width && y < self.height);
        self.cells[(y * self.width + x) as usize]
    }

    pub(crate) fn set(&mut self, x: i32, y: i32, label: TileLabel) {
        let idx = (y * self.width + x) as usize;
        self.cells[idx] = label;
    }

    /// Iterates over every cell, row-major, alongside its point.
    pub fn iter(&self) -> impl Iterator<Item = (Point, TileLabel)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, &label)| {
            let i = i as i32;
            (Point::new_unchecked(i % width, i / width), label)
        })
    }
}
