use std::collections::HashSet;

use dungeonforge_geometry::{Point, Rect};

use crate::ids::{DoorId, HallId, RoomId, SectionId};
use crate::room::{can_place_door, Door, Room};
use crate::section::{leaf_at, Section};

const MAX_CORRIDOR_LEN: i32 = 20;

/// A straight, single-cell-wide corridor between the doors of two rooms.
#[derive(Debug, Clone)]
pub struct Hall {
    /// The corridor's floor rectangle.
    pub rect: Rect,
    /// The two doors this hall connects, ordered top-to-bottom (vertical
    /// halls) or left-to-right (horizontal halls).
    pub doors: (DoorId, DoorId),
    /// The two rooms this hall connects, in the same order as `doors`.
    pub rooms: (RoomId, RoomId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    fn step(self, p: Point) -> Point {
        match self {
            Direction::North => Point::new_unchecked(p.x, p.y - 1),
            Direction::South => Point::new_unchecked(p.x, p.y + 1),
            Direction::East => Point::new_unchecked(p.x + 1, p.y),
            Direction::West => Point::new_unchecked(p.x - 1, p.y),
        }
    }
}

/// Mutable state threaded through the corridor-carving traversal.
pub(crate) struct CorridorContext<'a> {
    pub sections: &'a mut Vec<Section>,
    pub rooms: &'a mut Vec<Room>,
    pub doors: &'a mut Vec<Door>,
    pub halls: &'a mut Vec<Hall>,
    pub hall_cells: HashSet<(i32, i32)>,
    pub width: i32,
    pub height: i32,
}

/// Walks the BSP tree and carves corridors.
///
/// Internal nodes recurse into both children; a leaf that owns a room runs
/// the four-direction sweep along its borders, looking for the first
/// reachable room in each direction.
pub(crate) fn carve(ctx: &mut CorridorContext, section_id: SectionId) {
    let (is_leaf, left, right, room) = {
        let s = &ctx.sections[section_id.0];
        (s.is_leaf(), s.left_child, s.right_child, s.room)
    };
    if is_leaf {
        if let Some(room_id) = room {
            sweep(ctx, section_id, room_id);
        }
    } else {
        carve(ctx, left.unwrap());
        carve(ctx, right.unwrap());
    }
}

fn sweep(ctx: &mut CorridorContext, section_id: SectionId, room_id: RoomId) {
    let rect = ctx.rooms[room_id.0].rect;
    for &dir in &Direction::ALL {
        let (axis_lo, axis_hi, fixed) = match dir {
            Direction::North => (rect.x + 1, rect.right() - 1, rect.y - 1),
            Direction::South => (rect.x + 1, rect.right() - 1, rect.bottom() + 1),
            Direction::West => (rect.y + 1, rect.bottom() - 1, rect.x - 1),
            Direction::East => (rect.y + 1, rect.bottom() - 1, rect.right() + 1),
        };
        let mut coord = axis_lo;
        while coord <= axis_hi {
            let (x, y) = match dir {
                Direction::North | Direction::South => (coord, fixed),
                Direction::West | Direction::East => (fixed, coord),
            };
            try_corridor(ctx, section_id, room_id, x, y, dir);
            coord += 1;
        }
    }
}

fn is_hall_cell(ctx: &CorridorContext, p: Point) -> bool {
    ctx.hall_cells.contains(&(p.x, p.y))
}

fn is_room_cell(ctx: &CorridorContext, p: Point) -> bool {
    if p.x < 0 || p.y < 0 || p.x >= ctx.width || p.y >= ctx.height {
        return false;
    }
    let leaf = leaf_at(ctx.sections, SectionId(0), p.x, p.y);
    match ctx.sections[leaf.0].room {
        Some(room_id) => ctx.rooms[room_id.0].rect.contains(p),
        None => false,
    }
}

/// Iteratively rays out from `(x, y)` in `dir`, returning the door cell on
/// the far room's border if one is reachable within [`MAX_CORRIDOR_LEN`].
fn linear_search(ctx: &CorridorContext, x: i32, y: i32, dir: Direction, max_len: i32) -> Option<Point> {
    let (mut x, mut y) = (x, y);
    let mut remaining = max_len;

    loop {
        if remaining <= 0 {
            return None;
        }
        let here = Point::new_unchecked(x, y);
        if here.neighbours8().iter().any(|&n| is_hall_cell(ctx, n)) {
            return None;
        }
        if x < 0 || y < 0 || x >= ctx.width || y >= ctx.height {
            return None;
        }

        let north = is_room_cell(ctx, Point::new_unchecked(x, y - 1));
        let south = is_room_cell(ctx, Point::new_unchecked(x, y + 1));
        let west = is_room_cell(ctx, Point::new_unchecked(x - 1, y));
        let east = is_room_cell(ctx, Point::new_unchecked(x + 1, y));

        match dir {
            Direction::North => {
                if west || east {
                    return None;
                }
                if north {
                    return Some(here);
                }
                y -= 1;
            }
            Direction::South => {
                if west || east {
                    return None;
                }
                if south {
                    return Some(here);
                }
                y += 1;
            }
            Direction::West => {
                if north || south {
                    return None;
                }
                if west {
                    return Some(here);
                }
                x -= 1;
            }
            Direction::East => {
                if north || south {
                    return None;
                }
                if east {
                    return Some(here);
                }
                x += 1;
            }
        }
        remaining -= 1;
    }
}

fn try_corridor(
    ctx: &mut CorridorContext,
    section_id: SectionId,
    room_id: RoomId,
    x: i32,
    y: i32,
    dir: Direction,
) {
    let Some(p2) = linear_search(ctx, x, y, dir, MAX_CORRIDOR_LEN) else {
        return;
    };
    let p1 = Point::new_unchecked(x, y);
    let far_point = dir.step(p2);
    if far_point.x < 0 || far_point.y < 0 || far_point.x >= ctx.width || far_point.y >= ctx.height {
        return;
    }
    let far_leaf = leaf_at(ctx.sections, SectionId(0), far_point.x, far_point.y);
    let Some(far_room_id) = ctx.sections[far_leaf.0].room else {
        return;
    };
    if far_room_id.0 == room_id.0 {
        return;
    }

    if ctx.sections[section_id.0].halls.iter().any(|hid| {
        let h = &ctx.halls[hid.0];
        (h.rooms.0 == room_id && h.rooms.1 == far_room_id) || (h.rooms.0 == far_room_id && h.rooms.1 == room_id)
    }) {
        return;
    }

    let near_room_rect = ctx.rooms[room_id.0].rect;
    if !can_place_door(
        &near_room_rect,
        &door_points(ctx, section_id),
        p1.x,
        p1.y,
    ) {
        return;
    }
    let far_room_rect = ctx.rooms[far_room_id.0].rect;
    if !can_place_door(&far_room_rect, &door_points(ctx, far_leaf), p2.x, p2.y) {
        return;
    }

    let d1 = DoorId(ctx.doors.len());
    ctx.doors.push(Door { point: p1 });
    let d2 = DoorId(ctx.doors.len());
    ctx.doors.push(Door { point: p2 });
    ctx.sections[section_id.0].doors.push(d1);
    ctx.sections[far_leaf.0].doors.push(d2);

    let vertical = dir.is_vertical();
    let (door_lo, door_hi, room_lo, room_hi) = if vertical {
        if p1.y < p2.y {
            (d1, d2, room_id, far_room_id)
        } else {
            (d2, d1, far_room_id, room_id)
        }
    } else if p1.x < p2.x {
        (d1, d2, room_id, far_room_id)
    } else {
        (d2, d1, far_room_id, room_id)
    };

    let rect = if vertical {
        let top = p1.y.min(p2.y);
        let bottom = p1.y.max(p2.y);
        Rect::new_unchecked(p1.x, top, 1, bottom - top + 1)
    } else {
        let left = p1.x.min(p2.x);
        let right = p1.x.max(p2.x);
        Rect::new_unchecked(left, p1.y, right - left + 1, 1)
    };

    let hall_id = HallId(ctx.halls.len());
    ctx.halls.push(Hall {
        rect,
        doors: (door_lo, door_hi),
        rooms: (room_lo, room_hi),
    });

    for p in rect.points() {
        ctx.hall_cells.insert((p.x, p.y));
    }

    let mut last_section: Option<SectionId> = None;
    for p in rect.points() {
        let leaf = leaf_at(ctx.sections, SectionId(0), p.x, p.y);
        if Some(leaf) != last_section {
            ctx.sections[leaf.0].halls.push(hall_id);
            last_section = Some(leaf);
        }
    }
}

fn door_points(ctx: &CorridorContext, section: SectionId) -> Vec<Point> {
    ctx.sections[section.0]
        .doors
        .iter()
        .map(|d| ctx.doors[d.0].point)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::place_rooms;
    use crate::section::partition;
    use dungeonforge_random::Rng;

    #[test]
    fn carves_at_least_one_hall_for_a_multi_room_dungeon() {
        let root = Rect::new(0, 0, 80, 60).unwrap();
        let mut rng = Rng::with_seed(42);
        let mut sections = partition(root, 6, 15, 3, &mut rng);
        let mut rooms = place_rooms(&mut sections, &mut rng);
        let mut doors = Vec::new();
        let mut halls = Vec::new();
        let mut ctx = CorridorContext {
            sections: &mut sections,
            rooms: &mut rooms,
            doors: &mut doors,
            halls: &mut halls,
            hall_cells: HashSet::new(),
            width: 80,
            height: 60,
        };
        carve(&mut ctx, SectionId(0));
        assert!(!halls.is_empty(), "expected at least one corridor to be carved");
        for hall in &halls {
            assert_ne!(hall.rooms.0, hall.rooms.1);
        }
    }
}
