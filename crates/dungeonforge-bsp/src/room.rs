use dungeonforge_geometry::{Point, Rect};
use dungeonforge_random::Rng;

use crate::ids::{RoomId, SectionId};
use crate::section::Section;

/// A room placed inside a leaf section.
#[derive(Debug, Clone)]
pub struct Room {
    /// The room's floor rectangle.
    pub rect: Rect,
    /// The leaf section that owns this room.
    pub section: SectionId,
}

/// A door: a single floor cell opening a room onto a hall.
#[derive(Debug, Clone, Copy)]
pub struct Door {
    /// The door's cell.
    pub point: Point,
}

/// Places one room inside every leaf section, sized and positioned with
/// the given margin from the section's bounds.
pub(crate) fn place_rooms(arena: &mut [Section], rng: &mut Rng) -> Vec<Room> {
    let mut rooms = Vec::new();
    for idx in 0..arena.len() {
        if !arena[idx].is_leaf() {
            continue;
        }
        let rect = place_room(&arena[idx], rng);
        let room_id = RoomId(rooms.len());
        rooms.push(Room {
            rect,
            section: SectionId(idx),
        });
        arena[idx].room = Some(room_id);
    }
    rooms
}

fn place_room(section: &Section, rng: &mut Rng) -> Rect {
    let bounds = section.bounds;
    let margin = section.margin;

    let room_width = rng.range(section.min_room_size, bounds.width - 2 * margin);
    let room_height = rng.range(section.min_room_size, bounds.height - 2 * margin);
    let room_x = rng.range(margin, bounds.width - room_width - margin);
    let room_y = rng.range(margin, bounds.height - room_height - margin);

    Rect::new_unchecked(bounds.x + room_x, bounds.y + room_y, room_width, room_height)
}

/// Whether a door can be opened at `(x, y)` on the border of `room`,
/// given the doors already placed on the room's owning section.
///
/// `(x, y)` must sit one cell outside the room, strictly interior to the
/// side it borders (not at a corner), and must not fall within the 3x3
/// neighbourhood of an existing door on the same section.
pub(crate) fn can_place_door(room: &Rect, existing: &[Point], x: i32, y: i32) -> bool {
    let interior = if y == room.y - 1 || y == room.bottom() + 1 {
        x > room.x + 1 && x < room.right() - 1
    } else if x == room.x - 1 || x == room.right() + 1 {
        y > room.y + 1 && y < room.bottom() - 1
    } else {
        false
    };
    if !interior {
        return false;
    }

    !existing
        .iter()
        .any(|d| (d.x - x).abs() <= 1 && (d.y - y).abs() <= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placed_room_stays_within_margin() {
        let section = Section::new_leaf_for_test(Rect::new(0, 0, 30, 20).unwrap(), 6, 15, 3);
        let mut rng = Rng::with_seed(11);
        let rect = place_room(&section, &mut rng);
        assert!(rect.x >= 3 && rect.y >= 3);
        assert!(rect.right() <= section.bounds.right() - 3);
        assert!(rect.bottom() <= section.bounds.bottom() - 3);
    }

    #[test]
    fn can_place_door_rejects_corners_and_exterior() {
        let room = Rect::new(10, 10, 6, 6).unwrap();
        // top edge, strictly interior
        assert!(can_place_door(&room, &[], 12, room.y - 1));
        // corner, not interior
        assert!(!can_place_door(&room, &[], room.x, room.y - 1));
        // not on any border line at all
        assert!(!can_place_door(&room, &[], 12, 12));
    }

    #[test]
    fn can_place_door_rejects_neighbours_of_existing_doors() {
        let room = Rect::new(10, 10, 6, 6).unwrap();
        let existing = [Point::new_unchecked(12, room.y - 1)];
        assert!(!can_place_door(&room, &existing, 13, room.y - 1));
        assert!(can_place_door(&room, &existing, 14, room.y - 1));
    }
}
