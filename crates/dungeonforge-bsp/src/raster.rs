use crate::corridor::Hall;
use crate::ids::SectionId;
use crate::room::{Door, Room};
use crate::section::{leaf_at, Section};
use crate::tile::{TileGrid, TileLabel};

/// Rasterises the generated layout into a labelled grid.
///
/// Priority per cell, highest first: room floor, door floor, wall, hall
/// floor, else void.
pub(crate) fn rasterize(
    sections: &[Section],
    rooms: &[Room],
    doors: &[Door],
    halls: &[Hall],
    width: i32,
    height: i32,
) -> TileGrid {
    let mut grid = TileGrid::filled(width, height, TileLabel::Void);

    for y in 0..height {
        for x in 0..width {
            let leaf = leaf_at(sections, SectionId(0), x, y);
            let label = classify_cell(sections, rooms, doors, halls, leaf, x, y);
            grid.set(x, y, label);
        }
    }

    grid
}

fn classify_cell(
    sections: &[Section],
    rooms: &[Room],
    doors: &[Door],
    halls: &[Hall],
    leaf: SectionId,
    x: i32,
    y: i32,
) -> TileLabel {
    use dungeonforge_geometry::Point;
    let p = Point::new_unchecked(x, y);
    let section = &sections[leaf.0];

    if let Some(room_id) = section.room {
        if rooms[room_id.0].rect.contains(p) {
            return TileLabel::Ground;
        }
    }

    for &door_id in &section.doors {
        if doors[door_id.0].point == p {
            return TileLabel::GroundDoor;
        }
    }

    if section.walls.iter().any(|w| w.contains(p)) {
        return TileLabel::RawWall;
    }

    for &hall_id in &section.halls {
        if halls[hall_id.0].rect.contains(p) {
            return TileLabel::GroundHall;
        }
    }

    TileLabel::Void
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corridor::{carve, CorridorContext};
    use crate::room::place_rooms;
    use crate::section::partition;
    use dungeonforge_geometry::Rect;
    use dungeonforge_random::Rng;
    use std::collections::HashSet;

    #[test]
    fn every_room_cell_rasterises_to_ground() {
        let root = Rect::new(0, 0, 60, 40).unwrap();
        let mut rng = Rng::with_seed(5);
        let mut sections = partition(root, 6, 15, 3, &mut rng);
        let mut rooms = place_rooms(&mut sections, &mut rng);
        let mut doors = Vec::new();
        let mut halls = Vec::new();
        {
            let mut ctx = CorridorContext {
                sections: &mut sections,
                rooms: &mut rooms,
                doors: &mut doors,
                halls: &mut halls,
                hall_cells: HashSet::new(),
                width: 60,
                height: 40,
            };
            carve(&mut ctx, SectionId(0));
        }
        crate::wall::build_all(&mut sections, &rooms, &doors, &halls);
        let grid = rasterize(&sections, &rooms, &doors, &halls, 60, 40);

        for room in &rooms {
            for p in room.rect.points() {
                assert_eq!(grid.get(p.x, p.y), TileLabel::Ground);
            }
        }
    }
}
