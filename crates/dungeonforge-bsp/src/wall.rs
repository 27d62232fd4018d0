use dungeonforge_geometry::Rect;

use crate::corridor::Hall;
use crate::room::{Door, Room};
use crate::section::Section;

/// Builds the wall rectangles for every room and every hall, splicing
/// gaps for doors, and records them on the owning [`Section`].
pub(crate) fn build_all(sections: &mut [Section], rooms: &[Room], doors: &[Door], halls: &[Hall]) {
    for idx in 0..sections.len() {
        if !sections[idx].is_leaf() {
            continue;
        }
        let Some(room_id) = sections[idx].room else {
            continue;
        };
        let room = rooms[room_id.0].rect;
        let door_points: Vec<_> = sections[idx]
            .doors
            .iter()
            .map(|d| doors[d.0].point)
            .collect();
        sections[idx].walls = room_walls(room, &door_points);
    }

    for idx in 0..sections.len() {
        let hall_ids = sections[idx].halls.clone();
        for hall_id in hall_ids {
            let hall = &halls[hall_id.0];
            sections[idx].walls.extend(hall_strips(hall.rect));
        }
    }
}

fn room_walls(room: Rect, doors: &[dungeonforge_geometry::Point]) -> Vec<Rect> {
    let mut walls = Vec::new();

    let mut left_doors: Vec<i32> = doors
        .iter()
        .filter(|d| d.x == room.x - 1)
        .map(|d| d.y)
        .collect();
    left_doors.sort_unstable();
    walls.extend(splice_vertical(
        Rect::new_unchecked(room.x - 1, room.y - 2, 1, room.height + 3),
        &left_doors,
    ));

    let mut right_doors: Vec<i32> = doors
        .iter()
        .filter(|d| d.x == room.right() + 1)
        .map(|d| d.y)
        .collect();
    right_doors.sort_unstable();
    walls.extend(splice_vertical(
        Rect::new_unchecked(room.right() + 1, room.y - 2, 1, room.height + 3),
        &right_doors,
    ));

    let mut top_doors: Vec<i32> = doors
        .iter()
        .filter(|d| d.y == room.y - 1)
        .map(|d| d.x)
        .collect();
    top_doors.sort_unstable();
    walls.extend(splice_horizontal(
        Rect::new_unchecked(room.x - 1, room.y - 2, room.width + 2, 2),
        &top_doors,
    ));

    let mut bottom_doors: Vec<i32> = doors
        .iter()
        .filter(|d| d.y == room.bottom() + 1)
        .map(|d| d.x)
        .collect();
    bottom_doors.sort_unstable();
    walls.extend(splice_horizontal(
        Rect::new_unchecked(room.x - 1, room.bottom() + 1, room.width + 2, 1),
        &bottom_doors,
    ));

    walls
}

fn hall_strips(hall: Rect) -> Vec<Rect> {
    if hall.width == 1 {
        vec![
            Rect::new_unchecked(hall.x - 1, hall.y, 1, hall.height),
            Rect::new_unchecked(hall.x + 1, hall.y, 1, hall.height),
        ]
    } else {
        vec![
            Rect::new_unchecked(hall.x, hall.y - 2, hall.width, 2),
            Rect::new_unchecked(hall.x, hall.y + 1, hall.width, 1),
        ]
    }
}

/// Splits `strip` (a 1-wide, variable-height vertical run) around each
/// door's y coordinate, producing the strip above and below each gap.
fn splice_vertical(strip: Rect, door_ys: &[i32]) -> Vec<Rect> {
    let mut strips = vec![strip];
    for &dy in door_ys {
        let Some(last) = strips.pop() else { break };
        let above_height = dy - last.y;
        let below_y = dy + 1;
        let below_height = last.bottom() - dy;
        if above_height > 0 {
            strips.push(Rect::new_unchecked(last.x, last.y, 1, above_height));
        }
        if below_height > 0 {
            strips.push(Rect::new_unchecked(last.x, below_y, 1, below_height));
        }
    }
    strips
}

/// Splits `strip` (a variable-width, fixed-height horizontal run) around
/// each door's x coordinate.
fn splice_horizontal(strip: Rect, door_xs: &[i32]) -> Vec<Rect> {
    let mut strips = vec![strip];
    for &dx in door_xs {
        let Some(last) = strips.pop() else { break };
        let left_width = dx - last.x;
        let right_x = dx + 1;
        let right_width = last.right() - dx;
        if left_width > 0 {
            strips.push(Rect::new_unchecked(last.x, last.y, left_width, last.height));
        }
        if right_width > 0 {
            strips.push(Rect::new_unchecked(right_x, last.y, right_width, last.height));
        }
    }
    strips
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeonforge_geometry::Point;

    #[test]
    fn splice_vertical_opens_a_gap_at_the_door() {
        let strip = Rect::new(0, 0, 1, 10).unwrap();
        let strips = splice_vertical(strip, &[4]);
        assert_eq!(strips.len(), 2);
        assert!(strips.iter().all(|s| !s.contains(Point::new_unchecked(0, 4))));
    }

    #[test]
    fn splice_horizontal_opens_a_gap_at_the_door() {
        let strip = Rect::new(0, 0, 10, 2).unwrap();
        let strips = splice_horizontal(strip, &[4]);
        assert_eq!(strips.len(), 2);
        assert!(strips.iter().all(|s| !s.contains(Point::new_unchecked(4, 0))));
    }

    #[test]
    fn room_walls_splices_around_a_door() {
        let room = Rect::new(10, 10, 6, 6).unwrap();
        let door = Point::new_unchecked(12, room.y - 1);
        let walls = room_walls(room, &[door]);
        assert!(walls.iter().all(|w| !w.contains(door)));
    }
}
