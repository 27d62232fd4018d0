use crate::corridor::Hall;
use crate::room::Room;
use crate::section::Section;

/// Whether every room is reachable from room 0 by walking the halls
/// recorded on each room's owning section.
///
/// An empty room list is trivially connected.
pub(crate) fn is_connected(sections: &[Section], rooms: &[Room], halls: &[Hall]) -> bool {
    if rooms.is_empty() {
        return true;
    }

    let mut visited = vec![false; rooms.len()];
    let mut stack = vec![0usize];
    visited[0] = true;

    while let Some(r) = stack.pop() {
        let section = rooms[r].section;
        for hall_id in &sections[section.0].halls {
            let hall = &halls[hall_id.0];
            let other = if hall.rooms.0 .0 == r {
                hall.rooms.1 .0
            } else if hall.rooms.1 .0 == r {
                hall.rooms.0 .0
            } else {
                continue;
            };
            if !visited[other] {
                visited[other] = true;
                stack.push(other);
            }
        }
    }

    visited.into_iter().all(|v| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corridor::{carve, CorridorContext};
    use crate::ids::SectionId;
    use crate::room::place_rooms;
    use crate::section::partition;
    use dungeonforge_geometry::Rect;
    use dungeonforge_random::Rng;
    use std::collections::HashSet;

    #[test]
    fn single_room_is_connected() {
        let root = Rect::new(0, 0, 20, 20).unwrap();
        let mut rng = Rng::with_seed(2);
        let mut sections = partition(root, 6, 15, 3, &mut rng);
        let rooms = place_rooms(&mut sections, &mut rng);
        let halls = Vec::new();
        assert!(is_connected(&sections, &rooms, &halls));
    }

    #[test]
    fn disconnected_rooms_are_detected() {
        let root = Rect::new(0, 0, 80, 60).unwrap();
        let mut rng = Rng::with_seed(9);
        let mut sections = partition(root, 6, 15, 3, &mut rng);
        let mut rooms = place_rooms(&mut sections, &mut rng);
        // No corridors carved: more than one room means disconnected.
        let halls = Vec::new();
        if rooms.len() > 1 {
            assert!(!is_connected(&sections, &rooms, &halls));
        }

        let mut doors = Vec::new();
        let mut halls_mut = Vec::new();
        {
            let mut ctx = CorridorContext {
                sections: &mut sections,
                rooms: &mut rooms,
                doors: &mut doors,
                halls: &mut halls_mut,
                hall_cells: HashSet::new(),
                width: 80,
                height: 60,
            };
            carve(&mut ctx, SectionId(0));
        }
    }
}
