use dungeonforge_geometry::{Point, Rect};
use dungeonforge_random::Rng;

use crate::ids::{DoorId, HallId, RoomId, SectionId};

/// Which axis an internal section was cut along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    /// Cut perpendicular to the y axis: children stack top and bottom.
    Horizontal,
    /// Cut perpendicular to the x axis: children sit side by side.
    Vertical,
}

/// A node of the BSP tree.
///
/// Leaves carry at most one room; internal nodes carry none and instead
/// reference their two children. Doors and halls are recorded on every
/// leaf section they touch, which is what lets the connectivity checker
/// walk the tree without a separate graph structure.
#[derive(Debug, Clone)]
pub struct Section {
    /// The rectangle this section covers.
    pub bounds: Rect,
    pub(crate) min_room_size: i32,
    pub(crate) max_room_size: i32,
    pub(crate) margin: i32,
    pub(crate) split: Option<SplitDirection>,
    pub(crate) left_child: Option<SectionId>,
    pub(crate) right_child: Option<SectionId>,
    /// The room this leaf owns, if any.
    pub room: Option<RoomId>,
    /// Doors opening onto this section's room, in placement order.
    pub doors: Vec<DoorId>,
    /// Halls that cross this section, in the order they were carved.
    pub halls: Vec<HallId>,
    /// Wall rectangles derived from this section's room and halls.
    pub walls: Vec<Rect>,
}

impl Section {
    fn new_leaf(bounds: Rect, min_room_size: i32, max_room_size: i32, margin: i32) -> Self {
        Self {
            bounds,
            min_room_size,
            max_room_size,
            margin,
            split: None,
            left_child: None,
            right_child: None,
            room: None,
            doors: Vec::new(),
            halls: Vec::new(),
            walls: Vec::new(),
        }
    }

    /// Whether this section is a leaf (has no children yet).
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left_child.is_none()
    }

    #[cfg(test)]
    pub(crate) fn new_leaf_for_test(bounds: Rect, min_room_size: i32, max_room_size: i32, margin: i32) -> Self {
        Self::new_leaf(bounds, min_room_size, max_room_size, margin)
    }

    fn min_size(&self) -> i32 {
        self.min_room_size + 2 * self.margin
    }

    fn max_size(&self) -> i32 {
        self.max_room_size + 2 * self.margin
    }
}

/// Builds the BSP tree for `root_bounds` by repeatedly sweeping every
/// still-leaf section and probabilistically splitting it, until a full
/// sweep produces no further splits.
///
/// This is a worklist/pass loop, not a fixed-depth recursion: a leaf that
/// is eligible but whose geometry can't support a cut simply survives to
/// the next pass, where it gets a fresh eligibility roll. Children created
/// mid-sweep are visited within the same sweep, exactly as if the worklist
/// were a single growing queue.
pub(crate) fn partition(
    root_bounds: Rect,
    min_room_size: i32,
    max_room_size: i32,
    margin: i32,
    rng: &mut Rng,
) -> Vec<Section> {
    let mut arena = vec![Section::new_leaf(
        root_bounds,
        min_room_size,
        max_room_size,
        margin,
    )];

    loop {
        let mut did_split = false;
        let mut i = 0;
        while i < arena.len() {
            if arena[i].is_leaf() {
                let oversized =
                    arena[i].bounds.width > arena[i].max_size() || arena[i].bounds.height > arena[i].max_size();
                let eligible = oversized || rng.chance(0.75);
                if eligible && try_split(&mut arena, i, rng) {
                    did_split = true;
                }
            }
            i += 1;
        }
        if !did_split {
            break;
        }
    }

    arena
}

/// Attempts to split the leaf at `idx` into two children, pushing them
/// onto the arena and wiring up `left_child`/`right_child` on success.
fn try_split(arena: &mut Vec<Section>, idx: usize, rng: &mut Rng) -> bool {
    let section = &arena[idx];
    let bounds = section.bounds;
    let min_size = section.min_size();
    let max_size = section.max_size();
    let (min_room_size, max_room_size, margin) =
        (section.min_room_size, section.max_room_size, section.margin);

    let ratio_tall = bounds.height as f32 / bounds.width as f32;
    let ratio_wide = bounds.width as f32 / bounds.height as f32;
    let horizontal = if ratio_tall >= 1.25 {
        true
    } else if ratio_wide >= 1.25 {
        false
    } else {
        rng.chance(0.5)
    };

    let span = if horizontal { bounds.height } else { bounds.width };
    let max_cut = span - min_size;
    if max_cut <= min_size {
        return false;
    }
    if max_cut <= max_size && !rng.chance(0.1) {
        return false;
    }

    let cut = rng.range(min_size, max_cut);

    let (left_bounds, right_bounds) = if horizontal {
        (
            Rect::new_unchecked(bounds.x, bounds.y, bounds.width, cut),
            Rect::new_unchecked(bounds.x, bounds.y + cut, bounds.width, bounds.height - cut),
        )
    } else {
        (
            Rect::new_unchecked(bounds.x, bounds.y, cut, bounds.height),
            Rect::new_unchecked(bounds.x + cut, bounds.y, bounds.width - cut, bounds.height),
        )
    };

    let left = Section::new_leaf(left_bounds, min_room_size, max_room_size, margin);
    let right = Section::new_leaf(right_bounds, min_room_size, max_room_size, margin);
    let left_id = SectionId(arena.len());
    arena.push(left);
    let right_id = SectionId(arena.len());
    arena.push(right);

    let section = &mut arena[idx];
    section.split = Some(if horizontal {
        SplitDirection::Horizontal
    } else {
        SplitDirection::Vertical
    });
    section.left_child = Some(left_id);
    section.right_child = Some(right_id);
    true
}

/// Finds the leaf section containing `(x, y)`, descending from `root`.
///
/// # Panics
///
/// Panics in debug builds if `(x, y)` falls outside `root`'s bounds.
pub(crate) fn leaf_at(arena: &[Section], root: SectionId, x: i32, y: i32) -> SectionId {
    let point = Point::new_unchecked(x, y);
    debug_assert!(arena[root.0].bounds.contains(point));
    let section = &arena[root.0];
    match (section.left_child, section.right_child) {
        (Some(left), Some(right)) => {
            if arena[left.0].bounds.contains(point) {
                leaf_at(arena, left, x, y)
            } else {
                leaf_at(arena, right, x, y)
            }
        }
        _ => root,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_covers_root_bounds_with_leaves() {
        let root = Rect::new(0, 0, 60, 60).unwrap();
        let mut rng = Rng::with_seed(1);
        let arena = partition(root, 6, 15, 3, &mut rng);

        let leaves: Vec<_> = arena.iter().filter(|s| s.is_leaf()).collect();
        assert!(leaves.len() > 1, "expected the root to split at least once");
        for leaf in &leaves {
            assert!(leaf.bounds.width >= leaf.min_size() - 2 * leaf.margin);
        }
    }

    #[test]
    fn leaf_at_finds_a_real_leaf() {
        let root = Rect::new(0, 0, 40, 40).unwrap();
        let mut rng = Rng::with_seed(7);
        let arena = partition(root, 6, 15, 3, &mut rng);
        let leaf_id = leaf_at(&arena, SectionId(0), 5, 5);
        assert!(arena[leaf_id.0].is_leaf());
        assert!(arena[leaf_id.0].bounds.contains(Point::new(5, 5).unwrap()));
    }

    #[test]
    fn small_bounds_never_split() {
        let root = Rect::new(0, 0, 10, 10).unwrap();
        let mut rng = Rng::with_seed(3);
        let arena = partition(root, 6, 15, 3, &mut rng);
        assert_eq!(arena.len(), 1);
        assert!(arena[0].is_leaf());
    }
}
