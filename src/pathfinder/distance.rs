use std::collections::{HashSet, VecDeque};

use crate::basic::{Normal, Vec3};
use crate::pathfinder::tangent_steps;

/// Sentinel distance for "no path found"
pub const UNREACHABLE: usize = 9999;

// hard cap on dequeued nodes, bounds worst-case work per tick
const MAX_EXPANSIONS: usize = 1000;

struct Node {
    pos: Vec3,
    normal: Normal,
    dist: usize,
}

/// Breadth-first hop count from `(start_pos, start_normal)` to
/// `target_pos` over the tangent graph, avoiding `blocked` positions.
///
/// The visited set is keyed by position only: two orientations at the
/// same edge or corner cell count as one node. This under-reports
/// connectivity across folds and is intentional. The walker that
/// consumes these distances crosses folds through its own pivot steps,
/// so its lookahead is seeded on the far side of the fold already.
pub fn shortest_distance(
    start_pos: Vec3,
    start_normal: Normal,
    target_pos: Vec3,
    blocked: &HashSet<Vec3>,
    half_extent: i32,
) -> usize {
    let mut queue = VecDeque::new();
    queue.push_back(Node {
        pos: start_pos,
        normal: start_normal,
        dist: 0,
    });

    let mut visited = HashSet::new();
    visited.insert(start_pos);

    let mut expansions = 0;

    while let Some(node) = queue.pop_front() {
        expansions += 1;
        if expansions > MAX_EXPANSIONS {
            return UNREACHABLE;
        }

        if node.pos == target_pos {
            return node.dist;
        }

        for s in tangent_steps(node.pos, node.normal, half_extent) {
            if !visited.contains(&s.pos) && !blocked.contains(&s.pos) {
                visited.insert(s.pos);
                queue.push_back(Node {
                    pos: s.pos,
                    normal: s.normal,
                    dist: node.dist + 1,
                });
            }
        }
    }

    UNREACHABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_blocks() -> HashSet<Vec3> {
        HashSet::new()
    }

    #[test]
    fn distance_to_self_is_zero() {
        let blocked: HashSet<_> = [Vec3::new(1, 0, 4)].into_iter().collect();
        let pos = Vec3::new(0, 0, 4);
        assert_eq!(shortest_distance(pos, Normal::PosZ, pos, &blocked, 4), 0);
    }

    #[test]
    fn distance_within_face_is_manhattan() {
        let test_distances = [
            ((0, 0, 4), (0, 3, 4), 3),
            ((0, 0, 4), (2, -1, 4), 3),
            ((-4, -4, 4), (4, 4, 4), 16),
        ];

        for ((x1, y1, z1), (x2, y2, z2), expect) in test_distances {
            let dist = shortest_distance(
                Vec3::new(x1, y1, z1),
                Normal::PosZ,
                Vec3::new(x2, y2, z2),
                &no_blocks(),
                4,
            );
            assert_eq!(dist, expect);
        }
    }

    #[test]
    fn boxed_in_start_is_unreachable() {
        let blocked: HashSet<_> = [
            Vec3::new(1, 0, 4),
            Vec3::new(-1, 0, 4),
            Vec3::new(0, 1, 4),
            Vec3::new(0, -1, 4),
        ]
        .into_iter()
        .collect();

        let dist = shortest_distance(
            Vec3::new(0, 0, 4),
            Normal::PosZ,
            Vec3::new(0, 3, 4),
            &blocked,
            4,
        );
        assert_eq!(dist, UNREACHABLE);
    }

    #[test]
    fn search_is_confined_to_the_entry_face() {
        // (0, 4, 0) lies in the interior of the +y face; from the +z face
        // every crossing is a pivot in place, which the position-keyed
        // visited set rejects
        let dist = shortest_distance(
            Vec3::new(0, 0, 4),
            Normal::PosZ,
            Vec3::new(0, 4, 0),
            &no_blocks(),
            4,
        );
        assert_eq!(dist, UNREACHABLE);

        // the same target is found from an orientation on its own face
        let dist = shortest_distance(
            Vec3::new(0, 4, 4),
            Normal::PosY,
            Vec3::new(0, 4, 0),
            &no_blocks(),
            4,
        );
        assert_eq!(dist, 4);
    }

    #[test]
    fn boundary_cells_are_visible_from_both_faces() {
        // an edge cell belongs to both adjacent faces positionally
        let dist = shortest_distance(
            Vec3::new(0, 0, 4),
            Normal::PosZ,
            Vec3::new(0, 4, 4),
            &no_blocks(),
            4,
        );
        assert_eq!(dist, 4);
    }
}
