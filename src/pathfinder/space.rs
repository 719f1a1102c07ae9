use std::collections::{HashSet, VecDeque};

use crate::basic::{Normal, Vec3};
use crate::pathfinder::tangent_steps;

// depth cap: a local open-space signal, not an exhaustive area measure
const MAX_CELLS: usize = 200;

/// Count distinct cells reachable from `(start_pos, start_normal)` over
/// the tangent graph, capped at `MAX_CELLS`. Used as a survival
/// tiebreaker. Same position-keyed dedup as the distance search.
pub fn reachable_space(
    start_pos: Vec3,
    start_normal: Normal,
    blocked: &HashSet<Vec3>,
    half_extent: i32,
) -> usize {
    let mut queue = VecDeque::new();
    queue.push_back((start_pos, start_normal));

    let mut visited = HashSet::new();
    visited.insert(start_pos);

    let mut count = 0;

    while count < MAX_CELLS {
        let (pos, normal) = match queue.pop_front() {
            Some(node) => node,
            None => break,
        };
        count += 1;

        for s in tangent_steps(pos, normal, half_extent) {
            if !visited.contains(&s.pos) && !blocked.contains(&s.pos) {
                visited.insert(s.pos);
                queue.push_back((s.pos, s.normal));
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_face_counts_its_cells() {
        // the position-keyed dedup confines the fill to the start face:
        // a 9x9 face for half-extent 4
        let count = reachable_space(Vec3::new(0, 0, 4), Normal::PosZ, &HashSet::new(), 4);
        assert_eq!(count, 81);
    }

    #[test]
    fn count_never_exceeds_the_cap() {
        // a 17x17 face has more cells than the cap
        let count = reachable_space(Vec3::new(0, 0, 8), Normal::PosZ, &HashSet::new(), 8);
        assert_eq!(count, MAX_CELLS);
    }

    #[test]
    fn blocked_cells_shrink_the_count() {
        // wall across the face at y = 0 leaves the y > 0 strip: 9 columns
        // by 4 rows, plus the start row itself is below the wall
        let blocked: HashSet<_> = (-4..=4).map(|x| Vec3::new(x, 0, 4)).collect();
        let count = reachable_space(Vec3::new(0, -2, 4), Normal::PosZ, &blocked, 4);
        // 9 wide, y in -4..=-1 -> 36 cells
        assert_eq!(count, 36);
    }
}
