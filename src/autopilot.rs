use std::collections::HashSet;

use crate::basic::Vec3;
use crate::food::Food;
use crate::pathfinder::{reachable_space, shortest_distance, UNREACHABLE};
use crate::snake::Body;
use crate::transition;

// food-reachable scores dominate pure-survival scores
const REACHABLE_BASE: i64 = 1_000_000;
const DISTANCE_WEIGHT: i64 = 1_000;

/// One-ply move policy: score continuing straight, turning left and
/// turning right, pick the best.
///
/// Each surviving candidate is scored `REACHABLE_BASE - distance *
/// DISTANCE_WEIGHT + space` while the food is reachable, and by open
/// space alone once it isn't (pure survival). Ties keep the earlier
/// candidate, so the order forward, left, right breaks them. When all
/// three candidates are fatal the current direction is returned anyway;
/// no safe move exists at this lookahead depth.
pub fn next_dir(body: &Body, direction: Vec3, food: &Food, half_extent: i32) -> Vec3 {
    let head = *body.head();
    let normal = head.normal.as_vec();
    let left = normal.cross(direction);
    let right = direction.cross(normal);

    // the tail is assumed to vacate, a relaxation that also matches the
    // non-eating collision rule
    let blocked: HashSet<Vec3> = body
        .segments
        .iter()
        .take(body.len().saturating_sub(1))
        .map(|seg| seg.pos)
        .collect();

    let mut best_dir = direction;
    let mut best_score = i64::MIN;

    for candidate in [direction, left, right] {
        let s = transition::step(head.pos, head.normal, candidate, half_extent);

        if body.collides_with(s.pos, s.normal, true) {
            continue;
        }

        let dist = shortest_distance(s.pos, s.normal, food.pos, &blocked, half_extent);
        let space = reachable_space(s.pos, s.normal, &blocked, half_extent);

        let score = if dist < UNREACHABLE {
            REACHABLE_BASE - dist as i64 * DISTANCE_WEIGHT + space as i64
        } else {
            space as i64
        };

        if score > best_score {
            best_score = score;
            best_dir = candidate;
        }
    }

    best_dir
}
