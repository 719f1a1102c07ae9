pub use distance::{shortest_distance, UNREACHABLE};
pub use space::reachable_space;

mod distance;
mod space;

use crate::basic::{Normal, Vec3};
use crate::transition::{step, Step};

/// The four cardinals tangent to `normal`, each advanced by one
/// transition step. This is the edge rule shared by the distance search
/// and the flood fill.
fn tangent_steps(pos: Vec3, normal: Normal, half_extent: i32) -> impl Iterator<Item = Step> {
    Vec3::CARDINALS
        .into_iter()
        .filter(move |&dir| normal.is_tangent(dir))
        .map(move |dir| step(pos, normal, dir, half_extent))
}

#[test]
fn test_tangent_steps_count() {
    // an interior face cell has 4 in-face neighbors
    let steps: Vec<_> = tangent_steps(Vec3::new(0, 0, 4), Normal::PosZ, 4).collect();
    assert_eq!(steps.len(), 4);
    for s in steps {
        assert_ne!(s.pos, Vec3::new(0, 0, 4));
        assert_eq!(s.normal, Normal::PosZ);
    }

    // an edge cell keeps 4 tangent dirs but one of them pivots in place
    let steps: Vec<_> = tangent_steps(Vec3::new(0, 4, 4), Normal::PosZ, 4).collect();
    assert_eq!(steps.len(), 4);
    let pivots = steps
        .iter()
        .filter(|s| s.pos == Vec3::new(0, 4, 4))
        .count();
    assert_eq!(pivots, 1);
}
