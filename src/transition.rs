use crate::basic::{Axis, Normal, Vec3};

/// Result of advancing a head orientation by one unit step
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Step {
    pub pos: Vec3,
    pub normal: Normal,
    pub dir: Vec3,
}

/// Advance `(pos, normal, dir)` by one unit step across the cube shell.
///
/// `dir` must be a cardinal unit vector tangent to `normal`. Within a face
/// the triple simply translates. When the candidate position leaves the
/// grid, exactly one axis exceeds the limit by exactly 1; that axis and its
/// sign name the face being entered. The exceeded axis is clamped back to
/// the shared edge and the heading pivots to the negated old normal, so the
/// head spends one tick turning in place at the fold instead of jumping a
/// cell onto the new face.
pub fn step(pos: Vec3, normal: Normal, dir: Vec3, half_extent: i32) -> Step {
    let mut next_pos = pos + dir;
    let mut next_normal = normal;
    let mut next_dir = dir;

    for axis in Axis::ALL {
        let value = next_pos.get(axis);
        if value.abs() > half_extent {
            let sign = value.signum();
            let new_normal = Normal::from_axis(axis, sign);

            // cannot occur for tangent dirs
            if new_normal == normal {
                continue;
            }

            next_normal = new_normal;
            next_dir = -normal.as_vec();
            next_pos.set(axis, sign * half_extent);
            break;
        }
    }

    Step {
        pos: next_pos,
        normal: next_normal,
        dir: next_dir,
    }
}

#[cfg(test)]
use crate::surface::Surface;

#[test]
fn test_step_within_face() {
    let s = step(Vec3::new(0, -2, 4), Normal::PosZ, Vec3::new(0, 1, 0), 4);
    assert_eq!(
        s,
        Step {
            pos: Vec3::new(0, -1, 4),
            normal: Normal::PosZ,
            dir: Vec3::new(0, 1, 0),
        }
    );
}

#[test]
fn test_step_pivots_at_edge() {
    // walking up the +z face, the step past y = 4 clamps onto the shared
    // edge, adopts the +y face and heads away from the old face
    let s = step(Vec3::new(0, 4, 4), Normal::PosZ, Vec3::new(0, 1, 0), 4);
    assert_eq!(
        s,
        Step {
            pos: Vec3::new(0, 4, 4),
            normal: Normal::PosY,
            dir: Vec3::new(0, 0, -1),
        }
    );

    // the tick after the pivot is an ordinary in-face step
    let s2 = step(s.pos, s.normal, s.dir, 4);
    assert_eq!(
        s2,
        Step {
            pos: Vec3::new(0, 4, 3),
            normal: Normal::PosY,
            dir: Vec3::new(0, 0, -1),
        }
    );
}

#[test]
fn test_step_stays_on_surface() {
    // from every surface cell, every tangent cardinal leads to a surface cell
    let surface = Surface::new(3);
    for &pos in surface.cells() {
        let normal = surface.normal_at(pos);
        for &dir in &Vec3::CARDINALS {
            if !normal.is_tangent(dir) {
                continue;
            }
            let s = step(pos, normal, dir, surface.half_extent());
            assert!(
                surface.contains(s.pos),
                "stepped off the surface: {:?} + {:?} -> {:?}",
                pos,
                dir,
                s.pos
            );
            assert!(s.normal.is_tangent(s.dir));
        }
    }
}
