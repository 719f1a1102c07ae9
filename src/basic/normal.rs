use std::ops::Neg;

use crate::basic::{Axis, Vec3};
use Normal::*;

// face normals of the cube, one per face
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Normal {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Normal {
    pub fn iter() -> impl Iterator<Item = Self> {
        [PosX, NegX, PosY, NegY, PosZ, NegZ].iter().copied()
    }

    pub const fn as_vec(self) -> Vec3 {
        match self {
            PosX => Vec3::new(1, 0, 0),
            NegX => Vec3::new(-1, 0, 0),
            PosY => Vec3::new(0, 1, 0),
            NegY => Vec3::new(0, -1, 0),
            PosZ => Vec3::new(0, 0, 1),
            NegZ => Vec3::new(0, 0, -1),
        }
    }

    /// `sign` must be nonzero; its sign picks the face on `axis`
    pub const fn from_axis(axis: Axis, sign: i32) -> Self {
        match (axis, sign > 0) {
            (Axis::X, true) => PosX,
            (Axis::X, false) => NegX,
            (Axis::Y, true) => PosY,
            (Axis::Y, false) => NegY,
            (Axis::Z, true) => PosZ,
            (Axis::Z, false) => NegZ,
        }
    }

    pub fn from_vec(v: Vec3) -> Option<Self> {
        Self::iter().find(|normal| normal.as_vec() == v)
    }

    /// Integer tangency test: `dir` lies in the face plane iff its
    /// component along the normal is zero
    pub const fn is_tangent(self, dir: Vec3) -> bool {
        self.as_vec().dot(dir) == 0
    }
}

impl Neg for Normal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            PosX => NegX,
            NegX => PosX,
            PosY => NegY,
            NegY => PosY,
            PosZ => NegZ,
            NegZ => PosZ,
        }
    }
}

#[test]
fn test_tangency() {
    // each normal is tangent to exactly the 4 cardinals on other axes
    for normal in Normal::iter() {
        let tangent_count = Vec3::CARDINALS
            .iter()
            .filter(|&&dir| normal.is_tangent(dir))
            .count();
        assert_eq!(tangent_count, 4);
        assert!(!normal.is_tangent(normal.as_vec()));
        assert!(!normal.is_tangent((-normal).as_vec()));
    }
}

#[test]
fn test_from_vec_roundtrip() {
    for normal in Normal::iter() {
        assert_eq!(Normal::from_vec(normal.as_vec()), Some(normal));
    }
    assert_eq!(Normal::from_vec(Vec3::ZERO), None);
    assert_eq!(Normal::from_vec(Vec3::new(1, 1, 0)), None);
}
