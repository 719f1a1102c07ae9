use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    // resolution order for corner/edge cells, keep fixed
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

// integer triple, used both as a grid coordinate on the cube shell
// and as an axis-aligned unit vector (direction or normal)
#[derive(Eq, PartialEq, Copy, Clone, Hash, Add, Sub, Neg)]
pub struct Vec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0, 0, 0);

    // in the same order as Axis::ALL, positive before negative
    pub const CARDINALS: [Self; 6] = [
        Self::new(1, 0, 0),
        Self::new(-1, 0, 0),
        Self::new(0, 1, 0),
        Self::new(0, -1, 0),
        Self::new(0, 0, 1),
        Self::new(0, 0, -1),
    ];

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub const fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub const fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn set(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }

    /// Whether every axis lies within [-limit, limit]
    pub fn within(self, limit: i32) -> bool {
        self.x.abs() <= limit && self.y.abs() <= limit && self.z.abs() <= limit
    }
}

impl Debug for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}

impl PartialOrd for Vec3 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// lexicographic by x, y, z so that cell lists generated in nested
// x, y, z loops come out sorted
impl Ord for Vec3 {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.x.cmp(&other.x) {
            Ordering::Equal => match self.y.cmp(&other.y) {
                Ordering::Equal => self.z.cmp(&other.z),
                ord => ord,
            },
            ord => ord,
        }
    }
}

#[test]
fn test_cross_handedness() {
    let x = Vec3::new(1, 0, 0);
    let y = Vec3::new(0, 1, 0);
    let z = Vec3::new(0, 0, 1);

    let test_cross = [(x, y, z), (y, z, x), (z, x, y), (y, x, -z), (z, y, -x)];

    for &(a, b, expect) in &test_cross {
        assert_eq!(a.cross(b), expect);
    }
}

#[test]
fn test_vec_math() {
    let a = Vec3::new(1, -2, 4);
    let b = Vec3::new(0, 1, 0);

    assert_eq!(a + b, Vec3::new(1, -1, 4));
    assert_eq!(a - b, Vec3::new(1, -3, 4));
    assert_eq!(-b, Vec3::new(0, -1, 0));
    assert_eq!(a.dot(b), -2);
    assert!(a.within(4));
    assert!(!a.within(3));
}
