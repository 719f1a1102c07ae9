use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use itertools::iproduct;

use crate::basic::{Axis, Normal, Vec3};

lazy_static! {
    // cell enumeration is identical for every game with the same
    // half-extent, compute it once per process
    static ref CELL_CACHE: Mutex<HashMap<i32, Arc<[Vec3]>>> = Mutex::new(HashMap::new());
}

fn enumerate_cells(half_extent: i32) -> Arc<[Vec3]> {
    let h = half_extent;
    // ascending iteration order produces the cells already Ord-sorted
    iproduct!(-h..=h, -h..=h, -h..=h)
        .filter(|&(x, y, z)| x.abs() == h || y.abs() == h || z.abs() == h)
        .map(|(x, y, z)| Vec3::new(x, y, z))
        .collect()
}

/// The shell of a cube with side length `2 * half_extent + 1`. A grid
/// coordinate is a surface cell iff it is within bounds and at least one
/// of its axes sits at the limit.
#[derive(Clone)]
pub struct Surface {
    half_extent: i32,
    cells: Arc<[Vec3]>,
}

impl Surface {
    pub fn new(half_extent: i32) -> Self {
        let cells = CELL_CACHE
            .lock()
            .unwrap()
            .entry(half_extent)
            .or_insert_with(|| enumerate_cells(half_extent))
            .clone();
        Self { half_extent, cells }
    }

    pub fn half_extent(&self) -> i32 {
        self.half_extent
    }

    /// All surface cells in ascending `Ord` order
    pub fn cells(&self) -> &[Vec3] {
        &self.cells
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Vec3) -> bool {
        let h = self.half_extent;
        pos.within(h) && (pos.x.abs() == h || pos.y.abs() == h || pos.z.abs() == h)
    }

    /// Face normal for a bare surface position. Corner and edge cells have
    /// several axes at the limit, the first one in x, y, z order wins; this
    /// tie-break is arbitrary but must match everywhere a normal is derived
    /// from a position alone
    pub fn normal_at(&self, pos: Vec3) -> Normal {
        let h = self.half_extent;
        for axis in Axis::ALL {
            let value = pos.get(axis);
            if value.abs() == h {
                return Normal::from_axis(axis, value.signum());
            }
        }
        // interior coordinate, no axis at the limit
        Normal::PosZ
    }
}

#[test]
fn test_cell_count() {
    // (2h+1)^3 - (2h-1)^3
    for (h, expect) in [(1, 26), (2, 98), (3, 218), (4, 386)] {
        let surface = Surface::new(h);
        assert_eq!(surface.cell_count(), expect);
    }
}

#[test]
fn test_cells_sorted_and_on_surface() {
    let surface = Surface::new(4);
    let cells = surface.cells();
    for pair in cells.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    for &cell in cells {
        assert!(surface.contains(cell));
    }
    assert!(!surface.contains(Vec3::ZERO));
    assert!(!surface.contains(Vec3::new(5, 0, 0)));
}

#[test]
fn test_normal_precedence() {
    let surface = Surface::new(4);

    let test_normals = [
        ((4, 0, 0), Normal::PosX),
        ((-4, 0, 0), Normal::NegX),
        ((0, 4, 0), Normal::PosY),
        ((0, 0, -4), Normal::NegZ),
        // x beats y and z at corners and edges
        ((4, 4, 0), Normal::PosX),
        ((-4, 4, 4), Normal::NegX),
        ((2, -4, 4), Normal::NegY),
        ((0, -4, -4), Normal::NegY),
    ];

    for ((x, y, z), expect) in test_normals {
        assert_eq!(surface.normal_at(Vec3::new(x, y, z)), expect, "{:?}", (x, y, z));
    }
}
