use rand::seq::IteratorRandom;
use rand::Rng;

use crate::basic::{Normal, Vec3};
use crate::snake::Body;
use crate::surface::Surface;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Food {
    pub pos: Vec3,
    pub normal: Normal,
}

impl Food {
    // used when no free cell exists; normal play never gets here because
    // the win threshold sits below surface capacity
    pub const FALLBACK: Self = Self {
        pos: Vec3::ZERO,
        normal: Normal::PosZ,
    };
}

/// Surface cells not occupied by the body, in ascending order.
/// `occupied_cells` must be sorted (see [`Body::occupied_cells`]).
pub fn free_cells<'a>(
    surface: &'a Surface,
    occupied_cells: &'a [Vec3],
) -> impl Iterator<Item = Vec3> + 'a {
    surface
        .cells()
        .iter()
        .copied()
        .filter(move |cell| occupied_cells.binary_search(cell).is_err())
}

/// Uniformly pick a free surface cell for the next food, resolving its
/// normal with the same x, y, z precedence used everywhere else
pub fn spawn_food(surface: &Surface, body: &Body, rng: &mut impl Rng) -> Food {
    let occupied_cells = body.occupied_cells();

    match free_cells(surface, &occupied_cells).choose(rng) {
        Some(pos) => Food {
            pos,
            normal: surface.normal_at(pos),
        },
        None => {
            eprintln!("warning: no free surface cell left for food");
            Food::FALLBACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Segment;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fresh_game_leaves_all_but_one_cell_free() {
        let surface = Surface::new(4);
        let body = Body::new(Segment {
            pos: Vec3::new(0, -2, 4),
            normal: Normal::PosZ,
        });

        assert_eq!(surface.cell_count(), 386);
        let free = free_cells(&surface, &body.occupied_cells()).count();
        assert_eq!(free, 385);
    }

    #[test]
    fn food_never_spawns_on_the_body() {
        let surface = Surface::new(2);
        let mut body = Body::new(Segment {
            pos: Vec3::new(0, -1, 2),
            normal: Normal::PosZ,
        });
        body.advance(
            Segment {
                pos: Vec3::new(0, 0, 2),
                normal: Normal::PosZ,
            },
            true,
        );

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let food = spawn_food(&surface, &body, &mut rng);
            assert!(surface.contains(food.pos));
            assert!(!body.collides_with(food.pos, food.normal, false));
            assert_eq!(food.normal, surface.normal_at(food.pos));
        }
    }
}
