pub use normal::Normal;
pub use vec3::{Axis, Vec3};

mod normal;
mod vec3;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    Left,
    Right,
}
