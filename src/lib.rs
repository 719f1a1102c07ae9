//! Snake on the surface of a hollow cube.
//!
//! The playing field is the shell of an axis-aligned cube of integer
//! cells. The snake crawls across faces and folds over edges; an
//! autopilot can drive it with a greedy one-ply policy backed by BFS.
//! [`game::Game`] is the entry point; hosts pump it with
//! [`game::Game::update`] and render from [`game::Snapshot`]s.

#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

pub mod autopilot;
pub mod basic;
pub mod food;
pub mod game;
pub mod pathfinder;
pub mod snake;
pub mod surface;
pub mod transition;

pub use game::{Game, Prefs, PrefsError, Snapshot, Status};
