use static_assertions::assert_impl_all;

use crate::basic::Vec3;
use crate::food::Food;
use crate::game::Status;
use crate::snake::Segment;

/// Immutable view of the game published after every state change.
/// Presentation layers re-render from this; they never get write access
/// to the live state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Snapshot {
    /// Head first, tail last
    pub segments: Vec<Segment>,
    pub food: Food,
    pub direction: Vec3,
    pub score: u32,
    pub high_score: u32,
    pub status: Status,
    /// Whole seconds spent in Playing
    pub elapsed_time: u64,
}

// snapshots get handed to presentation code, possibly on other threads
assert_impl_all!(Snapshot: Send, Sync);
