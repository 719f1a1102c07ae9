use std::collections::VecDeque;

use crate::basic::{Normal, Vec3};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Segment {
    pub pos: Vec3,
    pub normal: Normal,
}

/// Ordered snake body, head at index 0, tail at the back.
///
/// No two segments share a position, with one exception: a pivot leaves
/// an adjacent pair on the same cell under different normals, and that
/// pair travels down the body until its tail half vacates.
pub struct Body {
    pub segments: VecDeque<Segment>,
}

impl Body {
    pub fn new(head: Segment) -> Self {
        let mut segments = VecDeque::new();
        segments.push_front(head);
        Self { segments }
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Push a new head; unless `grow`, the tail vacates in the same move
    pub fn advance(&mut self, new_head: Segment, grow: bool) {
        self.segments.push_front(new_head);
        if !grow {
            self.segments.pop_back();
        }
    }

    /// Whether moving the head to `(pos, normal)` hits the body.
    ///
    /// A position match at any index past 0 always collides. A match at
    /// index 0 collides only when the normals are equal too: turning in
    /// place at a fold (same cell, new face) is legal.
    ///
    /// Real execution passes `skip_tail` when the move doesn't eat (the
    /// tail cell vacates in the same tick); autopilot lookahead always
    /// skips the tail as a relaxation.
    pub fn collides_with(&self, pos: Vec3, normal: Normal, skip_tail: bool) -> bool {
        let checked = if skip_tail {
            self.segments.len().saturating_sub(1)
        } else {
            self.segments.len()
        };

        self.segments
            .iter()
            .take(checked)
            .enumerate()
            .any(|(i, seg)| seg.pos == pos && !(i == 0 && seg.normal != normal))
    }

    /// Sorted, deduplicated list of occupied positions
    pub fn occupied_cells(&self) -> Vec<Vec3> {
        let mut occupied: Vec<_> = self.segments.iter().map(|seg| seg.pos).collect();
        occupied.sort_unstable();
        occupied.dedup();
        occupied
    }
}
