use std::collections::VecDeque;

use crate::position::Position;

/// Chronological record of one color's currently-on-board pieces: the front
/// is the oldest placement, the back the most recent. The game layer keeps
/// every entry pointing at a square that holds that color, rewriting rows in
/// place when disarray or offset moves pieces around.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionQueue {
    entries: VecDeque<Position>,
}

impl PositionQueue {
    pub fn new() -> Self {
        PositionQueue {
            entries: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a fresh placement at the newest end.
    pub fn push(&mut self, pos: Position) {
        self.entries.push_back(pos);
    }

    /// Remove and return the oldest placement, or `None` if no pieces of
    /// this color are on the board.
    pub fn pop_oldest(&mut self) -> Option<Position> {
        self.entries.pop_front()
    }

    /// Remove and return the newest placement, or `None` if no pieces of
    /// this color are on the board.
    pub fn pop_newest(&mut self) -> Option<Position> {
        self.entries.pop_back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Position> {
        self.entries.iter_mut()
    }
}
