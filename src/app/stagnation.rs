use std::collections::VecDeque;

use crate::model::grid::Grid;

/// Boards remembered when looking for a repeat.
pub const HISTORY_LEN: usize = 10;

/// Detects boards that repeat within the last [`HISTORY_LEN`] generations.
///
/// Still lifes (including an empty board) repeat with period 1, blinkers with
/// period 2. Longer cycles go unnoticed.
#[derive(Debug, Default)]
pub struct StagnationDetector {
    history: VecDeque<String>,
}

impl StagnationDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `grid` and returns the cycle period if it was seen recently.
    pub fn observe(&mut self, grid: &Grid) -> Option<usize> {
        let fingerprint = grid.fingerprint();
        let period = self
            .history
            .iter()
            .rev()
            .position(|seen| *seen == fingerprint)
            .map(|age| age + 1);
        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(fingerprint);
        period
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}
