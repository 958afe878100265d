use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Revealed,
    Flagged,
    Questioned,
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Flagged | Self::Questioned)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Grid entry owned by the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_mine: bool,
    pub state: CellState,
    /// Set the first time the cell becomes revealed, kept even if a mark later covers it.
    pub uncovered: bool,
}

impl Cell {
    pub(crate) fn reveal(&mut self) -> bool {
        self.state = CellState::Revealed;
        !core::mem::replace(&mut self.uncovered, true)
    }
}
