//! Minesweeper board engine: hidden mine placement, flood reveal, adjacency
//! counts, flag marks and win/loss detection.
//!
//! Rendering and input live elsewhere. A front end owns a [`Board`], polls
//! [`Board::cell_state`] to draw it, forwards clicks to [`Board::reveal`] and
//! [`Board::toggle_mark`], and checks [`Board::did_win`] / [`Board::did_lose`]
//! after every reveal.

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// How the remaining-safe-cells counter is driven by reveals.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafeCellAccounting {
    /// One decrement per safe cell, the first time it is revealed.
    #[default]
    PerCell,
    /// One decrement per flood-revealed neighbor plus one per `reveal` call,
    /// whatever the target was. Reproduces the arithmetic of older boards.
    Legacy,
}

/// What [`Board::toggle_mark`] cycles through.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkMode {
    /// Flagged goes back to hidden, anything else becomes flagged.
    #[default]
    Flag,
    /// Like [`MarkMode::Flag`] but a flag turns into a question mark first.
    FlagQuestion,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
    pub accounting: SafeCellAccounting,
    pub marking: MarkMode,
}

impl BoardConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
            accounting: SafeCellAccounting::PerCell,
            marking: MarkMode::Flag,
        }
    }

    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    pub const fn with_accounting(self, accounting: SafeCellAccounting) -> Self {
        Self { accounting, ..self }
    }

    pub const fn with_marking(self, marking: MarkMode) -> Self {
        Self { marking, ..self }
    }

    /// Dimensions must be positive and at least one cell must stay free of mines.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0
            || self.height <= 0
            || self.mines < 0
            || self.mines >= self.total_cells()
        {
            return Err(BoardError::InvalidConfiguration {
                width: self.width,
                height: self.height,
                mines: self.mines,
            });
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(9, 9, 10)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_beginner_board() {
        let config = BoardConfig::default();
        assert_eq!(config.size(), (9, 9));
        assert_eq!(config.mines, 10);
        assert_eq!(config.safe_cells(), 71);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_bad_dimensions_and_mine_counts() {
        for (w, h, m) in [(0, 5, 1), (5, 0, 1), (-1, 5, 1), (5, -3, 1), (3, 3, -1), (3, 3, 9), (3, 3, 10)] {
            assert_eq!(
                BoardConfig::new(w, h, m),
                Err(BoardError::InvalidConfiguration {
                    width: w,
                    height: h,
                    mines: m
                })
            );
        }
        assert!(BoardConfig::new(3, 3, 8).is_ok());
        assert!(BoardConfig::new(1, 1, 0).is_ok());
    }

    #[test]
    fn config_loads_from_json_with_defaults() {
        let config: BoardConfig =
            serde_json::from_str(r#"{"width": 16, "height": 16, "mines": 40}"#).unwrap();
        assert_eq!(config, BoardConfig::new_unchecked(16, 16, 40));

        let config: BoardConfig =
            serde_json::from_str(r#"{"accounting": "Legacy", "marking": "FlagQuestion"}"#)
                .unwrap();
        assert_eq!(config.size(), (9, 9));
        assert_eq!(config.accounting, SafeCellAccounting::Legacy);
        assert_eq!(config.marking, MarkMode::FlagQuestion);
    }
}
