use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid configuration: {width}x{height} board with {mines} mines")]
    InvalidConfiguration {
        width: Coord,
        height: Coord,
        mines: CellCount,
    },
    #[error("Coordinates ({x}, {y}) are outside the board")]
    OutOfBounds { x: Coord, y: Coord },
}

pub type Result<T> = core::result::Result<T, BoardError>;
