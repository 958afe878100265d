use std::collections::VecDeque;

use ndarray::Array2;
use rand::Rng;

use crate::*;

/// A minesweeper board: fixed mine layout plus the reveal/mark state machine.
///
/// Once [`Board::did_win`] or [`Board::did_lose`] is true the board is
/// finished. Further moves are still accepted; it is up to the caller to
/// stop forwarding input.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: BoardConfig,
    cells: Array2<Cell>,
    remaining_safe_cells: CellCount,
    exploded: bool,
}

impl Board {
    /// Creates a board with randomly placed mines drawn from the thread RNG.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        Self::with_rng(BoardConfig::new(width, height, mines)?, &mut rand::rng())
    }

    /// Creates a board whose layout is fully determined by `seed`.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::generate(config, RandomMinefieldGenerator::from_seed(seed))
    }

    pub fn with_rng<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Result<Self> {
        Self::generate(config, RandomMinefieldGenerator::new(rng))
    }

    pub fn from_mine_coords(config: BoardConfig, mine_coords: &[Coord2]) -> Result<Self> {
        Self::generate(config, FixedMinefieldGenerator::new(mine_coords))
    }

    pub fn generate(config: BoardConfig, generator: impl MinefieldGenerator) -> Result<Self> {
        config.validate()?;
        let mines = generator.generate(&config)?;

        let placed = mines.iter().filter(|&&has_mine| has_mine).count();
        if mines.dim() != (config.width as usize, config.height as usize)
            || placed != config.mines as usize
        {
            log::warn!(
                "Generated mask {:?} with {} mines does not match {}x{} board with {} mines",
                mines.dim(),
                placed,
                config.width,
                config.height,
                config.mines
            );
            return Err(BoardError::InvalidConfiguration {
                width: config.width,
                height: config.height,
                mines: config.mines,
            });
        }

        let cells = mines.mapv(|has_mine| Cell {
            has_mine,
            ..Cell::default()
        });
        log::debug!(
            "New {}x{} board with {} mines, {:?} accounting, {:?} marking",
            config.width,
            config.height,
            config.mines,
            config.accounting,
            config.marking
        );

        Ok(Self {
            remaining_safe_cells: config.safe_cells(),
            config,
            cells,
            exploded: false,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn dimensions(&self) -> Coord2 {
        self.config.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn remaining_safe_cells(&self) -> CellCount {
        self.remaining_safe_cells
    }

    pub fn did_win(&self) -> bool {
        self.remaining_safe_cells == 0
    }

    pub fn did_lose(&self) -> bool {
        self.exploded
    }

    pub fn is_finished(&self) -> bool {
        self.did_win() || self.did_lose()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (x, y) = coords;
        if (0..self.config.width).contains(&x) && (0..self.config.height).contains(&y) {
            Ok(coords)
        } else {
            Err(BoardError::OutOfBounds { x, y })
        }
    }

    pub fn cell_state(&self, x: Coord, y: Coord) -> Result<CellState> {
        let coords = self.validate_coords((x, y))?;
        Ok(self.cells[coords.to_nd_index()].state)
    }

    pub fn has_mine(&self, x: Coord, y: Coord) -> Result<bool> {
        let coords = self.validate_coords((x, y))?;
        Ok(self.cells[coords.to_nd_index()].has_mine)
    }

    /// Number of mines among the up to eight neighbors, never counting the cell itself.
    pub fn adjacent_mine_count(&self, x: Coord, y: Coord) -> Result<u8> {
        let coords = self.validate_coords((x, y))?;
        Ok(self.count_adjacent_mines(coords))
    }

    /// Cycles the mark on a cell and returns its new state.
    ///
    /// A revealed cell is marked like a hidden one; the mark hides it again
    /// until the next reveal.
    pub fn toggle_mark(&mut self, x: Coord, y: Coord) -> Result<CellState> {
        use CellState::*;

        let coords = self.validate_coords((x, y))?;
        let cell = &mut self.cells[coords.to_nd_index()];

        cell.state = match (self.config.marking, cell.state) {
            (MarkMode::Flag, Flagged) => Hidden,
            (MarkMode::FlagQuestion, Flagged) => Questioned,
            (MarkMode::FlagQuestion, Questioned) => Hidden,
            _ => Flagged,
        };
        Ok(cell.state)
    }

    /// Reveals a cell, flooding outwards through zero-count cells.
    ///
    /// Any mark on the target is discarded. Revealing a mine sets the lost
    /// flag for good.
    pub fn reveal(&mut self, x: Coord, y: Coord) -> Result<RevealOutcome> {
        let coords = self.validate_coords((x, y))?;
        let has_mine = self.cells[coords.to_nd_index()].has_mine;

        if has_mine {
            log::debug!("Mine hit at {:?}", coords);
            self.exploded = true;
        }

        let origin_uncovered = self.cells[coords.to_nd_index()].reveal();
        let flooded = self.flood_reveal(coords);

        match self.config.accounting {
            SafeCellAccounting::PerCell => {
                if origin_uncovered && !has_mine {
                    self.remaining_safe_cells -= 1;
                }
            }
            SafeCellAccounting::Legacy => {
                self.remaining_safe_cells -= 1;
                if self.remaining_safe_cells == -1 {
                    log::warn!(
                        "Safe cell counter went negative ({}), board can no longer be won",
                        self.remaining_safe_cells
                    );
                }
            }
        }
        log::debug!(
            "Revealed {:?} and {} flooded cells, {} safe cells left",
            coords,
            flooded,
            self.remaining_safe_cells
        );

        Ok(if self.exploded {
            RevealOutcome::HitMine
        } else if self.did_win() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        })
    }

    /// Reveals the orthogonal region around an already revealed cell.
    ///
    /// A revealed cell with no adjacent mines opens each in-bounds orthogonal
    /// neighbor that is neither a mine nor revealed yet, overwriting marks.
    /// Diagonals are never opened here. Returns how many cells were opened.
    fn flood_reveal(&mut self, origin: Coord2) -> CellCount {
        let mut flooded = 0;
        let mut to_visit = VecDeque::from([origin]);

        while let Some(visit_coords) = to_visit.pop_front() {
            if self.count_adjacent_mines(visit_coords) != 0 {
                continue;
            }

            let corners = Corners::new(visit_coords, self.dimensions());
            for pos in corners.orthogonal(visit_coords) {
                let cell = &mut self.cells[pos.to_nd_index()];
                if cell.has_mine || cell.state.is_revealed() {
                    continue;
                }

                let first_time = cell.reveal();
                flooded += 1;
                match self.config.accounting {
                    SafeCellAccounting::PerCell if !first_time => {}
                    _ => self.remaining_safe_cells -= 1,
                }
                log::trace!("Flood revealed {:?}", pos);
                to_visit.push_back(pos);
            }
        }

        flooded
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        Corners::new(coords, self.dimensions())
            .adjacent(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].has_mine)
            .count() as u8
    }
}
