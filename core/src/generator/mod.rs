use ndarray::Array2;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy deciding which cells of a fresh board hold mines.
///
/// The returned mask is indexed `[x, y]` and must contain exactly
/// `config.mines` set cells.
pub trait MinefieldGenerator {
    fn generate(self, config: &BoardConfig) -> Result<Array2<bool>>;
}
