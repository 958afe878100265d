use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement: both axes are drawn independently and the draw
/// is repeated whenever it lands on a cell that already holds a mine.
#[derive(Clone, Debug)]
pub struct RandomMinefieldGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomMinefieldGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomMinefieldGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MinefieldGenerator for RandomMinefieldGenerator<R> {
    fn generate(mut self, config: &BoardConfig) -> Result<Array2<bool>> {
        // mines < width * height keeps the retry loop finite
        config.validate()?;

        let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut mines_placed = 0;
        let mut draws = 0u64;

        while mines_placed < config.mines {
            let coords: Coord2 = (
                self.rng.random_range(0..config.width),
                self.rng.random_range(0..config.height),
            );
            draws += 1;

            let tile = &mut mines[coords.to_nd_index()];
            if !*tile {
                *tile = true;
                mines_placed += 1;
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} board in {} draws",
            mines_placed,
            config.width,
            config.height,
            draws
        );
        Ok(mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_total(mines: &Array2<bool>) -> usize {
        mines.iter().filter(|&&mine| mine).count()
    }

    #[test]
    fn places_exact_mine_count() {
        for (w, h, m) in [(1, 1, 0), (9, 9, 10), (16, 30, 99), (4, 4, 15), (1, 7, 6)] {
            let config = BoardConfig::new_unchecked(w, h, m);
            let mines = RandomMinefieldGenerator::from_seed(7).generate(&config).unwrap();
            assert_eq!(mines.dim(), (w as usize, h as usize));
            assert_eq!(mine_total(&mines), m as usize);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = BoardConfig::new_unchecked(16, 16, 40);
        let a = RandomMinefieldGenerator::from_seed(42).generate(&config).unwrap();
        let b = RandomMinefieldGenerator::from_seed(42).generate(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_cell_can_receive_a_mine() {
        let config = BoardConfig::new_unchecked(3, 2, 1);
        let mut hits: Array2<bool> = Array2::default((3, 2));
        for seed in 0..500 {
            let mines = RandomMinefieldGenerator::from_seed(seed).generate(&config).unwrap();
            hits.zip_mut_with(&mines, |hit, &mine| *hit |= mine);
        }
        assert!(hits.iter().all(|&hit| hit));
    }

    #[test]
    fn accepts_borrowed_rng() {
        let mut rng = SmallRng::seed_from_u64(3);
        let config = BoardConfig::new_unchecked(5, 5, 5);
        let mines = RandomMinefieldGenerator::new(&mut rng).generate(&config).unwrap();
        assert_eq!(mine_total(&mines), 5);
    }

    #[test]
    fn rejects_full_board() {
        let config = BoardConfig::new_unchecked(2, 2, 4);
        assert_eq!(
            RandomMinefieldGenerator::from_seed(0).generate(&config),
            Err(BoardError::InvalidConfiguration {
                width: 2,
                height: 2,
                mines: 4
            })
        );
    }
}
