use super::*;

/// Places mines at caller-chosen coordinates, for replays and tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator<'a> {
    mine_coords: &'a [Coord2],
}

impl<'a> FixedMinefieldGenerator<'a> {
    pub fn new(mine_coords: &'a [Coord2]) -> Self {
        Self { mine_coords }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator<'_> {
    fn generate(self, config: &BoardConfig) -> Result<Array2<bool>> {
        config.validate()?;
        let invalid = BoardError::InvalidConfiguration {
            width: config.width,
            height: config.height,
            mines: config.mines,
        };

        if self.mine_coords.len() != config.mines as usize {
            return Err(invalid);
        }

        let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());
        for &(x, y) in self.mine_coords {
            if !(0..config.width).contains(&x) || !(0..config.height).contains(&y) {
                return Err(invalid);
            }
            let tile = &mut mines[(x, y).to_nd_index()];
            if *tile {
                return Err(invalid);
            }
            *tile = true;
        }
        Ok(mines)
    }
}
