/// Single coordinate axis used for board width, height, and positions.
///
/// Signed so that callers can hand in positions like `-1` and get a proper
/// [`BoardError::OutOfBounds`](crate::BoardError::OutOfBounds) back.
pub type Coord = i16;

/// Count type used for mine counts, total-cell counts and the safe-cell counter.
pub type CellCount = i32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Only meaningful for coordinates that were already bounds-checked.
    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Corner flags of a cell: each one is set when the cell is away from both
/// edges that meet in that corner.
///
/// Neighbor gating is derived from these flags instead of from plain edge
/// checks. An orthogonal direction is open when either of its two corners is
/// open, a diagonal one only when its own corner is. On boards that are one
/// cell wide or tall this closes the orthogonal directions along that axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Corners {
    pub left_top: bool,
    pub right_top: bool,
    pub left_bottom: bool,
    pub right_bottom: bool,
}

impl Corners {
    pub const fn new((x, y): Coord2, (width, height): Coord2) -> Self {
        Self {
            left_top: x != 0 && y != 0,
            right_top: x != width - 1 && y != 0,
            left_bottom: x != 0 && y != height - 1,
            right_bottom: x != width - 1 && y != height - 1,
        }
    }

    pub const fn right(self) -> bool {
        self.right_top || self.right_bottom
    }

    pub const fn left(self) -> bool {
        self.left_bottom || self.left_top
    }

    pub const fn top(self) -> bool {
        self.left_top || self.right_top
    }

    pub const fn bottom(self) -> bool {
        self.right_bottom || self.left_bottom
    }

    /// Orthogonal neighbors in flood order: right, left, top, bottom.
    pub fn orthogonal(self, (x, y): Coord2) -> impl Iterator<Item = Coord2> {
        [
            (self.right(), (x + 1, y)),
            (self.left(), (x - 1, y)),
            (self.top(), (x, y - 1)),
            (self.bottom(), (x, y + 1)),
        ]
        .into_iter()
        .filter_map(|(open, pos)| open.then_some(pos))
    }

    /// All eight neighbors, diagonals gated by their single corner.
    pub fn adjacent(self, (x, y): Coord2) -> impl Iterator<Item = Coord2> {
        [
            (self.right(), (x + 1, y)),
            (self.left(), (x - 1, y)),
            (self.top(), (x, y - 1)),
            (self.right_top, (x + 1, y - 1)),
            (self.left_top, (x - 1, y - 1)),
            (self.bottom(), (x, y + 1)),
            (self.right_bottom, (x + 1, y + 1)),
            (self.left_bottom, (x - 1, y + 1)),
        ]
        .into_iter()
        .filter_map(|(open, pos)| open.then_some(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_has_all_neighbors() {
        let corners = Corners::new((1, 1), (3, 3));
        assert_eq!(corners.adjacent((1, 1)).count(), 8);
        assert_eq!(
            corners.orthogonal((1, 1)).collect::<Vec<_>>(),
            vec![(2, 1), (0, 1), (1, 0), (1, 2)]
        );
    }

    #[test]
    fn corner_cell_only_looks_inward() {
        let corners = Corners::new((0, 0), (3, 3));
        let mut adjacent: Vec<_> = corners.adjacent((0, 0)).collect();
        adjacent.sort();
        assert_eq!(adjacent, vec![(0, 1), (1, 0), (1, 1)]);

        let corners = Corners::new((2, 2), (3, 3));
        let mut adjacent: Vec<_> = corners.adjacent((2, 2)).collect();
        adjacent.sort();
        assert_eq!(adjacent, vec![(1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn edge_cell_excludes_outside() {
        let corners = Corners::new((1, 0), (3, 3));
        let mut adjacent: Vec<_> = corners.adjacent((1, 0)).collect();
        adjacent.sort();
        assert_eq!(adjacent, vec![(0, 0), (0, 1), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn single_row_closes_horizontal_neighbors() {
        let corners = Corners::new((1, 0), (3, 1));
        assert!(!corners.right());
        assert!(!corners.left());
        assert_eq!(corners.adjacent((1, 0)).count(), 0);
    }

    #[test]
    fn mult_widens_before_multiplying() {
        assert_eq!(mult(300, 300), 90_000);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 1_073_676_289);
    }
}
