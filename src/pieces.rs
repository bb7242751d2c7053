//! Piece catalog: five fixed shapes, their colour tags, random spawn and naive rotation.

use rand::Rng;

/// Largest extent of any shape in either axis.
pub const MAX_SHAPE_SIDE: usize = 4;

/// Piece kinds in this reduced catalog (no J/L).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Square,
    T,
    Z,
    S,
    I,
}

/// Display colour tag; no gameplay effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Yellow,
    Purple,
    Red,
    Green,
    Cyan,
}

impl PieceColor {
    /// Index 0..5, used by the theme palette.
    pub fn index(self) -> usize {
        match self {
            Self::Yellow => 0,
            Self::Purple => 1,
            Self::Red => 2,
            Self::Green => 3,
            Self::Cyan => 4,
        }
    }
}

impl PieceKind {
    pub const ALL: [Self; 5] = [Self::Square, Self::T, Self::Z, Self::S, Self::I];

    /// Spawn orientation, rows top to bottom.
    pub fn shape(self) -> Shape {
        match self {
            Self::Square => Shape::from_rows(&[&[1, 1], &[1, 1]]),
            Self::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            Self::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            Self::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            Self::I => Shape::from_rows(&[&[1], &[1], &[1], &[1]]),
        }
    }

    pub fn color(self) -> PieceColor {
        match self {
            Self::Square => PieceColor::Yellow,
            Self::T => PieceColor::Purple,
            Self::Z => PieceColor::Red,
            Self::S => PieceColor::Green,
            Self::I => PieceColor::Cyan,
        }
    }
}

/// Rectangular bitmap of a piece. Cells outside `height x width` are always false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    height: usize,
    width: usize,
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build from 0/1 rows. Every row must have the same length, at most 4x4.
    fn from_rows(rows: &[&[u8]]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                cells[i][j] = v != 0;
            }
        }
        Self {
            height: rows.len(),
            width: rows.first().map_or(0, |r| r.len()),
            cells,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// True if (i, j) is inside the bitmap and filled.
    #[inline]
    pub fn is_filled(&self, i: usize, j: usize) -> bool {
        i < self.height && j < self.width && self.cells[i][j]
    }

    /// (row, col) of every filled cell, row-major.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height)
            .flat_map(move |i| (0..self.width).map(move |j| (i, j)))
            .filter(move |&(i, j)| self.cells[i][j])
    }

    /// 90° clockwise: transpose, then reverse each resulting row.
    #[must_use]
    pub fn rotate(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (i, row) in cells.iter_mut().enumerate().take(self.width) {
            for (j, cell) in row.iter_mut().enumerate().take(self.height) {
                *cell = self.cells[self.height - 1 - j][i];
            }
        }
        Self {
            height: self.width,
            width: self.height,
            cells,
        }
    }
}

/// A catalog piece in some orientation. Immutable; rotating yields a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
}

impl Piece {
    /// Piece in its spawn orientation.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: kind.shape(),
        }
    }

    /// Same kind and colour, different shape.
    #[must_use]
    pub fn with_shape(self, shape: Shape) -> Self {
        Self { shape, ..self }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn color(&self) -> PieceColor {
        self.kind.color()
    }

    /// This piece rotated 90° clockwise.
    #[must_use]
    pub fn rotated(&self) -> Self {
        self.with_shape(self.shape.rotate())
    }
}

/// Uniform draw over the catalog. Draws are independent; repeats are allowed.
pub fn random_piece<R: Rng + ?Sized>(rng: &mut R) -> Piece {
    let kind = PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())];
    Piece::new(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_dimensions() {
        let dims: Vec<(usize, usize)> = PieceKind::ALL
            .iter()
            .map(|k| (k.shape().height(), k.shape().width()))
            .collect();
        assert_eq!(dims, vec![(2, 2), (2, 3), (2, 3), (2, 3), (4, 1)]);
    }

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.shape().filled_cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_t() {
        // [[0,1,0],[1,1,1]] -> [[1,0],[1,1],[1,0]]
        let r = PieceKind::T.shape().rotate();
        assert_eq!((r.height(), r.width()), (3, 2));
        let filled: Vec<_> = r.filled_cells().collect();
        assert_eq!(filled, vec![(0, 0), (1, 0), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_rotate_i_is_horizontal() {
        let r = PieceKind::I.shape().rotate();
        assert_eq!((r.height(), r.width()), (1, 4));
        assert_eq!(r.filled_cells().count(), 4);
    }

    #[test]
    fn test_rotation_is_four_cycle() {
        for kind in PieceKind::ALL {
            let s = kind.shape();
            assert_eq!(s.rotate().rotate().rotate().rotate(), s, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotated_piece_keeps_kind_and_color() {
        let p = Piece::new(PieceKind::Z);
        let r = p.rotated();
        assert_eq!(r.kind(), PieceKind::Z);
        assert_eq!(r.color(), PieceColor::Red);
        assert_ne!(r.shape(), p.shape());
        assert_eq!(p.shape(), &PieceKind::Z.shape());
    }

    #[test]
    fn test_random_piece_covers_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<PieceKind> = (0..500).map(|_| random_piece(&mut rng).kind()).collect();
        assert_eq!(seen.len(), PieceKind::ALL.len());
    }

    #[test]
    fn test_random_piece_spawns_unrotated() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let p = random_piece(&mut rng);
            assert_eq!(p.shape(), &p.kind().shape());
        }
    }
}
