//! Placement legality. Every fall, move, rotation and spawn check goes through [`collides`].

use crate::board::{Board, HEIGHT, WIDTH};
use crate::pieces::Shape;

/// True if any filled cell of `shape` placed with its top-left at (row, col) leaves the
/// board at the bottom or the sides, or lands on an occupied cell.
///
/// There is no check against the top edge: cells with a negative row count as free. Pieces
/// only ever move down from row 0, so the case never arises in play.
pub fn collides(board: &Board, shape: &Shape, row: i32, col: i32) -> bool {
    shape.filled_cells().any(|(i, j)| {
        let r = row + i as i32;
        let c = col + j as i32;
        r >= HEIGHT as i32 || c < 0 || c >= WIDTH as i32 || board.is_occupied(r, c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::pieces::PieceKind;

    fn all_shapes() -> Vec<Shape> {
        PieceKind::ALL
            .iter()
            .flat_map(|k| {
                let s = k.shape();
                [s, s.rotate(), s.rotate().rotate(), s.rotate().rotate().rotate()]
            })
            .collect()
    }

    #[test]
    fn test_floor_is_exact() {
        let board = Board::empty();
        for shape in all_shapes() {
            let floor = (HEIGHT - shape.height()) as i32;
            for col in 0..=(WIDTH - shape.width()) as i32 {
                assert!(!collides(&board, &shape, floor, col));
                assert!(collides(&board, &shape, floor + 1, col));
            }
        }
    }

    #[test]
    fn test_side_walls() {
        let board = Board::empty();
        for shape in all_shapes() {
            let max_col = (WIDTH - shape.width()) as i32;
            assert!(!collides(&board, &shape, 0, 0));
            assert!(!collides(&board, &shape, 0, max_col));
            assert!(collides(&board, &shape, 0, max_col + 1));
        }
    }

    #[test]
    fn test_horizontal_i_near_right_wall() {
        let flat = PieceKind::I.shape().rotate();
        assert!(!collides(&Board::empty(), &flat, 0, 6));
        assert!(collides(&Board::empty(), &flat, 0, 7));
        assert!(collides(&Board::empty(), &flat, 0, 9));
    }

    #[test]
    fn test_occupied_cell_collides() {
        let mut board = Board::empty();
        board.set(10, 5, Cell::Occupied);
        let square = PieceKind::Square.shape();
        assert!(collides(&board, &square, 9, 4));
        assert!(collides(&board, &square, 10, 5));
        assert!(!collides(&board, &square, 8, 4));
        assert!(!collides(&board, &square, 9, 6));
    }

    #[test]
    fn test_empty_shape_cells_do_not_collide() {
        // S: [[0,1,1],[1,1,0]]; the empty corner at (0,0) may overlap an occupied cell.
        let mut board = Board::empty();
        board.set(5, 2, Cell::Occupied);
        assert!(!collides(&board, &PieceKind::S.shape(), 5, 2));
    }

    #[test]
    fn test_above_top_is_free() {
        let board = Board::empty();
        assert!(!collides(&board, &PieceKind::I.shape(), -2, 0));
    }
}
