//! tetris-lite: game-state engine for a small falling-block puzzle.
//!
//! The engine is pure: [`GameState::apply_tick`] and [`GameState::apply_input`] consume a
//! state and return the next one. Drawing, key handling and tick scheduling belong to the
//! host (the `tetris-lite` binary is one such host).

pub mod board;
pub mod collision;
pub mod game;
pub mod pieces;

pub use board::{Board, Cell, HEIGHT, WIDTH};
pub use collision::collides;
pub use game::{ActivePiece, Command, GameState};
pub use pieces::{Piece, PieceColor, PieceKind, Shape, random_piece};
