//! Game state: board, active piece, score, and the tick/input step functions.
//!
//! Every transition consumes a [`GameState`] and returns the next one; the host keeps only
//! the latest value and delivers ticks and inputs one at a time.

use crate::board::{Board, HEIGHT, WIDTH};
use crate::collision::collides;
use crate::pieces::{Piece, PieceColor, Shape, random_piece};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Spawn column for new pieces.
pub const SPAWN_COL: i32 = 4;
/// Spawn row for new pieces.
pub const SPAWN_ROW: i32 = 0;
/// Points per cleared row.
pub const POINTS_PER_ROW: u32 = 10;
/// Gravity interval used by the terminal host unless overridden.
pub const DEFAULT_TICK_MS: u64 = 500;

/// Directional command from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Left,
    Right,
    Down,
    Rotate,
}

impl Command {
    /// Parse a command name (case-insensitive). `"up"` is an alias for rotate.
    /// Unknown names give `None`, which hosts treat as a no-op.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "down" => Some(Self::Down),
            "rotate" | "up" => Some(Self::Rotate),
            _ => None,
        }
    }
}

/// Falling piece and its top-left offset on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub piece: Piece,
    pub row: i32,
    pub col: i32,
}

impl ActivePiece {
    /// `piece` at the spawn offset.
    pub fn spawn(piece: Piece) -> Self {
        Self {
            piece,
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        self.piece.shape()
    }

    #[inline]
    pub fn color(&self) -> PieceColor {
        self.piece.color()
    }

    /// True if a filled cell of the piece sits on board cell (row, col).
    pub fn covers(&self, row: i32, col: i32) -> bool {
        let (i, j) = (row - self.row, col - self.col);
        i >= 0 && j >= 0 && self.shape().is_filled(i as usize, j as usize)
    }

    fn collides_at(&self, board: &Board, row: i32, col: i32) -> bool {
        collides(board, self.shape(), row, col)
    }
}

/// Complete engine state. Replaced wholesale on every tick, input or restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    landed: bool,
    game_over: bool,
    score: u32,
    rng: StdRng,
}

impl GameState {
    /// New game with a reproducible piece sequence.
    pub fn new_game(seed: u64) -> Self {
        Self::fresh(StdRng::seed_from_u64(seed))
    }

    /// New game seeded from OS entropy.
    pub fn new_game_from_entropy() -> Self {
        Self::fresh(StdRng::from_entropy())
    }

    fn fresh(mut rng: StdRng) -> Self {
        let active = ActivePiece::spawn(random_piece(&mut rng));
        Self {
            board: Board::empty(),
            active,
            landed: false,
            game_over: false,
            score: 0,
            rng,
        }
    }

    /// Start from an arbitrary position. The game is over immediately if `active` already
    /// overlaps the board, the same test applied to a freshly spawned piece.
    pub fn from_parts(board: Board, active: ActivePiece, seed: u64) -> Self {
        let game_over = active.collides_at(&board, active.row, active.col);
        Self {
            board,
            active,
            landed: false,
            game_over,
            score: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Discard everything but the piece source and start over.
    #[must_use]
    pub fn restart(self) -> Self {
        Self::fresh(self.rng)
    }

    /// One gravity step: fall one row, or lock, clear, score and spawn.
    #[must_use]
    pub fn apply_tick(mut self) -> Self {
        if self.game_over {
            return self;
        }

        let ActivePiece { row, col, .. } = self.active;
        let next_row = row + 1;
        let fits_below = next_row <= (HEIGHT - self.active.shape().height()) as i32;
        if fits_below && !self.active.collides_at(&self.board, next_row, col) {
            self.active.row = next_row;
            self.landed = false;
            return self;
        }

        let (board, cleared) = self.board.lock_and_clear(&self.active.piece, row, col);
        self.board = board;
        self.score += POINTS_PER_ROW * cleared;
        self.landed = true;
        self.spawn_next();
        self
    }

    fn spawn_next(&mut self) {
        self.active = ActivePiece::spawn(random_piece(&mut self.rng));
        if self.active.collides_at(&self.board, SPAWN_ROW, SPAWN_COL) {
            self.game_over = true;
        }
    }

    /// Apply a directional command. Rejected moves leave the state as it was; nothing
    /// happens once the game is over.
    #[must_use]
    pub fn apply_input(mut self, command: Command) -> Self {
        if self.game_over {
            return self;
        }

        let ActivePiece { row, col, .. } = self.active;
        let shape = *self.active.shape();
        let moved = match command {
            Command::Left => {
                let ok = !self.active.collides_at(&self.board, row, col - 1);
                if ok {
                    self.active.col = (col - 1).max(0);
                }
                ok
            }
            Command::Right => {
                let ok = !self.active.collides_at(&self.board, row, col + 1);
                if ok {
                    self.active.col = (col + 1).min((WIDTH - shape.width()) as i32);
                }
                ok
            }
            Command::Down => {
                let ok = row < (HEIGHT - shape.height()) as i32
                    && !self.active.collides_at(&self.board, row + 1, col);
                if ok {
                    self.active.row = row + 1;
                }
                ok
            }
            Command::Rotate => {
                let rotated = self.active.piece.rotated();
                let ok = !collides(&self.board, rotated.shape(), row, col);
                if ok {
                    self.active.piece = rotated;
                }
                ok
            }
        };
        if moved {
            self.landed = false;
        }
        self
    }

    /// [`GameState::apply_input`] for an optional command; `None` is a no-op.
    #[must_use]
    pub fn apply_input_opt(self, command: Option<Command>) -> Self {
        match command {
            Some(c) => self.apply_input(c),
            None => self,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True only in the state produced by the tick that locked a piece.
    #[inline]
    pub fn is_landed(&self) -> bool {
        self.landed
    }

    /// Overlay test for renderers: the active piece fills board cell (row, col).
    pub fn piece_covers(&self, row: i32, col: i32) -> bool {
        self.active.covers(row, col)
    }

    /// Board cell is occupied or covered by the active piece.
    pub fn is_filled(&self, row: i32, col: i32) -> bool {
        self.board.is_occupied(row, col) || self.piece_covers(row, col)
    }
}
