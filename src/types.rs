//! Core coordinate and piece identity types
//!
//! Provides the board coordinate system shared by every rules module.
//! Coordinates are (x, y) pairs where `x` indexes the file (0 = 'a',
//! 7 = 'h') and `y` indexes the rank from Black's side of the board:
//! y = 0 is Black's back rank (rank 8), y = 7 is White's back rank
//! (rank 1). White pawns therefore advance towards decreasing y.

use serde::{Deserialize, Serialize};

/// Number of files/ranks on the board
pub const BOARD_SIZE: u8 = 8;

/// Colour of a piece or player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The other colour
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Direction a pawn of this colour advances along the y axis
    ///
    /// White spawns at high y and moves towards y = 0; Black the reverse.
    pub fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Rank index where this colour's pieces spawn (back rank)
    pub fn back_rank(self) -> u8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }

    /// Rank index where this colour's pawns spawn
    pub fn pawn_rank(self) -> u8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    /// Rank index a pawn of this colour promotes on (the opponent's back rank)
    pub fn promotion_rank(self) -> u8 {
        self.opponent().back_rank()
    }
}

/// Kind of a chess piece
///
/// Variant order matches the value encoding used by the board setup
/// table (1 = King .. 6 = Pawn, sign = colour).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PieceType {
    #[default]
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// Decode a piece type from its layout-table magnitude (1-6)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceType::King),
            2 => Some(PieceType::Queen),
            3 => Some(PieceType::Bishop),
            4 => Some(PieceType::Knight),
            5 => Some(PieceType::Rook),
            6 => Some(PieceType::Pawn),
            _ => None,
        }
    }

    /// Layout-table magnitude for this piece type (1-6)
    pub fn code(self) -> u8 {
        match self {
            PieceType::King => 1,
            PieceType::Queen => 2,
            PieceType::Bishop => 3,
            PieceType::Knight => 4,
            PieceType::Rook => 5,
            PieceType::Pawn => 6,
        }
    }

    /// Whether a pawn may promote to this piece type
    pub fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceType::Queen | PieceType::Rook | PieceType::Bishop | PieceType::Knight
        )
    }
}

/// Board square position (file, rank)
///
/// Always in bounds: constructors guarantee x, y < 8, so downstream
/// rule code never bounds-checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    /// File index, 0 = 'a' to 7 = 'h'
    pub x: u8,
    /// Rank index, 0 = Black's back rank to 7 = White's back rank
    pub y: u8,
}

impl Square {
    /// Create a square, asserting bounds in debug builds
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(
            x < BOARD_SIZE && y < BOARD_SIZE,
            "square ({x}, {y}) out of bounds"
        );
        Square { x, y }
    }

    /// Create a square from possibly-out-of-range coordinates
    pub fn try_new(x: i8, y: i8) -> Option<Self> {
        if (0..BOARD_SIZE as i8).contains(&x) && (0..BOARD_SIZE as i8).contains(&y) {
            Some(Square {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// The square offset by (dx, dy), or `None` if it falls off the board
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Self::try_new(self.x as i8 + dx, self.y as i8 + dy)
    }

    /// Shade of the square (0 or 1); bishops never change shade
    pub fn shade(self) -> u8 {
        (self.x + self.y) & 1
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
