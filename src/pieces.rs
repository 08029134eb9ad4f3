//! Piece data and stable piece handles
//!
//! Pieces live in an arena owned by [`crate::board::BoardState`] and are
//! referred to by [`PieceId`] handles. A handle stays valid for the whole
//! game but stops resolving once the piece is captured or promoted away,
//! so host-side references (selection, drag state) degrade to a failed
//! lookup instead of dangling.

use crate::types::{PieceColor, PieceType, Square};
use serde::{Deserialize, Serialize};

/// Stable handle to a piece in the board's arena
///
/// Ids are allocated sequentially and never reused within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub(crate) u32);

impl PieceId {
    /// Arena slot index for this id
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A live chess piece
///
/// `position` always agrees with the grid cell referencing this piece;
/// only the board mutators touch either side of that pairing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub piece_type: PieceType,
    pub color: PieceColor,
    pub position: Square,
    /// Set the first time the piece moves; never reset. Gates castling
    /// eligibility and the pawn double step.
    pub has_moved: bool,
    /// True only on the ply immediately after this pawn advanced two
    /// squares; cleared by the very next move of either side.
    pub just_double_stepped: bool,
}

impl Piece {
    pub(crate) fn new(
        id: PieceId,
        piece_type: PieceType,
        color: PieceColor,
        position: Square,
    ) -> Self {
        Piece {
            id,
            piece_type,
            color,
            position,
            has_moved: false,
            just_double_stepped: false,
        }
    }
}
