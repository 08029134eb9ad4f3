//! Move results and move history
//!
//! [`MoveResult`] is the value object returned for every move attempt: it
//! carries the validity verdict plus every board delta the host needs to
//! mirror the move (capture square, castling rook relocation, promotion)
//! and the game-state flags produced by the post-move evaluation.

use crate::pieces::PieceId;
use crate::types::{PieceColor, PieceType, Square};
use serde::{Deserialize, Serialize};

/// A piece removed from the board by a move
///
/// `square` is where the piece stood, which for en passant differs from
/// the mover's destination.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapturedPiece {
    pub id: PieceId,
    pub piece_type: PieceType,
    pub color: PieceColor,
    pub square: Square,
}

/// Outcome of a single move attempt
///
/// Produced fresh per request and never persisted. A rejected move has
/// `valid = false` and every other flag at its default; rejection is an
/// expected input, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveResult {
    pub valid: bool,
    pub from: Square,
    pub to: Square,
    pub captured: Option<CapturedPiece>,
    pub is_castling: bool,
    /// Corner the castling rook left, when `is_castling`
    pub rook_from: Option<Square>,
    /// Square the castling rook landed on, when `is_castling`
    pub rook_to: Option<Square>,
    pub is_en_passant: bool,
    pub is_promotion: bool,
    /// Piece type chosen for the promotion; pre-filled with Queen while
    /// the choice is still pending
    pub promotion: Option<PieceType>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_draw: bool,
}

impl MoveResult {
    /// A rejected attempt; all flags cleared
    pub fn rejected(from: Square, to: Square) -> Self {
        Self::base(false, from, to)
    }

    pub(crate) fn accepted(from: Square, to: Square) -> Self {
        Self::base(true, from, to)
    }

    fn base(valid: bool, from: Square, to: Square) -> Self {
        MoveResult {
            valid,
            from,
            to,
            captured: None,
            is_castling: false,
            rook_from: None,
            rook_to: None,
            is_en_passant: false,
            is_promotion: false,
            promotion: None,
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
            is_draw: false,
        }
    }
}

/// One accepted ply, as remembered by the history log
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece_type: PieceType,
    pub piece_color: PieceColor,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceType>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub is_promotion: bool,
    pub is_check: bool,
    pub is_checkmate: bool,
}

/// Chronological record of every accepted move in the game
///
/// Written by move application, read by the host for move review; rule
/// logic never consults it.
#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.moves.iter()
    }
}
