//! Game-end evaluation
//!
//! After a move is applied, decides whether the side to reply has any
//! legal move left (checkmate/stalemate) and whether the remaining
//! material can still force mate at all (insufficient-material draw).

use crate::board::BoardState;
use crate::rules::attacks::is_square_attacked;
use crate::rules::legality::has_any_legal_move;
use crate::types::{PieceColor, PieceType};

/// Outcome of checking the replying side for legal moves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ending {
    pub is_checkmate: bool,
    pub is_stalemate: bool,
}

/// Evaluate whether `color` (the side to reply) is mated or stalemated
///
/// If no legal reply exists: checkmate when the king is currently
/// attacked, stalemate otherwise.
pub fn evaluate_ending(board: &BoardState, color: PieceColor) -> Ending {
    if has_any_legal_move(board, color) {
        return Ending::default();
    }
    let in_check = board
        .find_king(color)
        .is_some_and(|square| is_square_attacked(board, square, color));
    Ending {
        is_checkmate: in_check,
        is_stalemate: !in_check,
    }
}

#[derive(Default)]
struct MaterialTally {
    knights: u32,
    bishops: u32,
    bishop_shade: Option<u8>,
}

impl MaterialTally {
    /// A side can still force mate with knight + bishop or two bishops
    fn is_winnable(&self) -> bool {
        (self.knights >= 1 && self.bishops >= 1) || self.bishops >= 2
    }
}

/// Whether neither side has enough material left to force checkmate
///
/// Any pawn, rook or queen on the board keeps the game winnable. With
/// only minor pieces, a side is winnable with knight + bishop or two
/// bishops; if neither side is winnable and each has exactly one bishop,
/// the position is drawn only when both bishops stand on the same shade.
pub fn has_insufficient_material(board: &BoardState) -> bool {
    let mut white = MaterialTally::default();
    let mut black = MaterialTally::default();

    for piece in board.all_pieces() {
        let tally = match piece.color {
            PieceColor::White => &mut white,
            PieceColor::Black => &mut black,
        };
        match piece.piece_type {
            PieceType::Pawn | PieceType::Rook | PieceType::Queen => return false,
            PieceType::Knight => tally.knights += 1,
            PieceType::Bishop => {
                tally.bishops += 1;
                tally.bishop_shade = Some(piece.position.shade());
            }
            PieceType::King => {}
        }
    }

    if white.is_winnable() || black.is_winnable() {
        return false;
    }

    if white.bishops == 1 && black.bishops == 1 {
        return white.bishop_shade == black.bishop_shade;
    }

    true
}
