//! Attack detection
//!
//! Determines whether a square is attacked by the opponent of a given
//! colour. Attack patterns differ from move validity: pawns attack only
//! their two forward diagonals (never the straight advance), and a piece
//! attacks a square whether or not it could legally move there.
//!
//! This is a primitive of the legality simulation and must never call
//! back into it.

use crate::board::BoardState;
use crate::pieces::Piece;
use crate::rules::piece_moves::is_path_clear;
use crate::types::{PieceColor, PieceType, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Check whether `square` is attacked by the opponent of `defender`
///
/// Scans every opposing piece's attack pattern. Sliding pieces match only
/// if the first piece along the ray towards `square` is `square` itself.
pub fn is_square_attacked(board: &BoardState, square: Square, defender: PieceColor) -> bool {
    board
        .pieces_of(defender.opponent())
        .any(|attacker| attacks(board, attacker, square))
}

fn attacks(board: &BoardState, attacker: &Piece, square: Square) -> bool {
    let from = attacker.position;
    if from == square {
        return false;
    }
    let dx = square.x as i8 - from.x as i8;
    let dy = square.y as i8 - from.y as i8;

    match attacker.piece_type {
        PieceType::Pawn => dy == attacker.color.pawn_direction() && dx.abs() == 1,
        PieceType::Knight => KNIGHT_OFFSETS.contains(&(dx, dy)),
        PieceType::King => dx.abs() <= 1 && dy.abs() <= 1,
        PieceType::Rook => (dx == 0 || dy == 0) && is_path_clear(board, from, square),
        PieceType::Bishop => dx.abs() == dy.abs() && is_path_clear(board, from, square),
        PieceType::Queen => {
            (dx == 0 || dy == 0 || dx.abs() == dy.abs()) && is_path_clear(board, from, square)
        }
    }
}
