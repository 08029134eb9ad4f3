//! Move legality - geometric validity plus king safety
//!
//! A move is legal when it is geometrically valid and does not leave the
//! mover's own king attacked. King safety is decided by simulating the
//! move on a scratch copy of the board; the live board is never touched
//! by a probe, so callers may run probes at any time.

use crate::board::BoardState;
use crate::pieces::Piece;
use crate::rules::attacks::is_square_attacked;
use crate::rules::piece_moves::{
    self, castling_rook_corner, is_castling_shape, is_en_passant_capture,
};
use crate::types::{PieceColor, PieceType, Square};
use tracing::warn;

/// Full validation pipeline for a proposed move: geometry, castling
/// safety, then the king-safety simulation
pub fn is_move_allowed(board: &BoardState, piece: &Piece, from: Square, to: Square) -> bool {
    if !piece_moves::is_valid_move(board, piece, from, to) {
        return false;
    }
    if is_castling_shape(piece, from, to) && !is_castling_safe(board, piece, from, to) {
        return false;
    }
    is_legal_move(board, piece, from, to)
}

/// Check that applying the move leaves the mover's king unattacked
///
/// Simulates on a scratch copy: the destination occupant (or the bypassed
/// pawn, for en passant) is removed and the piece relocated, then the
/// attack detector runs against the king's resulting square. A missing
/// king is structurally impossible and reported as illegal.
pub fn is_legal_move(board: &BoardState, piece: &Piece, from: Square, to: Square) -> bool {
    let mut scratch = board.clone();

    if is_en_passant_capture(board, piece, from, to) {
        scratch.remove(Square::new(to.x, from.y));
    }
    scratch.remove(to);
    scratch.place(piece.id, to);

    let king_square = if piece.piece_type == PieceType::King {
        to
    } else {
        match scratch.find_king(piece.color) {
            Some(square) => square,
            None => {
                warn!("[GAME] no {:?} king on board during legality probe", piece.color);
                return false;
            }
        }
    };

    !is_square_attacked(&scratch, king_square, piece.color)
}

/// Castling safety: the king may not castle out of, through, or into
/// check
///
/// The landing square is covered by the simulation in [`is_legal_move`];
/// here the current square and the square passed through are checked on
/// the live board.
fn is_castling_safe(board: &BoardState, piece: &Piece, from: Square, to: Square) -> bool {
    let passed = Square::new((from.x + to.x) / 2, from.y);
    !is_square_attacked(board, from, piece.color) && !is_square_attacked(board, passed, piece.color)
}

/// Every square the piece can legally move to
///
/// Runs the full pipeline per destination, so the host can use the result
/// for move highlighting without re-validating.
pub fn legal_destinations(board: &BoardState, piece: &Piece) -> Vec<Square> {
    let mut moves = Vec::new();
    for x in 0..8 {
        for y in 0..8 {
            let to = Square::new(x, y);
            if is_move_allowed(board, piece, piece.position, to) {
                moves.push(to);
            }
        }
    }
    moves
}

/// Whether the given colour has at least one legal move
///
/// Enumerates (piece, destination) pairs and stops at the first legal
/// one; the dominant cost path of game-end evaluation.
pub fn has_any_legal_move(board: &BoardState, color: PieceColor) -> bool {
    for piece in board.pieces_of(color) {
        for x in 0..8 {
            for y in 0..8 {
                let to = Square::new(x, y);
                if is_move_allowed(board, piece, piece.position, to) {
                    return true;
                }
            }
        }
    }
    false
}

/// Rook relocation implied by a castling move: from its corner to the
/// square the king passed through
pub(crate) fn castling_rook_move(from: Square, to: Square) -> (Square, Square) {
    let corner = castling_rook_corner(from, to);
    let rook_to = Square::new((from.x + to.x) / 2, from.y);
    (corner, rook_to)
}
