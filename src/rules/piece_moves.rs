//! Chess piece movement rules
//!
//! Geometric validity for each piece type: does the move obey the piece's
//! movement pattern and path-blocking rules, ignoring whether it exposes
//! the mover's king. Pure functions over a board snapshot.
//!
//! [`is_valid_move`] is the dispatcher; it rejects no-op moves and
//! same-colour destinations before handing off to the per-piece
//! predicates, which therefore never re-check either.

use crate::board::BoardState;
use crate::pieces::Piece;
use crate::types::{PieceColor, PieceType, Square};

/// Check whether a move is geometrically valid for the given piece
///
/// Covers the castling shape (king moves two files) and en-passant
/// geometry; king safety for both is the legality layer's job.
pub fn is_valid_move(board: &BoardState, piece: &Piece, from: Square, to: Square) -> bool {
    // Can't move to the same square
    if from == to {
        return false;
    }

    // Can't capture your own pieces
    if let Some(target) = board.piece_at(to) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.piece_type {
        PieceType::Pawn => is_valid_pawn_move(board, piece, from, to),
        PieceType::Knight => is_valid_knight_move(from, to),
        PieceType::Bishop => is_valid_bishop_move(board, from, to),
        PieceType::Rook => is_valid_rook_move(board, from, to),
        PieceType::Queen => is_valid_queen_move(board, from, to),
        PieceType::King => is_valid_king_move(board, piece, from, to),
    }
}

/// Whether this move is the castling shape: an unmoved king stepping two
/// files along its rank
pub(crate) fn is_castling_shape(piece: &Piece, from: Square, to: Square) -> bool {
    piece.piece_type == PieceType::King
        && from.y == to.y
        && (to.x as i8 - from.x as i8).abs() == 2
}

/// Whether this move is an en-passant capture: a pawn stepping diagonally
/// onto an empty square past an opposing pawn that just double-stepped
pub(crate) fn is_en_passant_capture(
    board: &BoardState,
    piece: &Piece,
    from: Square,
    to: Square,
) -> bool {
    piece.piece_type == PieceType::Pawn
        && (to.x as i8 - from.x as i8).abs() == 1
        && to.y as i8 - from.y as i8 == piece.color.pawn_direction()
        && board.piece_at(to).is_none()
        && is_double_stepped_enemy_pawn(board, piece.color, Square::new(to.x, from.y))
}

/// The corner square of the rook matching a castling move
pub(crate) fn castling_rook_corner(from: Square, to: Square) -> Square {
    let corner_x = if to.x > from.x { 7 } else { 0 };
    Square::new(corner_x, from.y)
}

fn is_double_stepped_enemy_pawn(board: &BoardState, mover: PieceColor, square: Square) -> bool {
    board.piece_at(square).is_some_and(|side_pawn| {
        side_pawn.color != mover
            && side_pawn.piece_type == PieceType::Pawn
            && side_pawn.just_double_stepped
    })
}

fn is_valid_pawn_move(board: &BoardState, piece: &Piece, from: Square, to: Square) -> bool {
    let direction = piece.color.pawn_direction();
    let dx = to.x as i8 - from.x as i8;
    let dy = to.y as i8 - from.y as i8;

    // Forward move
    if dx == 0 && dy == direction {
        return board.piece_at(to).is_none();
    }

    // Double move from the starting rank
    if dx == 0 && dy == 2 * direction && !piece.has_moved {
        let intermediate = Square::new(from.x, (from.y as i8 + direction) as u8);
        return board.piece_at(intermediate).is_none() && board.piece_at(to).is_none();
    }

    // Capture diagonally, either a regular capture or en passant
    if dx.abs() == 1 && dy == direction {
        if let Some(target) = board.piece_at(to) {
            return target.color != piece.color;
        }
        return is_double_stepped_enemy_pawn(board, piece.color, Square::new(to.x, from.y));
    }

    false
}

fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let dx = (to.x as i8 - from.x as i8).abs();
    let dy = (to.y as i8 - from.y as i8).abs();
    (dx == 2 && dy == 1) || (dx == 1 && dy == 2)
}

fn is_valid_bishop_move(board: &BoardState, from: Square, to: Square) -> bool {
    let dx = (to.x as i8 - from.x as i8).abs();
    let dy = (to.y as i8 - from.y as i8).abs();

    if dx != dy {
        return false;
    }

    is_path_clear(board, from, to)
}

fn is_valid_rook_move(board: &BoardState, from: Square, to: Square) -> bool {
    if from.x != to.x && from.y != to.y {
        return false;
    }

    is_path_clear(board, from, to)
}

fn is_valid_queen_move(board: &BoardState, from: Square, to: Square) -> bool {
    is_valid_rook_move(board, from, to) || is_valid_bishop_move(board, from, to)
}

fn is_valid_king_move(board: &BoardState, piece: &Piece, from: Square, to: Square) -> bool {
    let dx = (to.x as i8 - from.x as i8).abs();
    let dy = (to.y as i8 - from.y as i8).abs();

    // Standard single step; "does this square put me in check" is the
    // legality layer's concern
    if dx <= 1 && dy <= 1 {
        return true;
    }

    // Castling shape: two files along the back rank, king and matching
    // rook both unmoved, nothing between them
    if is_castling_shape(piece, from, to) && !piece.has_moved {
        let corner = castling_rook_corner(from, to);
        let Some(rook) = board.piece_at(corner) else {
            return false;
        };
        if rook.piece_type != PieceType::Rook || rook.color != piece.color || rook.has_moved {
            return false;
        }
        let (low, high) = if corner.x > from.x {
            (from.x, corner.x)
        } else {
            (corner.x, from.x)
        };
        return (low + 1..high).all(|x| board.piece_at(Square::new(x, from.y)).is_none());
    }

    false
}

/// Walk the straight or diagonal line between `from` and `to`, exclusive
/// of both ends; true if every intermediate square is empty
pub(crate) fn is_path_clear(board: &BoardState, from: Square, to: Square) -> bool {
    let dx = (to.x as i8 - from.x as i8).signum();
    let dy = (to.y as i8 - from.y as i8).signum();

    let mut x = from.x as i8 + dx;
    let mut y = from.y as i8 + dy;

    while (x, y) != (to.x as i8, to.y as i8) {
        if board.piece_at(Square::new(x as u8, y as u8)).is_some() {
            return false;
        }
        x += dx;
        y += dy;
    }

    true
}
