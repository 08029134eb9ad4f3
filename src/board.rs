//! Board state - the single source of truth for piece placement
//!
//! [`BoardState`] owns every live piece in an arena indexed by
//! [`PieceId`] plus an 8x8 grid mapping squares to ids, and tracks whose
//! turn it is. Invariants maintained by every mutator:
//!
//! - each occupied grid cell's piece reports a `position` equal to that cell
//! - each live piece is referenced by exactly one grid cell
//! - at most one king per colour is alive
//!
//! Grid mutation goes through [`BoardState::place`] and
//! [`BoardState::remove`], used only by move application and the legality
//! simulation's scratch copies; rule predicates get read-only access.

use crate::pieces::{Piece, PieceId};
use crate::types::{PieceColor, PieceType, Square};

/// Standard opening layout, value-encoded: magnitude 1-6 = King..Pawn,
/// sign = colour (positive White, negative Black), 0 = empty.
/// Row 0 is Black's back rank.
const STANDARD_LAYOUT: [[i8; 8]; 8] = [
    [-5, -4, -3, -2, -1, -3, -4, -5],
    [-6, -6, -6, -6, -6, -6, -6, -6],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [6, 6, 6, 6, 6, 6, 6, 6],
    [5, 4, 3, 2, 1, 3, 4, 5],
];

/// Piece placement, piece arena and side to move
#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
    /// Arena of pieces; a captured or promoted-away piece leaves a dead
    /// slot so ids stay stable for the whole game
    pieces: Vec<Option<Piece>>,
    /// grid[y][x] holds the id of the piece standing on (x, y)
    grid: [[Option<PieceId>; 8]; 8],
    current_turn: PieceColor,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoardState {
    /// An empty board, White to move
    pub fn empty() -> Self {
        BoardState {
            pieces: Vec::new(),
            grid: [[None; 8]; 8],
            current_turn: PieceColor::White,
        }
    }

    /// The standard opening position, White to move
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (y, row) in STANDARD_LAYOUT.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                if code == 0 {
                    continue;
                }
                let color = if code > 0 {
                    PieceColor::White
                } else {
                    PieceColor::Black
                };
                if let Some(piece_type) = PieceType::from_code(code.unsigned_abs()) {
                    board.spawn(piece_type, color, Square::new(x as u8, y as u8));
                }
            }
        }
        board
    }

    /// Reset to an empty grid, no pieces, White to move
    pub fn clear(&mut self) {
        self.pieces.clear();
        self.grid = [[None; 8]; 8];
        self.current_turn = PieceColor::White;
    }

    /// Create a piece and place it on an empty square, returning its id
    pub fn spawn(&mut self, piece_type: PieceType, color: PieceColor, square: Square) -> PieceId {
        debug_assert!(
            self.cell(square).is_none(),
            "spawn onto occupied square {square}"
        );
        debug_assert!(
            piece_type != PieceType::King || self.find_king(color).is_none(),
            "second {color:?} king spawned"
        );
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(Some(Piece::new(id, piece_type, color, square)));
        *self.cell_mut(square) = Some(id);
        id
    }

    /// The piece standing on `square`, if any
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        let id = self.cell(square)?;
        self.piece(id)
    }

    /// Resolve a piece id; `None` once the piece has been captured or
    /// promoted away
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())?.as_ref()
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index())?.as_mut()
    }

    /// The square of the given colour's king, `None` if it is missing
    /// (a corrupted board; callers treat this defensively)
    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.piece_type == PieceType::King)
            .map(|piece| piece.position)
    }

    /// All live pieces of one colour
    pub fn pieces_of(&self, color: PieceColor) -> impl Iterator<Item = &Piece> + '_ {
        self.all_pieces().filter(move |piece| piece.color == color)
    }

    /// All live pieces
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().flatten()
    }

    /// Side to move
    pub fn current_turn(&self) -> PieceColor {
        self.current_turn
    }

    /// Override the side to move (board setup)
    pub fn set_turn(&mut self, color: PieceColor) {
        self.current_turn = color;
    }

    pub(crate) fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    /// Relocate a live piece to `to`, keeping grid and piece position in
    /// sync. The destination must be empty; captures are a `remove`
    /// followed by a `place`.
    pub(crate) fn place(&mut self, id: PieceId, to: Square) {
        let Some(piece) = self.pieces.get_mut(id.index()).and_then(|slot| slot.as_mut()) else {
            debug_assert!(false, "place: stale piece id {id}");
            return;
        };
        let from = piece.position;
        piece.position = to;
        if self.grid[from.y as usize][from.x as usize] == Some(id) {
            self.grid[from.y as usize][from.x as usize] = None;
        }
        debug_assert!(
            self.grid[to.y as usize][to.x as usize].is_none(),
            "place onto occupied square {to}"
        );
        self.grid[to.y as usize][to.x as usize] = Some(id);
    }

    /// Remove and return the piece on `square`; its id stops resolving
    pub(crate) fn remove(&mut self, square: Square) -> Option<Piece> {
        let id = self.cell_mut(square).take()?;
        let piece = self.pieces.get_mut(id.index())?.take();
        debug_assert!(piece.is_some(), "grid referenced dead piece {id}");
        piece
    }

    /// Close the en-passant window: drop the double-step flag on every
    /// pawn of both colours
    pub(crate) fn clear_double_step_flags(&mut self) {
        for piece in self.pieces.iter_mut().flatten() {
            piece.just_double_stepped = false;
        }
    }

    /// Reinsert a previously removed piece into its own slot;
    /// counterpart of `remove` for make/unmake round-trip tests
    #[cfg(test)]
    pub(crate) fn restore(&mut self, piece: Piece) {
        debug_assert!(self.pieces.get(piece.id.index()).is_some_and(|slot| slot.is_none()));
        debug_assert!(self.cell(piece.position).is_none());
        self.grid[piece.position.y as usize][piece.position.x as usize] = Some(piece.id);
        self.pieces[piece.id.index()] = Some(piece);
    }

    fn cell(&self, square: Square) -> Option<PieceId> {
        self.grid[square.y as usize][square.x as usize]
    }

    fn cell_mut(&mut self, square: Square) -> &mut Option<PieceId> {
        &mut self.grid[square.y as usize][square.x as usize]
    }

    /// Verify the grid/arena pairing invariant
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        for y in 0..8 {
            for x in 0..8 {
                let square = Square::new(x, y);
                if let Some(id) = self.cell(square) {
                    let piece = self.piece(id).expect("grid cell references dead piece");
                    assert_eq!(piece.position, square, "piece {id} out of sync with grid");
                }
            }
        }
        for piece in self.all_pieces() {
            assert_eq!(
                self.cell(piece.position),
                Some(piece.id),
                "piece {} not referenced by its own square",
                piece.id
            );
        }
    }
}
