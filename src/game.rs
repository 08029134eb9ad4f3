//! Game facade - the per-ply state machine
//!
//! [`ChessGame`] is the host's single entry point: it owns the board,
//! validates and applies moves, fires the special-move side effects
//! (castling, en passant, promotion), runs the game-end evaluation and
//! queues notifications. One move is validated and applied at a time;
//! there is no suspension point and no shared mutable state.
//!
//! Per ply:
//!
//! ```text
//! AwaitingMove -> [geometry] -> [simulate] -> Accepted
//!   -> [apply + side effects] -> [evaluate ending]
//!   -> Ongoing | Check | Checkmate | Stalemate | Draw
//!   -> SwitchTurn -> AwaitingMove
//! ```
//!
//! A promotion interposes a "waiting for promotion choice" sub-state
//! between apply and evaluation: the turn does not advance and no ending
//! is computed until the host calls [`ChessGame::choose_promotion`],
//! since the promoted piece can itself deliver check.

use crate::board::BoardState;
use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::moves::{CapturedPiece, MoveHistory, MoveRecord, MoveResult};
use crate::pieces::{Piece, PieceId};
use crate::rules::attacks::is_square_attacked;
use crate::rules::endgame::{evaluate_ending, has_insufficient_material};
use crate::rules::legality::{self, castling_rook_move, is_move_allowed};
use crate::rules::piece_moves::{is_castling_shape, is_en_passant_capture};
use crate::state::{GameOverState, GamePhase, PendingPromotion};
use crate::types::{PieceColor, PieceType, Square};
use tracing::{debug, info, warn};

/// A complete two-player chess game
pub struct ChessGame {
    board: BoardState,
    phase: GamePhase,
    game_over: GameOverState,
    pending_promotion: Option<PendingPromotion>,
    events: Vec<GameEvent>,
    history: MoveHistory,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// A new game from the standard opening position, White to move
    pub fn new() -> Self {
        ChessGame {
            board: BoardState::standard(),
            phase: GamePhase::default(),
            game_over: GameOverState::default(),
            pending_promotion: None,
            events: Vec::new(),
            history: MoveHistory::default(),
        }
    }

    /// A game over a custom position, for endgame setups
    pub fn from_board(board: BoardState) -> Self {
        ChessGame {
            board,
            phase: GamePhase::default(),
            game_over: GameOverState::default(),
            pending_promotion: None,
            events: Vec::new(),
            history: MoveHistory::default(),
        }
    }

    /// Validate and apply a move request - the sole mutating entry point
    ///
    /// Every request produces a [`MoveResult`]; an illegal move comes
    /// back with `valid = false` and no other effect. Requests are
    /// rejected outright once the game is over or while a promotion
    /// choice is pending.
    pub fn request_move(&mut self, id: PieceId, from: Square, to: Square) -> MoveResult {
        if self.game_over.is_game_over() {
            warn!("[GAME] move rejected: {}", self.game_over.message());
            return MoveResult::rejected(from, to);
        }
        if self.pending_promotion.is_some() {
            warn!("[GAME] move rejected: promotion choice pending");
            return MoveResult::rejected(from, to);
        }

        // A stale id means the referenced piece is gone; expected when
        // the host holds on to a selection across a capture
        let Some(&piece) = self.board.piece(id) else {
            debug!("[GAME] move rejected: piece {id} no longer on the board");
            return MoveResult::rejected(from, to);
        };

        if piece.position != from {
            // Host/board desync is a caller bug; fail fast in
            // development, reject in release
            debug_assert_eq!(
                piece.position, from,
                "move requested for piece {id} at {from}, but it stands on {}",
                piece.position
            );
            warn!(
                "[GAME] move rejected: piece {id} stands on {}, not {from}",
                piece.position
            );
            return MoveResult::rejected(from, to);
        }

        if piece.color != self.board.current_turn() {
            debug!(
                "[GAME] move rejected: it is {:?}'s turn",
                self.board.current_turn()
            );
            return MoveResult::rejected(from, to);
        }

        if !is_move_allowed(&self.board, &piece, from, to) {
            debug!(
                "[GAME] illegal move: {:?} {:?} {from} -> {to}",
                piece.color, piece.piece_type
            );
            return MoveResult::rejected(from, to);
        }

        self.apply_move(piece, from, to)
    }

    /// Resolve a pending promotion with the host's chosen piece type
    ///
    /// Destroys the pawn, spawns the chosen piece, then evaluates
    /// check/checkmate/stalemate/draw against the post-promotion material
    /// and advances the turn. Queen, Rook, Bishop and Knight are valid
    /// choices; pass Queen for the default.
    pub fn choose_promotion(
        &mut self,
        square: Square,
        piece_type: PieceType,
    ) -> GameResult<MoveResult> {
        let Some(pending) = self.pending_promotion else {
            return Err(GameError::NoPromotionPending);
        };
        if pending.to != square {
            return Err(GameError::PromotionSquareMismatch {
                expected: pending.to,
                got: square,
            });
        }
        if !piece_type.is_promotion_choice() {
            return Err(GameError::InvalidPromotionChoice { piece_type });
        }

        self.pending_promotion = None;

        // The pawn is destroyed; the promoted piece is a fresh piece
        // with a fresh id
        self.board.remove(square);
        let new_id = self.board.spawn(piece_type, pending.color, square);
        if let Some(promoted) = self.board.piece_mut(new_id) {
            promoted.has_moved = true;
        }
        info!(
            "[PROMOTION] {:?} pawn at {square} promoted to {piece_type:?}",
            pending.color
        );

        let mut result = MoveResult::accepted(pending.from, square);
        result.captured = pending.captured;
        result.is_promotion = true;
        result.promotion = Some(piece_type);
        self.finish_ply(PieceType::Pawn, pending.color, &mut result);
        Ok(result)
    }

    /// Every square the referenced piece can legally move to
    ///
    /// Built from the same predicates as [`Self::request_move`], so a
    /// highlighted destination is guaranteed to be accepted. Empty once
    /// the game is over, while a promotion is pending, or for a stale id.
    pub fn legal_destinations(&self, id: PieceId) -> Vec<Square> {
        if self.game_over.is_game_over() || self.pending_promotion.is_some() {
            return Vec::new();
        }
        match self.board.piece(id) {
            Some(piece) => legality::legal_destinations(&self.board, piece),
            None => Vec::new(),
        }
    }

    /// Drain the queued notifications, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether the given colour's king is currently attacked
    pub fn is_in_check(&self, color: PieceColor) -> bool {
        self.board
            .find_king(color)
            .is_some_and(|square| is_square_attacked(&self.board, square, color))
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> GameOverState {
        self.game_over
    }

    pub fn is_awaiting_promotion(&self) -> bool {
        self.pending_promotion.is_some()
    }

    pub fn pending_promotion(&self) -> Option<&PendingPromotion> {
        self.pending_promotion.as_ref()
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Apply an already-validated move and fire its side effects
    fn apply_move(&mut self, piece: Piece, from: Square, to: Square) -> MoveResult {
        let mut result = MoveResult::accepted(from, to);

        // Detect special shapes before mutating anything; both depend on
        // pre-move board state
        let en_passant = is_en_passant_capture(&self.board, &piece, from, to);
        let castling = is_castling_shape(&piece, from, to);
        let double_step =
            piece.piece_type == PieceType::Pawn && (to.y as i8 - from.y as i8).abs() == 2;

        // The en-passant victim stands beside the pawn, not on `to`
        let captured_square = if en_passant {
            Square::new(to.x, from.y)
        } else {
            to
        };
        result.captured = self.board.remove(captured_square).map(|taken| CapturedPiece {
            id: taken.id,
            piece_type: taken.piece_type,
            color: taken.color,
            square: captured_square,
        });
        result.is_en_passant = en_passant;

        self.board.place(piece.id, to);
        if let Some(moved) = self.board.piece_mut(piece.id) {
            moved.has_moved = true;
        }

        if castling {
            let (rook_from, rook_to) = castling_rook_move(from, to);
            if let Some(rook_id) = self.board.piece_at(rook_from).map(|rook| rook.id) {
                self.board.place(rook_id, rook_to);
                if let Some(rook) = self.board.piece_mut(rook_id) {
                    rook.has_moved = true;
                }
                result.is_castling = true;
                result.rook_from = Some(rook_from);
                result.rook_to = Some(rook_to);
            }
        }

        // The en-passant window of the previous ply closes now; at most
        // one pawn per colour ever carries the flag
        self.board.clear_double_step_flags();
        if double_step {
            if let Some(moved) = self.board.piece_mut(piece.id) {
                moved.just_double_stepped = true;
            }
        }

        info!(
            "[GAME] {:?} {:?} moved {from} -> {to}",
            piece.color, piece.piece_type
        );

        if piece.piece_type == PieceType::Pawn && to.y == piece.color.promotion_rank() {
            self.pending_promotion = Some(PendingPromotion {
                pawn_id: piece.id,
                color: piece.color,
                from,
                to,
                captured: result.captured,
            });
            result.is_promotion = true;
            result.promotion = Some(PieceType::Queen);
            self.events.push(GameEvent::PromotionRequested { square: to });
            info!("[PROMOTION] {:?} pawn at {to} awaits a choice", piece.color);
            return result;
        }

        self.finish_ply(piece.piece_type, piece.color, &mut result);
        result
    }

    /// Evaluate the position for the replying side, record the ply and
    /// hand the turn over
    fn finish_ply(&mut self, moved: PieceType, mover: PieceColor, result: &mut MoveResult) {
        let opponent = mover.opponent();
        result.is_check = self.is_in_check(opponent);

        let ending = evaluate_ending(&self.board, opponent);
        if ending.is_checkmate {
            result.is_checkmate = true;
            self.phase = GamePhase::Checkmate;
            self.game_over = match mover {
                PieceColor::White => GameOverState::WhiteWon,
                PieceColor::Black => GameOverState::BlackWon,
            };
            self.events.push(GameEvent::Checkmate { winner: mover });
            info!("[GAME] ========== CHECKMATE ==========");
            info!("[GAME] {}", self.game_over.message());
        } else if ending.is_stalemate {
            result.is_stalemate = true;
            self.phase = GamePhase::Stalemate;
            self.game_over = GameOverState::Stalemate;
            self.events.push(GameEvent::Stalemate);
            info!("[GAME] ========== STALEMATE ==========");
            info!("[GAME] {:?} has no legal moves but is not in check", opponent);
        } else if has_insufficient_material(&self.board) {
            result.is_draw = true;
            self.phase = GamePhase::Draw;
            self.game_over = GameOverState::InsufficientMaterial;
            self.events.push(GameEvent::Draw);
            info!("[GAME] {}", self.game_over.message());
        } else if result.is_check {
            self.phase = GamePhase::Check;
            info!("[GAME] {:?} is in check", opponent);
        } else {
            self.phase = GamePhase::Playing;
        }

        self.history.add_move(MoveRecord {
            piece_type: moved,
            piece_color: mover,
            from: result.from,
            to: result.to,
            captured: result.captured.map(|taken| taken.piece_type),
            is_castling: result.is_castling,
            is_en_passant: result.is_en_passant,
            is_promotion: result.is_promotion,
            is_check: result.is_check,
            is_checkmate: result.is_checkmate,
        });

        self.board.switch_turn();
    }
}
