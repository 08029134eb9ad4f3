//! Game-state tracking: phase, game-over result, pending promotion
//!
//! Derived presentation state updated after every ply. The authoritative
//! position lives in [`crate::board::BoardState`]; these types exist so
//! the host can gate input and display results without re-deriving
//! anything.

use crate::moves::CapturedPiece;
use crate::pieces::PieceId;
use crate::types::{PieceColor, Square};

/// Phase of the game as of the last evaluation
///
/// ```text
/// Playing <-> Check -> Checkmate | Stalemate | Draw
/// ```
///
/// Checkmate, Stalemate and Draw are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    /// The side to move is in check but has a legal reply
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

/// Resource tracking the game's end state
///
/// Starts as `Playing` and transitions to a terminal state when the game
/// ends. Once set to any non-Playing state, further moves are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,
    /// White won by checkmate
    WhiteWon,
    /// Black won by checkmate
    BlackWon,
    /// The side to move has no legal moves but is not in check
    Stalemate,
    /// Neither player can deliver checkmate with the remaining material
    InsufficientMaterial,
}

impl GameOverState {
    /// Whether the game has reached a terminal state
    pub fn is_game_over(&self) -> bool {
        *self != GameOverState::Playing
    }

    /// The winning colour, `None` while playing or on a draw
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOverState::WhiteWon => Some(PieceColor::White),
            GameOverState::BlackWon => Some(PieceColor::Black),
            _ => None,
        }
    }

    /// Human-readable result message for the host UI
    pub fn message(&self) -> &'static str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::WhiteWon => "Checkmate! White wins",
            GameOverState::BlackWon => "Checkmate! Black wins",
            GameOverState::Stalemate => "Draw by stalemate",
            GameOverState::InsufficientMaterial => "Draw by insufficient material",
        }
    }
}

/// The "waiting for promotion choice" sub-state
///
/// Captured at the moment a pawn lands on the back rank. Turn advancement
/// and ending evaluation pause until the host supplies a choice; the
/// capture made by the pawn move (if any) is kept here so the final
/// [`crate::moves::MoveResult`] can report it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingPromotion {
    pub pawn_id: PieceId,
    pub color: PieceColor,
    pub from: Square,
    pub to: Square,
    pub(crate) captured: Option<CapturedPiece>,
}
