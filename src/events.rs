//! Outbound notifications to the host
//!
//! Events are queued synchronously at the point of determination and
//! drained by the host via [`crate::game::ChessGame::take_events`]; the
//! core has no callback into the UI layer.

use crate::types::{PieceColor, Square};
use serde::{Deserialize, Serialize};

/// A game-state notification for the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The last move delivered checkmate
    Checkmate { winner: PieceColor },
    /// The side to move has no legal reply and is not in check
    Stalemate,
    /// Neither side can force mate with the remaining material
    Draw,
    /// A pawn reached the back rank; the host must supply a promotion
    /// choice before the game continues
    PromotionRequested { square: Square },
}
