//! Error types for game logic
//!
//! Illegal moves are not errors - they come back as
//! `MoveResult { valid: false }`. [`GameError`] covers caller-contract
//! violations around the promotion sub-state, where silently returning a
//! rejection would hide a host bug.

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Promotion resolution attempted with none pending
    #[error("no promotion is pending")]
    NoPromotionPending,

    /// Promotion resolution named the wrong square
    #[error("promotion pending at {expected}, got {got}")]
    PromotionSquareMismatch {
        expected: crate::types::Square,
        got: crate::types::Square,
    },

    /// A pawn cannot promote to the given piece type
    #[error("{piece_type:?} is not a valid promotion choice")]
    InvalidPromotionChoice {
        piece_type: crate::types::PieceType,
    },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
