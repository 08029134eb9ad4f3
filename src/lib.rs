//! Rules engine for a two-player, same-device chess game
//!
//! Tracks board state, validates and applies moves, and detects check,
//! checkmate, stalemate and insufficient-material draws. Rendering,
//! input translation and UI are the host's concern: it drives the engine
//! through [`game::ChessGame::request_move`] and mirrors the returned
//! [`moves::MoveResult`] deltas, draining [`events::GameEvent`]
//! notifications as they fire.
//!
//! ```
//! use chess_logic::{ChessGame, Square};
//!
//! let mut game = ChessGame::new();
//! // White's king pawn, two squares forward
//! let pawn = game.board().piece_at(Square::new(4, 6)).unwrap().id;
//! let result = game.request_move(pawn, Square::new(4, 6), Square::new(4, 4));
//! assert!(result.valid);
//! ```
//!
//! Coordinates are (x, y) with x the file (0 = 'a') and y the rank
//! counted from Black's side: y = 0 is Black's back rank, y = 7 White's.

pub mod board;
pub mod error;
pub mod events;
pub mod game;
pub mod moves;
pub mod pieces;
pub mod rules;
pub mod state;
pub mod types;

pub use board::BoardState;
pub use error::{GameError, GameResult};
pub use events::GameEvent;
pub use game::ChessGame;
pub use moves::{CapturedPiece, MoveHistory, MoveRecord, MoveResult};
pub use pieces::{Piece, PieceId};
pub use state::{GameOverState, GamePhase, PendingPromotion};
pub use types::{PieceColor, PieceType, Square};
