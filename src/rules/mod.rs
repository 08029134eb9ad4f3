//! Chess rules - pure move validation without host coupling
//!
//! Implements move validation, attack detection and game-end evaluation
//! as pure functions over a [`crate::board::BoardState`] snapshot, so the
//! whole rule set is unit-testable without any host infrastructure.
//!
//! # Module Structure
//!
//! - `piece_moves` - geometric movement rules per piece type, including
//!   the castling shape and en-passant geometry
//! - `attacks` - "is this square attacked" primitive; distinct from move
//!   validity (pawns attack diagonally only, no empty-destination rule)
//! - `legality` - combines geometry with a scratch-board simulation to
//!   reject moves that leave the mover's own king in check
//! - `endgame` - checkmate/stalemate/insufficient-material evaluation
//!
//! # Layering
//!
//! `attacks` is a primitive of `legality`; it never calls back into the
//! simulation. `endgame` enumerates candidate replies through `legality`
//! and stops at the first legal one.

pub mod attacks;
pub mod endgame;
pub mod legality;
pub mod piece_moves;


// Re-export commonly used items
pub use attacks::is_square_attacked;
pub use endgame::{evaluate_ending, has_insufficient_material, Ending};
pub use legality::{has_any_legal_move, is_legal_move, is_move_allowed, legal_destinations};
pub use piece_moves::is_valid_move;
