//! Mutable game model: pieces, players, match state, history.

pub mod piece;
pub mod player;
pub mod record;
pub mod state;

pub use piece::{Piece, PieceId, PieceRef, PieceState, Position};
pub use player::Player;
pub use record::MoveRecord;
pub use state::MatchState;
