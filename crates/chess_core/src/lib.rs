//! Board geometry and position state shared by the evaluation crates.
//!
//! Provides bitboards with colour-relative shifts, pre-computed pawn span
//! tables, a minimal position with an incrementally maintained pawn
//! fingerprint, and FEN parsing. There is no move generator here.

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod types;
pub mod zobrist;

pub use attacks::*;
pub use bitboard::*;
pub use board::*;
pub use types::*;
pub use zobrist::ZOBRIST;
