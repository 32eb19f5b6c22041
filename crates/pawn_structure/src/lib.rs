//! Pawn Structure Hash
//!
//! Scores the pawn skeleton of a position and memoizes the result per pawn
//! fingerprint, together with a lazily computed king shelter/storm score.
//!
//! ```no_run
//! use chess_core::{Color, Position};
//! use pawn_structure::PawnTable;
//!
//! let pos = Position::startpos();
//! let mut table = PawnTable::new();
//! let entry = table.probe(&pos);
//! let structure = entry.score();
//! entry.refresh_king_safety(&pos, Color::White);
//! let shelter = entry.king_safety(&pos, Color::White);
//! # let _ = (structure, shelter);
//! ```

mod config;
mod entry;
mod king_safety;
mod pawns;
mod score;
mod table;

pub use config::{ConfigError, DEFAULT_CAPACITY, PawnConfig, PawnTableConfig};
pub use entry::Entry;
pub use king_safety::{KING_PAWN_DISTANCE_PENALTY, MAX_SAFETY_BONUS, shelter_storm};
pub use pawns::{
    BACKWARD, CENTER_BIND, CONNECTED, ConnectedBonus, DOUBLED, ISOLATED, LEVER, PawnFlags,
    UNSUPPORTED, compute_entry, evaluate_side,
};
pub use score::Score;
pub use table::{PawnTable, TableStats};
