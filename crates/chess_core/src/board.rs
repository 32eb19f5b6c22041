use thiserror::Error;

use crate::bitboard::Bitboard;
use crate::types::*;
use crate::zobrist::ZOBRIST;

/// Per-side castling flag: castling toward the h-file.
pub const KING_SIDE: u8 = 0b01;
/// Per-side castling flag: castling toward the a-file.
pub const QUEEN_SIDE: u8 = 0b10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        CastlingRights {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    /// Rights still held by `c`, as a combination of `KING_SIDE` and `QUEEN_SIDE`.
    pub fn for_side(&self, c: Color) -> u8 {
        let (k, q) = match c {
            Color::White => (self.wk, self.wq),
            Color::Black => (self.bk, self.bq),
        };
        (if k { KING_SIDE } else { 0 }) | (if q { QUEEN_SIDE } else { 0 })
    }

    /// Drop the given `KING_SIDE` / `QUEEN_SIDE` rights of `c`.
    pub fn revoke(&mut self, c: Color, rights: u8) {
        let (k, q) = match c {
            Color::White => (&mut self.wk, &mut self.wq),
            Color::Black => (&mut self.bk, &mut self.bq),
        };
        if rights & KING_SIDE != 0 {
            *k = false;
        }
        if rights & QUEEN_SIDE != 0 {
            *q = false;
        }
    }
}

/// Errors produced while parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 fields, found {0}")]
    MissingFields(usize),
    #[error("expected 8 ranks in board section, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: u8 },
    #[error("invalid piece character '{0}'")]
    PieceChar(char),
    #[error("pawn on back rank square {0}")]
    PawnOnBackRank(String),
    #[error("invalid side to move '{0}'")]
    SideToMove(String),
    #[error("invalid castling character '{0}'")]
    CastlingChar(char),
    #[error("invalid en passant square '{0}'")]
    EnPassant(String),
    #[error("invalid move counter '{0}'")]
    Counter(String),
}

/// Board state consumed by the pawn evaluation.
///
/// Keeps a mailbox for square lookups plus one bitboard per (color, piece
/// kind). The pawn fingerprint is updated incrementally by `set_piece`.
#[derive(Clone, Debug)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    by_piece: [[Bitboard; 6]; 2],
    pawn_key: u64,
}

impl Position {
    /// A board with no pieces, White to move and no castling rights.
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::default(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            by_piece: [[Bitboard::EMPTY; 6]; 2],
            pawn_key: ZOBRIST.no_pawns,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();
        p.castling = CastlingRights::all();

        // Pawns
        for f in 0..8u8 {
            p.set_piece(
                8 + f,
                Some(Piece {
                    color: Color::White,
                    kind: PieceKind::Pawn,
                }),
            );
            p.set_piece(
                48 + f,
                Some(Piece {
                    color: Color::Black,
                    kind: PieceKind::Pawn,
                }),
            );
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            let f = f as u8;
            p.set_piece(
                f,
                Some(Piece {
                    color: Color::White,
                    kind,
                }),
            );
            p.set_piece(
                56 + f,
                Some(Piece {
                    color: Color::Black,
                    kind,
                }),
            );
        }
        p
    }

    /// Forsyth-Edwards Notation parser used by tests and the report tool.
    ///
    /// The move counters are optional and default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut pos = Position::empty();
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = PieceKind::from_char(ch).ok_or(FenError::PieceChar(ch))?;
                    let s = sq(file, rank).ok_or(FenError::RankWidth {
                        rank: rank as u8 + 1,
                    })?;
                    if kind == PieceKind::Pawn && (rank == 0 || rank == 7) {
                        return Err(FenError::PawnOnBackRank(sq_to_coord(s)));
                    }
                    pos.set_piece(s, Some(Piece { color, kind }));
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankWidth {
                        rank: rank as u8 + 1,
                    });
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth {
                    rank: rank as u8 + 1,
                });
            }
        }

        pos.side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(FenError::SideToMove(stm_part.to_string())),
        };

        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => pos.castling.wk = true,
                    'Q' => pos.castling.wq = true,
                    'k' => pos.castling.bk = true,
                    'q' => pos.castling.bq = true,
                    _ => return Err(FenError::CastlingChar(c)),
                }
            }
        }

        pos.en_passant = if ep_part == "-" {
            None
        } else {
            Some(coord_to_sq(ep_part).ok_or_else(|| FenError::EnPassant(ep_part.to_string()))?)
        };

        pos.halfmove_clock = halfmove_part
            .parse()
            .map_err(|_| FenError::Counter(halfmove_part.to_string()))?;
        pos.fullmove_number = fullmove_part
            .parse()
            .map_err(|_| FenError::Counter(fullmove_part.to_string()))?;

        Ok(pos)
    }

    /// Bitboard of all pieces of `kind` belonging to `c`.
    #[inline(always)]
    pub fn pieces(&self, c: Color, kind: PieceKind) -> Bitboard {
        self.by_piece[c.idx()][kind.idx()]
    }

    /// Fingerprint of the pawn placement only.
    #[inline(always)]
    pub fn pawn_key(&self) -> u64 {
        self.pawn_key
    }

    /// Recompute the pawn fingerprint from scratch. Always equals `pawn_key()`.
    pub fn compute_pawn_key(&self) -> u64 {
        ZOBRIST.pawn_fingerprint(
            self.pieces(Color::White, PieceKind::Pawn),
            self.pieces(Color::Black, PieceKind::Pawn),
        )
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        self.pieces(c, PieceKind::King).lsb()
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    /// Place (or clear, with `None`) a piece, keeping bitboards and the pawn
    /// fingerprint in sync with the mailbox.
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        if let Some(old) = self.board[sq as usize] {
            self.by_piece[old.color.idx()][old.kind.idx()].clear(sq);
            if old.kind == PieceKind::Pawn {
                self.pawn_key ^= ZOBRIST.pawn_key(old.color, sq);
            }
        }
        if let Some(new) = pc {
            self.by_piece[new.color.idx()][new.kind.idx()].set(sq);
            if new.kind == PieceKind::Pawn {
                self.pawn_key ^= ZOBRIST.pawn_key(new.color, sq);
            }
        }
        self.board[sq as usize] = pc;
    }

    /// Move whatever stands on `from` to `to`, capturing anything on `to`.
    /// No legality checks; castling rights are left untouched.
    pub fn relocate(&mut self, from: u8, to: u8) {
        let pc = self.piece_at(from);
        self.set_piece(from, None);
        self.set_piece(to, pc);
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
