#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub const fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub const fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const fn idx(self) -> usize {
        self as usize
    }

    pub fn from_char(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

// Helpers
pub const fn file_of(sq: u8) -> u8 {
    sq % 8
}
pub const fn rank_of(sq: u8) -> u8 {
    sq / 8
}
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank as u8) * 8 + (file as u8))
    } else {
        None
    }
}

/// Rank as seen from `c`'s side of the board (0 = own back rank).
#[inline(always)]
pub const fn relative_rank(c: Color, rank: u8) -> u8 {
    match c {
        Color::White => rank,
        Color::Black => 7 - rank,
    }
}

/// Mirror a white-side square for `c` (e.g. g1 -> g8 for Black).
#[inline(always)]
pub const fn relative_square(c: Color, sq: u8) -> u8 {
    match c {
        Color::White => sq,
        Color::Black => sq ^ 56,
    }
}

/// King distance between two squares.
#[inline(always)]
pub const fn distance(a: u8, b: u8) -> u8 {
    let fd = file_distance(a, b);
    let rd = rank_distance(a, b);
    if fd > rd { fd } else { rd }
}

#[inline(always)]
pub const fn file_distance(a: u8, b: u8) -> u8 {
    file_of(a).abs_diff(file_of(b))
}

#[inline(always)]
pub const fn rank_distance(a: u8, b: u8) -> u8 {
    rank_of(a).abs_diff(rank_of(b))
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let file = f - b'a';
    let rank = r - b'1';
    Some(rank * 8 + file)
}
