use super::*;

#[test]
fn test_from_square() {
    assert_eq!(Bitboard::from_square(0).0, 1); // a1
    assert_eq!(Bitboard::from_square(7).0, 128); // h1
    assert_eq!(Bitboard::from_square(63).0, 1 << 63); // h8
}

#[test]
fn test_popcount() {
    assert_eq!(Bitboard::EMPTY.popcount(), 0);
    assert_eq!(Bitboard::from_square(0).popcount(), 1);
    assert_eq!(Bitboard::FILE_A.popcount(), 8);
    assert_eq!(Bitboard::RANK_1.popcount(), 8);
    assert_eq!(Bitboard::ALL.popcount(), 64);
    assert_eq!(Bitboard::DARK_SQUARES.popcount(), 32);
    assert!(Bitboard::DARK_SQUARES.contains(0)); // a1 is dark
    assert!(!Bitboard::DARK_SQUARES.contains(7)); // h1 is light
}

#[test]
fn test_iterator() {
    let bb = Bitboard(0b1010);
    let squares: Vec<u8> = bb.collect();
    assert_eq!(squares, vec![1, 3]);
}

#[test]
fn test_lsb_msb_and_more_than_one() {
    assert_eq!(Bitboard::EMPTY.msb(), None);
    assert_eq!(Bitboard(0b1010).lsb(), Some(1));
    assert_eq!(Bitboard(0b1010).msb(), Some(3));
    assert!(Bitboard(0b1010).more_than_one());
    assert!(!Bitboard(0b1000).more_than_one());
    assert!(!Bitboard::EMPTY.more_than_one());
}

#[test]
fn test_shifts() {
    let a1 = Bitboard::from_square(0);
    assert_eq!(a1.north(), Bitboard::from_square(8));
    assert_eq!(a1.east(), Bitboard::from_square(1));
    assert_eq!(a1.west(), Bitboard::EMPTY); // Wraps off board

    let h1 = Bitboard::from_square(7);
    assert_eq!(h1.east(), Bitboard::EMPTY); // Wraps off board
    assert_eq!(h1.west(), Bitboard::from_square(6));
}

#[test]
fn test_relative_shifts() {
    let e4 = Bitboard::from_square(28);
    assert_eq!(e4.shift_up(Color::White), Bitboard::from_square(36)); // e5
    assert_eq!(e4.shift_up(Color::Black), Bitboard::from_square(20)); // e3
    assert_eq!(e4.shift_down(Color::White), Bitboard::from_square(20));

    // White pawn on e4 attacks d5 and f5, black pawn on e4 attacks d3 and f3
    let white = e4.pawn_attacks_bb(Color::White);
    assert_eq!(white, Bitboard::from_square(35) | Bitboard::from_square(37));
    let black = e4.pawn_attacks_bb(Color::Black);
    assert_eq!(black, Bitboard::from_square(19) | Bitboard::from_square(21));

    // Edge pawns only attack inward
    let a2 = Bitboard::from_square(8);
    assert_eq!(a2.pawn_attacks_bb(Color::White), Bitboard::from_square(17));
}

#[test]
fn test_file_rank_masks() {
    assert_eq!(file_bb(0), Bitboard::FILE_A);
    assert_eq!(file_bb(7), Bitboard::FILE_H);
    assert_eq!(rank_bb(0), Bitboard::RANK_1);
    assert_eq!(rank_bb(7), Bitboard::RANK_8);
    assert_eq!(adjacent_files_bb(0), Bitboard::FILE_B);
    assert_eq!(adjacent_files_bb(4), Bitboard::FILE_D | Bitboard::FILE_F);
    assert_eq!(adjacent_files_bb(7), Bitboard::FILE_G);
}

#[test]
fn test_frontmost_backmost() {
    // Pawns on e2 and e5
    let bb = Bitboard::from_square(12) | Bitboard::from_square(36);
    assert_eq!(frontmost_sq(Color::White, bb), Some(36));
    assert_eq!(backmost_sq(Color::White, bb), Some(12));
    assert_eq!(frontmost_sq(Color::Black, bb), Some(12));
    assert_eq!(backmost_sq(Color::Black, bb), Some(36));
    assert_eq!(frontmost_sq(Color::White, Bitboard::EMPTY), None);
}
