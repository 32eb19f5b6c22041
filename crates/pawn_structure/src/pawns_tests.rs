use super::*;
use chess_core::coord_to_sq;

fn sq(c: &str) -> u8 {
    coord_to_sq(c).unwrap()
}

fn pawns(coords: &[&str]) -> Bitboard {
    coords
        .iter()
        .fold(Bitboard::EMPTY, |acc, c| acc | Bitboard::from_square(sq(c)))
}

fn entry_for(fen: &str) -> Entry {
    let pos = Position::from_fen(fen).unwrap();
    let mut e = Entry::default();
    compute_entry(&pos, &mut e);
    e
}

#[test]
fn test_connected_table_from_seed() {
    // Plain supported pawn on the 2nd rank: seed 6
    assert_eq!(CONNECTED.get(false, false, false, 1), Score::new(9, 6));
    // Phalanx on the 4th rank: 10 + (57 - 10) / 2 = 33
    assert_eq!(CONNECTED.get(false, true, false, 3), Score::new(49, 33));
    // Opposed halves the value
    assert_eq!(CONNECTED.get(true, false, false, 1), Score::new(4, 3));
    // Second supporter adds half again
    assert_eq!(CONNECTED.get(false, false, true, 1), Score::new(13, 9));
    // Nothing on the first and last rank
    assert_eq!(CONNECTED.get(false, true, true, 0), Score::ZERO);
    assert_eq!(CONNECTED.get(false, true, true, 7), Score::ZERO);
}

#[test]
fn test_passed_pawn() {
    let white = pawns(&["e5"]);
    let black = pawns(&["a7"]);
    let flags = PawnFlags::classify(Color::White, sq("e5"), white, black);
    assert!(flags.passed);

    // A black pawn on f7 covers f6, which e5 must cross to promote
    let black = pawns(&["a7", "f7"]);
    let flags = PawnFlags::classify(Color::White, sq("e5"), white, black);
    assert!(!flags.passed);
}

#[test]
fn test_passed_pawn_for_black() {
    let black = pawns(&["d4"]);
    let white = pawns(&["h2"]);
    assert!(PawnFlags::classify(Color::Black, sq("d4"), black, white).passed);

    let white = pawns(&["h2", "c2"]);
    assert!(!PawnFlags::classify(Color::Black, sq("d4"), black, white).passed);
}

#[test]
fn test_only_frontmost_passer_recorded() {
    // Doubled passers on the e-file: only e5 is flagged
    let e = entry_for("4k3/8/8/4P3/8/4P3/8/4K3 w - - 0 1");
    assert_eq!(e.passed_pawns(Color::White), pawns(&["e5"]));
    assert_eq!(e.passed_count(), 1);
}

#[test]
fn test_isolated_pawn() {
    let white = pawns(&["a2", "c2"]);
    let flags = PawnFlags::classify(Color::White, sq("a2"), white, Bitboard::EMPTY);
    assert!(flags.isolated);
    assert!(!flags.backward);
    assert!(!flags.connected);
}

#[test]
fn test_backward_pawn() {
    // e3 trails its neighbour on d4 and the push to e4 runs into f5
    let white = pawns(&["d4", "e3"]);
    let black = pawns(&["f5"]);
    let flags = PawnFlags::classify(Color::White, sq("e3"), white, black);
    assert!(flags.backward);
    assert!(!flags.isolated);
    assert!(!flags.connected);
    assert!(flags.opposed.is_empty());
    assert_eq!(flags.score(Color::White, sq("e3")), -BACKWARD[0][4]);

    // d4 is supported by e3 and is passed (f5 is outside its path)
    let flags = PawnFlags::classify(Color::White, sq("d4"), white, black);
    assert!(flags.connected);
    assert!(flags.passed);
    assert!(!flags.backward);
}

#[test]
fn test_friendly_pawn_behind_prevents_backward() {
    // Same as above plus a white pawn on f2 behind e3
    let white = pawns(&["d4", "e3", "f2"]);
    let black = pawns(&["f5"]);
    let flags = PawnFlags::classify(Color::White, sq("e3"), white, black);
    assert!(!flags.backward);
}

#[test]
fn test_lever_bonus_by_rank() {
    let white = pawns(&["e5"]);
    let black = pawns(&["d6"]);
    let flags = PawnFlags::classify(Color::White, sq("e5"), white, black);
    assert_eq!(flags.lever, pawns(&["d6"]));
    // Isolated, unopposed, lever on the 5th rank
    assert_eq!(
        flags.score(Color::White, sq("e5")),
        LEVER[4] - ISOLATED[0][4]
    );
}

#[test]
fn test_phalanx_and_support() {
    let white = pawns(&["d4", "e4", "c3"]);
    let flags = PawnFlags::classify(Color::White, sq("d4"), white, Bitboard::EMPTY);
    assert_eq!(flags.phalanx, pawns(&["e4"]));
    assert_eq!(flags.supported, pawns(&["c3"]));
    assert!(flags.connected);
    assert_eq!(
        flags.score(Color::White, sq("d4")),
        CONNECTED.get(false, true, false, 3)
    );
}

#[test]
fn test_doubled_penalty_shrinks_with_distance() {
    // Isolated e-pawn doubled behind e7; move the rear pawn back rank by rank
    let mut previous: Option<Score> = None;
    for rear in ["e6", "e5", "e4", "e3", "e2"] {
        let white = pawns(&["e7", rear]);
        let flags = PawnFlags::classify(Color::White, sq(rear), white, Bitboard::EMPTY);
        assert!(flags.isolated);
        let score = flags.score(Color::White, sq(rear));
        if let Some(prev) = previous {
            assert!(score.mg > prev.mg, "{rear}: {score:?} vs {prev:?}");
            assert!(score.eg > prev.eg, "{rear}: {score:?} vs {prev:?}");
        }
        previous = Some(score);
    }
}

#[test]
fn test_startpos_scores() {
    let pos = Position::startpos();
    let mut e = Entry::default();
    compute_entry(&pos, &mut e);

    // Every pawn: opposed phalanx on the 2nd rank, unsupported
    let per_pawn = CONNECTED.get(true, true, false, 1) - UNSUPPORTED;
    assert_eq!(e.pawn_score(Color::White), per_pawn * 8);
    assert_eq!(e.pawn_score(Color::Black), per_pawn * 8);
    assert_eq!(e.score(), Score::ZERO);
    assert_eq!(e.key(), pos.pawn_key());

    assert_eq!(e.pawn_attacks(Color::White), Bitboard::RANK_3);
    assert_eq!(e.pawn_attacks(Color::Black), Bitboard::RANK_6);
    assert_eq!(e.passed_count(), 0);
    assert_eq!(e.pawn_span(Color::White), 7);
    assert!(!e.semiopen_file(Color::White, 0));
    assert_eq!(e.outpost_squares(Color::White), Bitboard::EMPTY);
    assert_eq!(e.outpost_squares(Color::Black), Bitboard::EMPTY);
}

#[test]
fn test_center_bind() {
    // d4 and f4 are isolated from each other but both hit e5
    let e = entry_for("4k3/8/8/8/3P1P2/8/8/4K3 w - - 0 1");
    let expected = CENTER_BIND - ISOLATED[0][3] - ISOLATED[0][5];
    assert_eq!(e.pawn_score(Color::White), expected);
    assert_eq!(e.pawn_score(Color::Black), Score::ZERO);
}

#[test]
fn test_semiopen_files_and_span() {
    let e = entry_for("4k3/6p1/8/8/8/8/1P4P1/4K3 w - - 0 1");
    assert!(e.semiopen_file(Color::White, 0));
    assert!(!e.semiopen_file(Color::White, 1));
    assert!(!e.semiopen_file(Color::White, 6));
    assert_eq!(e.pawn_span(Color::White), 5);
    // A single file means no span
    assert_eq!(e.pawn_span(Color::Black), 0);
}

#[test]
fn test_pawns_on_square_shades() {
    let e = entry_for("4k3/8/8/8/3PPP2/8/8/4K3 w - - 0 1");
    // d4 and f4 are dark, e4 is light
    assert_eq!(e.pawns_on_same_color_squares(Color::White, sq("c1")), 2);
    assert_eq!(e.pawns_on_same_color_squares(Color::White, sq("e4")), 1);
    assert_eq!(e.pawns_on_same_color_squares(Color::Black, sq("e4")), 0);
}

#[test]
fn test_attack_span_union() {
    let e = entry_for("4k3/8/8/8/8/8/P6P/4K3 w - - 0 1");
    let span = e.pawn_attacks_span(Color::White);
    assert!(span.contains(sq("b3")));
    assert!(span.contains(sq("b8")));
    assert!(span.contains(sq("g5")));
    assert!(!span.contains(sq("a3")));
    assert!(!span.contains(sq("e5")));
}

#[test]
fn test_opposed_outpost_exclusion_stops_past_blocker() {
    // White e2 blocked by black e4: d3, d4, f3, f4 are contested, d5 and f5 are not
    let e = entry_for("4k3/8/8/8/4p3/8/4P3/4K3 w - - 0 1");
    let black_outposts = e.outpost_squares(Color::Black);
    for contested in ["d3", "d4", "f3", "f4"] {
        assert!(!black_outposts.contains(sq(contested)), "{contested}");
    }
    for free in ["d5", "f5", "d6"] {
        assert!(black_outposts.contains(sq(free)), "{free}");
    }
}

#[test]
fn test_backward_outpost_exclusion_stops_at_blocker() {
    // g2 is backward: h3 is its nearest neighbour ahead and black h4 guards h3's
    // push square. It can still reach f3 and h3, but not past the h4 blocker.
    let white = pawns(&["g2", "h3"]);
    let black = pawns(&["h4"]);
    assert!(PawnFlags::classify(Color::White, sq("g2"), white, black).backward);

    let e = entry_for("4k3/8/8/8/7p/7P/6P1/4K3 w - - 0 1");
    let black_outposts = e.outpost_squares(Color::Black);
    assert!(!black_outposts.contains(sq("f3")));
    assert!(!black_outposts.contains(sq("h3")));
    assert!(black_outposts.contains(sq("f4")));
}

#[test]
fn test_backward_and_opposed_outpost_exclusion_uses_nearer_blocker() {
    // e3 is backward (f5 guards e4) and opposed by e4, which is the nearer
    // block, so only the 4th rank of its span stays contested.
    let white = pawns(&["d4", "e3"]);
    let black = pawns(&["e4", "f5"]);
    let flags = PawnFlags::classify(Color::White, sq("e3"), white, black);
    assert!(flags.backward);
    assert_eq!(flags.opposed, pawns(&["e4"]));

    let e = entry_for("4k3/8/8/5p2/3Pp3/4P3/8/4K3 w - - 0 1");
    let black_outposts = e.outpost_squares(Color::Black);
    for contested in ["d4", "f4"] {
        assert!(!black_outposts.contains(sq(contested)), "{contested}");
    }
    for free in ["d5", "f5"] {
        assert!(black_outposts.contains(sq(free)), "{free}");
    }
}

#[test]
fn test_no_pawns_is_neutral() {
    let e = entry_for("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(e.score(), Score::ZERO);
    assert_eq!(e.pawn_score(Color::White), Score::ZERO);
    assert_eq!(e.passed_count(), 0);
    assert_eq!(e.pawn_attacks(Color::White), Bitboard::EMPTY);
    assert_eq!(e.pawn_span(Color::White), 0);
    for f in 0..8 {
        assert!(e.semiopen_file(Color::White, f));
        assert!(e.semiopen_file(Color::Black, f));
    }
    // With no enemy pawns every square on ranks 3-6 is an outpost
    assert_eq!(e.outpost_squares(Color::White).popcount(), 32);
}

#[test]
fn test_classifications_are_exclusive() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "4k3/pp3ppp/2p5/3p4/3P4/2P1P3/PP3PPP/4K3 w - - 0 1",
        "4k3/p1p2p1p/1p4p1/3pP3/2P5/1P3P2/P5PP/4K3 w - - 0 1",
        "4k3/8/2p1p3/3p4/1P1P4/8/P3P3/4K3 w - - 0 1",
        "4k3/5p2/4p3/3pP3/3P4/8/8/4K3 b - - 0 1",
    ];
    for fen in fens {
        let pos = Position::from_fen(fen).unwrap();
        for us in Color::ALL {
            let ours = pos.pieces(us, PieceKind::Pawn);
            let theirs = pos.pieces(us.other(), PieceKind::Pawn);
            for s in ours {
                let flags = PawnFlags::classify(us, s, ours, theirs);
                assert!(!(flags.isolated && flags.backward), "{fen} {s}");
                assert!(!(flags.isolated && flags.connected), "{fen} {s}");
                assert!(!(flags.backward && flags.connected), "{fen} {s}");
                assert!(!(flags.backward && flags.passed), "{fen} {s}");
            }
        }
    }
}
