//! Pawn structure report
//!
//! Probes a pawn table for each FEN given on the command line and prints the
//! cached entry.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chess_core::{Bitboard, Color, Position, sq_to_coord};
use pawn_structure::{PawnConfig, PawnTable, Score};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Pawn structure report");
    println!();
    println!("Usage:");
    println!("  pawn_report [--config <file.toml>] <FEN>...");
    println!();
    println!("Options:");
    println!("  --config, -c  TOML file with a [pawn_table] section");
    println!();
    println!("Logging is controlled by RUST_LOG (default: info).");
    println!();
    println!("Examples:");
    println!("  pawn_report \"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1\"");
    println!("  RUST_LOG=pawn_structure=trace pawn_report -c pawns.toml \"8/5pk1/6p1/3P4/8/8/5PK1/8 w - - 0 1\"");
}

struct Args {
    config: Option<PathBuf>,
    fens: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut config = None;
    let mut fens = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--config requires a file path");
                };
                config = Some(PathBuf::from(path));
                i += 1;
            }
            other => fens.push(other.to_string()),
        }
        i += 1;
    }

    Ok(Args { config, fens })
}

fn squares(bb: Bitboard) -> String {
    if bb.is_empty() {
        return "-".to_string();
    }
    bb.map(sq_to_coord).collect::<Vec<_>>().join(" ")
}

fn fmt_score(s: Score) -> String {
    format!("{:+} mg / {:+} eg", s.mg, s.eg)
}

fn report(table: &mut PawnTable, fen: &str) -> Result<()> {
    let pos = Position::from_fen(fen).with_context(|| format!("invalid FEN: {fen}"))?;
    let entry = table.probe(&pos);

    println!("FEN:          {fen}");
    println!(
        "To move:      {:?} (move {}, halfmove clock {})",
        pos.side_to_move, pos.fullmove_number, pos.halfmove_clock
    );
    println!("Pawn key:     {:016x}", entry.key());
    println!("Structure:    {}", fmt_score(entry.score()));
    for c in Color::ALL {
        entry.refresh_king_safety(&pos, c);
        println!("  {c:?}:");
        println!("    pawns:       {}", fmt_score(entry.pawn_score(c)));
        println!("    passed:      {}", squares(entry.passed_pawns(c)));
        println!("    outposts:    {}", squares(entry.outpost_squares(c)));
        println!("    pawn span:   {}", entry.pawn_span(c));
        println!("    king safety: {}", fmt_score(entry.king_safety(&pos, c)));
    }
    println!();
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let args = parse_args(&args)?;
    let config = match &args.config {
        Some(path) => PawnConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PawnConfig::default(),
    };
    let mut table = PawnTable::from_config(&config)?;
    info!(capacity = table.capacity(), positions = args.fens.len(), "pawn table ready");

    for fen in &args.fens {
        report(&mut table, fen)?;
    }

    let stats = table.stats();
    println!("Table: {} hits, {} misses", stats.hits, stats.misses);
    Ok(())
}
