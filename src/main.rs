use std::env;

use anyhow::{Context, Result, bail};
use planar_core::{Color, Move, MoveMode, Position, STARTING_FEN, Square, legal_moves};
use tracing::{debug, info};

const USAGE: &str = "usage: planar [FEN|-] [square|move]";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let fen = match args.next() {
        None => STARTING_FEN.to_string(),
        Some(arg) if arg == "-" => STARTING_FEN.to_string(),
        Some(arg) => arg,
    };
    let query = args.next();
    if args.next().is_some() {
        bail!(USAGE);
    }

    let position: Position = fen
        .parse()
        .with_context(|| format!("failed to parse FEN {fen:?}"))?;
    position.validate().context("position is inconsistent")?;
    info!(%position, "loaded position");

    let side = position.side_to_move();
    println!("{}", position.pretty());
    println!();
    println!("fen:     {position}");
    println!("to move: {}", side_name(side));
    println!("status:  {}", position.status());

    match query.as_deref() {
        None => {
            let moves = legal_moves(&position, side);
            debug!(count = moves.len(), "enumerated legal moves");
            println!("moves:   {}", join(moves));
        }
        Some(arg) if arg.len() == 2 => {
            let source = Square::from_algebraic(arg)
                .with_context(|| format!("invalid square {arg:?}"))?;
            let piece = position.piece_at(source);
            let dests = position.destinations(source, MoveMode::Legal);
            println!("{source} ({piece}): {}", join(dests.squares()));
        }
        Some(arg) => {
            let mv = Move::from_coordinate(arg)
                .with_context(|| format!("invalid move {arg:?}; {USAGE}"))?;
            let verdict = if position.is_move_valid(mv.source(), mv.dest()) {
                "legal"
            } else {
                "illegal"
            };
            println!("{mv}: {verdict}");
        }
    }

    Ok(())
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    let items: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(" ")
    }
}
