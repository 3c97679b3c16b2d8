use std::path::PathBuf;

use xiangqi_rules::search::perft::{divide, perft};
use xiangqi_rules::{Board, Setup, Side};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: perft <depth> [setup.json] [--divide]");
        std::process::exit(2);
    }

    let depth: u32 = match args[1].parse() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("invalid depth {}: {e}", args[1]);
            std::process::exit(2);
        }
    };

    let mut show_divide = false;
    let mut setup_path: Option<PathBuf> = None;
    for a in &args[2..] {
        match a.as_str() {
            "--divide" => show_divide = true,
            p => setup_path = Some(PathBuf::from(p)),
        }
    }

    let (board, side) = match setup_path {
        None => (Board::initial(), Side::Red),
        Some(path) => {
            let setup = match Setup::from_path(&path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Failed to load {}: {e}", path.display());
                    std::process::exit(2);
                }
            };
            match Board::from_setup(&setup) {
                Ok(b) => (b, setup.to_move),
                Err(e) => {
                    eprintln!("Invalid setup {}: {e}", path.display());
                    std::process::exit(2);
                }
            }
        }
    };

    println!("{board}");
    println!("{side:?} to move");

    if show_divide {
        let mut split: Vec<_> = divide(&board, side, depth).into_iter().collect();
        split.sort();
        for (mv, n) in &split {
            println!("  {mv}: {n}");
        }
        println!("Moves: {}", split.len());
    }

    for d in 1..=depth {
        println!("perft({d}) = {}", perft(&board, side, d));
    }
}
