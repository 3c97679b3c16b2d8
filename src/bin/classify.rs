use std::path::PathBuf;

use xiangqi_rules::rules::attacks::is_threatened;
use xiangqi_rules::rules::legal::legal_moves;
use xiangqi_rules::{Game, Setup, Side};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: classify <setup.json>");
        std::process::exit(2);
    }

    let path = PathBuf::from(&args[1]);
    let setup = match Setup::from_path(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", path.display());
            std::process::exit(2);
        }
    };

    let game = match Game::from_setup(&setup) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Invalid setup {}: {e}", path.display());
            std::process::exit(2);
        }
    };

    let board = &game.board;
    let threatened = |side: Side| is_threatened(board, side);
    let out = serde_json::json!({
        "to_move": game.to_move,
        "ruleset": game.ruleset,
        "status": game.status(),
        "outcome": game.outcome(),
        "threatened": {
            "red": threatened(Side::Red),
            "black": threatened(Side::Black),
        },
        "legal_moves": legal_moves(board, game.to_move),
    });

    match serde_json::to_string_pretty(&out) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode result: {e}");
            std::process::exit(1);
        }
    }
}
