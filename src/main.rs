use std::env;
use std::process::ExitCode;

use chess_analysis::{Engine, SearchConfig};

const USAGE: &str =
    "usage: chess-analysis <fen> [--depth N] [--color white|black] [--seed S]";

struct Args {
    fen: String,
    depth: Option<u32>,
    black_player: bool,
    seed: Option<u64>,
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut fen_parts: Vec<&str> = Vec::new();
    let mut depth = None;
    let mut black_player = false;
    let mut seed = None;

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--depth" => {
                let value = iter.next().ok_or("--depth needs a value")?;
                depth = Some(value.parse().map_err(|_| format!("bad depth '{value}'"))?);
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                seed = Some(value.parse().map_err(|_| format!("bad seed '{value}'"))?);
            }
            "--color" => {
                let value = iter.next().ok_or("--color needs a value")?;
                black_player = match value.as_str() {
                    "white" => false,
                    "black" => true,
                    other => return Err(format!("bad color '{other}'")),
                };
            }
            // A FEN may arrive quoted as one argument or split on spaces.
            other => fen_parts.push(other),
        }
    }

    if fen_parts.is_empty() {
        return Err("missing FEN".to_string());
    }
    Ok(Args {
        fen: fen_parts.join(" "),
        depth,
        black_player,
        seed,
    })
}

/// Signed pawns with two decimals, e.g. `+0.35`.
fn format_score(centipawns: i32) -> String {
    format!("{:+.2}", f64::from(centipawns) / 100.0)
}

fn main() -> ExitCode {
    env_logger::init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let config = SearchConfig::default();
    let mut engine = match args.seed {
        Some(seed) => Engine::seeded(config, seed),
        None => Engine::new(config),
    };

    match engine.analyze(&args.fen, args.depth) {
        Ok(analysis) => {
            match (analysis.best_move, analysis.san) {
                (Some(uci), san) => {
                    let score = if args.black_player {
                        -analysis.score
                    } else {
                        analysis.score
                    };
                    println!("bestmove {uci}");
                    if let Some(san) = san {
                        println!("san {san}");
                    }
                    println!("score {}", format_score(score));
                }
                (None, _) => println!("bestmove (none)"),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}
