use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use snakepit_core::{Board, FoodSpawner, GameState};

fn parse_arg_u64(args: &[String], key: &str, default: u64) -> u64 {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_arg_path(args: &[String], key: &str) -> Option<PathBuf> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
}

fn main() -> Result<()> {
    // Example:
    // cargo run --bin snakepit -- --input board.txt --ticks 10 --seed 7
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    let ticks = parse_arg_u64(&args, "--ticks", 1);
    let seed = parse_arg_u64(&args, "--seed", 7);
    let input = parse_arg_path(&args, "--input");
    let output = parse_arg_path(&args, "--output");

    let mut state = match &input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            let board = Board::from_reader(BufReader::new(file))?;
            GameState::from_board(board)?
        }
        None => GameState::new(),
    };
    info!(
        snakes = state.snakes().len(),
        rows = state.board().num_rows(),
        ticks,
        seed,
        "board ready"
    );

    let mut spawner = FoodSpawner::new(seed);
    for tick in 0..ticks {
        let summary = state.advance(|board| spawner.place(board))?;
        info!(
            tick,
            moved = summary.moved,
            grew = summary.grew,
            died = summary.died,
            "tick complete"
        );
        if state.snakes().iter().all(|snake| !snake.is_live()) && !state.snakes().is_empty() {
            info!(tick, "every snake is dead, stopping early");
            break;
        }
    }

    match &output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            state.board().write_to(file)?;
        }
        None => {
            state.board().write_to(io::stdout().lock())?;
        }
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
