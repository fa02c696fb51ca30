use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use chromakin::{
    Game, LogMode, Player, ScoringTable, create_bot_from_spec, render_outcome,
};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut seed = DEFAULT_SEED;
    let mut scoring = ScoringTable::standard();
    let mut log_mode = LogMode::Buffer;
    let mut quiet = false;
    let mut bot_specs: Vec<String> = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--seed requires a value".to_string())?;
                seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed value: {value}"))?;
            }
            "--scoring" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--scoring requires a value".to_string())?;
                scoring = parse_scoring(&value)?;
            }
            "--log-file" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--log-file requires a path".to_string())?;
                log_mode = LogMode::File(PathBuf::from(value));
            }
            "--live" => log_mode = LogMode::Print,
            "--quiet" => quiet = true,
            "--help" => {
                print_usage();
                return Ok(());
            }
            other => bot_specs.push(other.to_string()),
        }
    }

    if bot_specs.is_empty() {
        bot_specs = vec![String::from("human"), String::from("random")];
    }
    if bot_specs.len() < 2 || bot_specs.len() > 7 {
        return Err(format!(
            "expected between 2 and 7 players, received {}",
            bot_specs.len()
        )
        .into());
    }

    let num_players = bot_specs.len();
    let game = Game::builder(num_players)?
        .with_seed(seed)
        .with_scoring(scoring)
        .with_log(log_mode)
        .build()?;

    let mut players: Vec<Box<dyn Player>> = Vec::with_capacity(num_players);
    for (index, spec) in bot_specs.iter().enumerate() {
        players.push(create_bot_from_spec(spec, index, seed)?);
    }

    println!("Starting Chromakin with {num_players} players.");
    let outcome = game.play(&mut players)?;
    if !quiet && !outcome.transcript.is_empty() {
        println!("{}", outcome.transcript);
    }
    println!("{}", render_outcome(&outcome));
    println!("Winner: {}", outcome.names[outcome.winner]);
    Ok(())
}

fn parse_scoring(value: &str) -> Result<ScoringTable, Box<dyn Error>> {
    match value.to_ascii_lowercase().as_str() {
        "standard" | "1" => Ok(ScoringTable::standard()),
        "alternate" | "2" => Ok(ScoringTable::alternate()),
        custom => {
            let values = custom
                .split(',')
                .map(|v| v.trim().parse::<i32>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| format!("invalid scoring table: {value}"))?;
            Ok(ScoringTable::new(values)?)
        }
    }
}

fn print_usage() {
    println!("Usage: simulate [OPTIONS] [BOT ...]");
    println!("  --seed <u64>          Seed for shuffling (default: {DEFAULT_SEED:#x})");
    println!("  --scoring <table>     standard, alternate, or comma-separated points");
    println!("  --live                Print the game log while playing");
    println!("  --log-file <path>     Append the game log to a file");
    println!("  --quiet               Only print the final scores");
    println!("  --help                Show this help message");
    println!("Bot entries (2-7 total):");
    println!("  human[:name]          Interactive human-controlled player");
    println!("  random[:seed]         Random bot with optional per-bot seed");
    println!("If no bots are provided, defaults to one human and one random bot.");
}
