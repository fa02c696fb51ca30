use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{ArgAction, Parser, ValueEnum};
use plotters::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use chromakin::{Game, Player, ScoringTable};
use chromakin::{create_bot_from_spec, label_for_spec};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FFEE_u64 << 32 | 0x5EED_u64;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scoring {
    Standard,
    Alternate,
}

impl Scoring {
    fn table(self) -> ScoringTable {
        match self {
            Scoring::Standard => ScoringTable::standard(),
            Scoring::Alternate => ScoringTable::alternate(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "winrate",
    about = "Run multiple Chromakin games and plot per-bot win rates."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 200)]
    games: usize,

    /// Base RNG seed (deck + bot RNGs will be derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Scoring table used for every game
    #[arg(long = "scoring", value_enum, default_value_t = Scoring::Standard)]
    scoring: Scoring,

    /// Output chart file (png)
    #[arg(short = 'o', long = "out", default_value = "winrates.png")]
    out: PathBuf,

    /// Show a textual summary only (no chart)
    #[arg(long = "no-chart", action = ArgAction::SetTrue)]
    no_chart: bool,

    /// Player bot specs: e.g., random random random (2-7 total)
    bots: Vec<String>,
}

/// Aggregated results for one bot label.
#[derive(Debug, Default)]
struct LabelStats {
    wins: usize,
    seats: usize,
    total_points: i64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.bots.len() < 2 || args.bots.len() > 7 {
        return Err(format!(
            "expected between 2 and 7 bot specs, received {}",
            args.bots.len()
        )
        .into());
    }

    // Disallow human in batch sims; it would block waiting for input.
    if args
        .bots
        .iter()
        .any(|s| s.to_ascii_lowercase().starts_with("human"))
    {
        return Err("human players are not supported in winrate runs".into());
    }

    let mut stats: HashMap<String, LabelStats> = HashMap::new();
    let mut aborted_games = 0usize;
    let players_per_game = args.bots.len();
    let labels_for_spec: Vec<String> = args.bots.iter().map(|s| label_for_spec(s)).collect();
    let started = Instant::now();

    for game_idx in 0..args.games {
        // Permute seating each game for fairness.
        let mut indices: Vec<usize> = (0..players_per_game).collect();
        let mut seat_rng = StdRng::seed_from_u64(args.seed ^ 0x9E37_79B9 ^ (game_idx as u64));
        indices.shuffle(&mut seat_rng);

        let deck_seed = mix_seed(args.seed, game_idx as u64, 0x5EED_15);
        let game = Game::builder(players_per_game)?
            .with_seed(deck_seed)
            .with_scoring(args.scoring.table())
            .build()?;

        let mut players: Vec<Box<dyn Player>> = Vec::with_capacity(players_per_game);
        let mut labels: Vec<&str> = Vec::with_capacity(players_per_game);
        for (seat, src_idx) in indices.iter().enumerate() {
            let bot_seed = mix_seed(args.seed, game_idx as u64, seat as u64);
            players.push(create_bot_from_spec(&args.bots[*src_idx], seat, bot_seed)?);
            labels.push(&labels_for_spec[*src_idx]);
        }

        // Six or seven players can empty the deck inside the last round.
        let outcome = match game.play(&mut players) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("game {game_idx} aborted: {err}");
                aborted_games += 1;
                continue;
            }
        };
        for (seat, label) in labels.iter().enumerate() {
            let entry = stats.entry(label.to_string()).or_default();
            entry.seats += 1;
            entry.total_points += i64::from(outcome.scores[seat]);
            if seat == outcome.winner {
                entry.wins += 1;
            }
        }
    }

    let mut results: Vec<(String, f64, f64, usize, usize)> = stats
        .iter()
        .map(|(label, s)| {
            let seats = s.seats.max(1) as f64;
            (
                label.clone(),
                s.wins as f64 / seats,
                s.total_points as f64 / seats,
                s.wins,
                s.seats,
            )
        })
        .collect();
    results.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    println!(
        "Win rates (per-seat) over {} games in {:.2}s:",
        args.games,
        started.elapsed().as_secs_f64()
    );
    for (label, rate, avg_points, wins, seats) in &results {
        println!(
            "  {label:<12}  {wins}/{seats}  ({:.2}%)   avg pts: {avg_points:>6.2}",
            rate * 100.0
        );
    }

    if aborted_games > 0 {
        println!("\nNote: {aborted_games} game(s) were aborted and not counted.");
    }

    if !args.no_chart {
        render_bar_chart(&args.out, &results)?;
        println!("\nChart written to {}", args.out.display());
    }
    Ok(())
}

fn mix_seed(base: u64, a: u64, b: u64) -> u64 {
    let mut z =
        base ^ (a.wrapping_mul(0x9E37_79B97F4A7C15)) ^ (b.wrapping_mul(0xBF58_476D1CE4E5B9));
    z ^= z >> 12;
    z ^= z << 25;
    z ^= z >> 27;
    z
}

fn render_bar_chart(
    out: &PathBuf,
    data: &[(String, f64, f64, usize, usize)],
) -> Result<(), Box<dyn Error>> {
    let labels: Vec<String> = data.iter().map(|row| row.0.clone()).collect();
    let values: Vec<f64> = data.iter().map(|row| row.1 * 100.0).collect();
    let max_value = values.iter().cloned().fold(0.0_f64, f64::max).max(10.0);

    let root = BitMapBackend::new(out, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| format!("{e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Chromakin Bot Win Rates (per-seat)",
            ("sans-serif", 28).into_font(),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..labels.len(), 0.0f64..max_value)
        .map_err(|e| format!("{e}"))?;

    chart
        .configure_mesh()
        .y_desc("Win rate (%)")
        .x_desc("Bot type")
        .x_labels(labels.len())
        .x_label_formatter(&|idx| {
            if *idx < labels.len() {
                labels[*idx].clone()
            } else {
                idx.to_string()
            }
        })
        .y_label_formatter(&|v| format!("{v:.0}"))
        .light_line_style(&WHITE.mix(0.0))
        .draw()
        .map_err(|e| format!("{e}"))?;

    for (i, value) in values.iter().enumerate() {
        let rect = Rectangle::new([(i, 0.0), (i, *value)], BLUE.filled());
        chart
            .draw_series(std::iter::once(rect))
            .map_err(|e| format!("{e}"))?;
    }

    root.present().map_err(|e| format!("{e}"))?;
    Ok(())
}
