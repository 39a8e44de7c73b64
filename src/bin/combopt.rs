//! combopt - Command Line Interface
//!
//! Runs each optimizer on a small built-in or seeded random instance.
//! Set `RUST_LOG=debug` to follow progress.

use clap::{Parser, Subcommand};
use rand::Rng;

use combopt::ga::{solve_tsp, GaConfig};
use combopt::random::rng_from;
use combopt::sa::{RoutingProblem, SaConfig, SaRunner};
use combopt::search::{solve_with, Board, SearchConfig};
use combopt::{CostMatrix, Location, Locations};

use std::error::Error;
use std::time::{Duration, Instant};

/// Ten Spanish cities as (name, latitude, longitude).
const CITIES: [(&str, f64, f64); 10] = [
    ("Madrid", 40.4168, -3.7038),
    ("Barcelona", 41.3851, 2.1734),
    ("Valencia", 39.4699, -0.3763),
    ("Sevilla", 37.3891, -5.9845),
    ("Zaragoza", 41.6488, -0.8891),
    ("Málaga", 36.7213, -4.4214),
    ("Murcia", 37.9922, -1.1307),
    ("Bilbao", 43.2630, -2.9350),
    ("A Coruña", 43.3623, -8.4115),
    ("Palma", 39.5696, 2.6502),
];

#[derive(Parser)]
#[command(name = "combopt")]
#[command(version)]
#[command(about = "BFS puzzle search, GA for the TSP and SA for depot routing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an 8-puzzle board with breadth-first search
    Puzzle {
        /// Starting board as nine digits, 0 for the blank (e.g. 413726580).
        /// A random solvable board is used when omitted.
        #[arg(short, long)]
        board: Option<String>,

        /// Random seed for the shuffled board
        #[arg(short, long)]
        seed: Option<u64>,

        /// Give up after expanding this many boards
        #[arg(long)]
        max_expanded: Option<usize>,

        /// Pause between replayed moves, in milliseconds
        #[arg(long, default_value = "0")]
        delay_ms: u64,
    },

    /// Evolve a TSP tour with the genetic algorithm
    Tsp {
        /// Use this many random points instead of the built-in cities
        #[arg(short, long)]
        random: Option<usize>,

        /// Random seed
        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(long, default_value = "100")]
        population: usize,

        #[arg(long, default_value = "20")]
        elite: usize,

        #[arg(long, default_value = "0.01")]
        mutation_rate: f64,

        #[arg(short, long, default_value = "500")]
        generations: usize,
    },

    /// Anneal a depot route on a random Euclidean instance
    Route {
        /// Number of stops besides the depot
        #[arg(short = 'n', long, default_value = "10")]
        stops: usize,

        /// Random seed for the instance, initial route and search
        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(long, default_value = "10000")]
        initial_temperature: f64,

        #[arg(long, default_value = "0.1")]
        final_temperature: f64,

        #[arg(long, default_value = "0.995")]
        cooling_rate: f64,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Puzzle { board, seed, max_expanded, delay_ms } => {
            run_puzzle(board.as_deref(), seed, max_expanded, delay_ms)
        }

        Commands::Tsp { random, seed, population, elite, mutation_rate, generations } => {
            let mut config = GaConfig::default()
                .with_population_size(population)
                .with_elite_size(elite)
                .with_mutation_rate(mutation_rate)
                .with_generations(generations);
            config.seed = seed;
            run_tsp(random, &config)
        }

        Commands::Route { stops, seed, initial_temperature, final_temperature, cooling_rate } => {
            let mut config = SaConfig::default()
                .with_initial_temperature(initial_temperature)
                .with_final_temperature(final_temperature)
                .with_cooling_rate(cooling_rate);
            config.seed = seed;
            run_route(stops, &config)
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_board(board: &Board) {
    for row in board.cells().chunks(3) {
        let line: Vec<String> = row
            .iter()
            .map(|&c| if c == 0 { " ".to_string() } else { c.to_string() })
            .collect();
        println!("  {}", line.join(" "));
    }
}

fn run_puzzle(
    board: Option<&str>,
    seed: Option<u64>,
    max_expanded: Option<usize>,
    delay_ms: u64,
) -> Result<(), Box<dyn Error>> {
    let start = match board {
        Some(s) => Board::parse(s)?,
        None => Board::random_solvable(&mut rng_from(seed)),
    };
    let config = match max_expanded {
        Some(n) => SearchConfig::default().with_max_expanded(n),
        None => SearchConfig::default(),
    };

    println!("Start ({start}):");
    print_board(&start);

    let timer = Instant::now();
    let solution = solve_with(&start, &config)?;
    let elapsed = timer.elapsed();

    for step in solution.playback() {
        if delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(delay_ms));
        }
        println!("\nMove {}: {}", step.move_count, step.mv);
        print_board(&step.board);
    }

    println!("\n========== Results ==========");
    println!("Moves: {}", solution.len());
    println!("Boards expanded: {}", solution.expanded);
    println!("Time: {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

fn run_tsp(random: Option<usize>, config: &GaConfig) -> Result<(), Box<dyn Error>> {
    let (names, points): (Vec<String>, Vec<Location>) = match random {
        Some(n) => {
            let mut rng = rng_from(config.seed);
            (0..n)
                .map(|i| {
                    let x = rng.random_range(0.0..100.0);
                    let y = rng.random_range(0.0..100.0);
                    (format!("P{i}"), Location::new(x, y))
                })
                .unzip()
        }
        // Longitude on x, latitude on y.
        None => CITIES
            .iter()
            .map(|&(name, lat, lon)| (name.to_string(), Location::new(lon, lat)))
            .unzip(),
    };

    println!("Evolving a tour over {} locations...", points.len());
    let timer = Instant::now();
    let result = solve_tsp(points, config)?;
    let elapsed = timer.elapsed();

    let initial = result.cost_history.first().copied().unwrap_or(result.best_cost);
    let mut route: Vec<&str> = result.best.stops().iter().map(|&i| names[i].as_str()).collect();
    if let Some(&first) = route.first() {
        route.push(first);
    }

    println!("\n========== Results ==========");
    println!("Route: {}", route.join(" -> "));
    println!("Initial best distance: {initial:.4}");
    println!("Final distance: {:.4}", result.best_cost);
    println!("Improvement: {:.2}%", improvement(initial, result.best_cost));
    println!("Generations: {}", result.generations);
    println!("Time: {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

fn run_route(stops: usize, config: &SaConfig) -> Result<(), Box<dyn Error>> {
    let mut rng = rng_from(config.seed);
    let points: Vec<Location> = (0..=stops)
        .map(|_| Location::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();
    let matrix = CostMatrix::euclidean(&Locations::new(points)?);

    let problem = RoutingProblem::new(matrix, 0)?;
    let interior: Vec<usize> = (1..=stops).collect();
    let initial = problem.random_route(&interior, &mut rng)?;

    println!("Annealing a route over {stops} stops from depot 0...");
    println!("Initial route: {:?}", initial.stops());

    let timer = Instant::now();
    let result = SaRunner::run(&problem, initial, config)?;
    let elapsed = timer.elapsed();

    println!("\n========== Results ==========");
    println!("Best route: {:?}", result.best.stops());
    println!("Initial cost: {:.4}", result.initial_cost);
    println!("Best cost: {:.4}", result.best_cost);
    println!("Improvement: {:.2}%", result.improvement_percent());
    println!(
        "Iterations: {} ({} accepted, {} improving)",
        result.iterations, result.accepted_moves, result.improving_moves
    );
    println!("Time: {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

fn improvement(initial: f64, best: f64) -> f64 {
    if initial == 0.0 {
        0.0
    } else {
        (initial - best) / initial * 100.0
    }
}
