//! Wordle Freq - CLI
//!
//! Letter-frequency Wordle solver with line, TUI and batch modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use wordle_freq::{
    commands::{GameConfig, rank_words, run_benchmark, run_simple, sample_targets, solve_word},
    output::{print_benchmark_result, print_outcome, print_rank_report, print_solve_result},
    solver::{RoundState, Solver, SolverError},
    wordlists::{DEFAULT_DICTIONARY, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_freq",
    about = "Wordle solver ranking guesses by letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list, one word per line (capitalised entries are skipped)
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY)]
    dictionary: String,

    /// Rounds allowed per game
    #[arg(short, long, global = true, default_value = "6")]
    rounds: usize,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based interactive solver (default)
    Simple {
        /// Accept any feedback line, ignoring unrecognised symbols
        #[arg(long)]
        lenient: bool,
    },

    /// Full-screen interactive solver
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and scores per round
        #[arg(short = 'V', long = "steps")]
        steps: bool,
    },

    /// Show the opening ranking and where given words stand
    Rank {
        /// Words to look up
        words: Vec<String>,

        /// How many top words to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Benchmark the solver against random dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let words = load_from_file(&cli.dictionary)?;
    let solver = Solver::new(words)
        .with_context(|| format!("no usable words in {}", cli.dictionary))?;
    let config = GameConfig::new(cli.rounds);

    match cli.command.unwrap_or(Commands::Simple { lenient: false }) {
        Commands::Simple { lenient } => run_simple_command(solver, config, lenient),
        Commands::Play => run_play_command(solver, config),
        Commands::Solve { word, steps } => run_solve_command(&word, steps, &solver, config),
        Commands::Rank { words, top } => {
            let report = rank_words(&solver, &words, top)?;
            print_rank_report(&report);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, &solver, config);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(state: RoundState) -> ExitCode {
    match state {
        RoundState::Solved { .. } => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

fn run_simple_command(mut solver: Solver, config: GameConfig, lenient: bool) -> Result<ExitCode> {
    match run_simple(&mut solver, config, lenient) {
        Ok(state) => {
            print_outcome(state, &solver);
            Ok(exit_code(state))
        }
        Err(SolverError::Aborted) => {
            println!("\nGoodbye!");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn run_play_command(solver: Solver, config: GameConfig) -> Result<ExitCode> {
    use wordle_freq::interactive::{App, run_tui};

    let state = run_tui(App::new(solver, config))?;
    Ok(exit_code(state))
}

fn run_solve_command(
    word: &str,
    steps: bool,
    solver: &Solver,
    config: GameConfig,
) -> Result<ExitCode> {
    let result = solve_word(word, solver, config)?;
    print_solve_result(&result, steps);
    Ok(exit_code(result.outcome))
}

fn run_benchmark_command(count: usize, seed: Option<u64>, solver: &Solver, config: GameConfig) {
    match seed {
        Some(seed) => println!("Running benchmark on {count} random words (seed {seed})..."),
        None => println!("Running benchmark on {count} random words..."),
    }

    let targets = sample_targets(solver.candidates(), count, seed);
    let result = run_benchmark(solver, &targets, config.max_rounds);
    print_benchmark_result(&result);
}
