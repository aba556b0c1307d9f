//! Benchmark command
//!
//! Plays a full game against many answers in parallel and aggregates the
//! outcomes.

use crate::core::Word;
use crate::solver::{AnswerOracle, RoundState, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted_candidates: usize,
    pub exhausted_rounds: usize,
    /// Games that stopped on a feedback error (never expected with an oracle)
    pub errored: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games keyed by the round they were solved in
    pub distribution: HashMap<usize, usize>,
    /// Answers the solver lost track of, in input order
    pub exhausted_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct answers from `words`
///
/// With a seed the sample is reproducible.
#[must_use]
pub fn sample_targets(words: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    match seed {
        Some(seed) => words
            .choose_multiple(&mut StdRng::seed_from_u64(seed), count)
            .cloned()
            .collect(),
        None => words
            .choose_multiple(&mut rand::rng(), count)
            .cloned()
            .collect(),
    }
}

/// Run `solver` against every word in `targets`
pub fn run_benchmark(solver: &Solver, targets: &[Word], max_rounds: usize) -> BenchmarkResult {
    let start = Instant::now();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let outcomes: Vec<Option<RoundState>> = targets
        .par_iter()
        .map(|target| {
            let mut game = solver.clone();
            let outcome = game
                .run(&mut AnswerOracle::new(target.clone()), max_rounds)
                .ok();
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let mut result = BenchmarkResult {
        total_words: targets.len(),
        solved: 0,
        exhausted_candidates: 0,
        exhausted_rounds: 0,
        errored: 0,
        average_guesses: 0.0,
        min_guesses: 0,
        max_guesses: 0,
        distribution: HashMap::new(),
        exhausted_words: Vec::new(),
        duration,
        words_per_second: targets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    };

    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;

    for (target, outcome) in targets.iter().zip(outcomes) {
        match outcome {
            Some(RoundState::Solved { rounds }) => {
                result.solved += 1;
                total_guesses += rounds;
                min_guesses = min_guesses.min(rounds);
                result.max_guesses = result.max_guesses.max(rounds);
                *result.distribution.entry(rounds).or_insert(0) += 1;
            }
            Some(RoundState::ExhaustedCandidates) => {
                result.exhausted_candidates += 1;
                result.exhausted_words.push(target.text().to_string());
            }
            Some(RoundState::ExhaustedRounds) => result.exhausted_rounds += 1,
            Some(RoundState::Active(_)) | None => result.errored += 1,
        }
    }

    if result.solved > 0 {
        result.average_guesses = total_guesses as f64 / result.solved as f64;
        result.min_guesses = min_guesses;
    }

    result
}
