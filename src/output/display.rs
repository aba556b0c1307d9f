//! Display functions for command results

use super::formatters::{guesses, score_bar};
use crate::commands::{BenchmarkResult, RankReport, SolveResult};
use crate::solver::{RoundState, Solver};
use colored::Colorize;

/// Print how an interactive game ended
pub fn print_outcome(state: RoundState, solver: &Solver) {
    println!();
    match state {
        RoundState::Solved { rounds } => {
            println!(
                "{}",
                format!("Huzzah! Solved in {}.", guesses(rounds))
                    .bright_green()
                    .bold()
            );
        }
        RoundState::ExhaustedCandidates => {
            println!("{}", "No words left in the dictionary!".red().bold());
            println!("The feedback may be inconsistent (repeated letters are a common cause).");
        }
        RoundState::ExhaustedRounds => {
            println!(
                "{}",
                format!(
                    "Out of rounds with {} candidates left.",
                    solver.candidates().len()
                )
                .yellow()
                .bold()
            );
        }
        RoundState::Active(round) => println!("Stopped before round {round}."),
    }

    if !solver.history().is_empty() {
        println!("\n  Guess history:");
        for (i, turn) in solver.history().iter().enumerate() {
            println!(
                "    {}. {} {}",
                (i + 1).to_string().bright_black(),
                turn.guess.text().to_uppercase().bright_white().bold(),
                turn.feedback.to_emoji()
            );
        }
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {:.4}", step.score);
        }
    }

    println!();
    match result.outcome {
        RoundState::Solved { rounds } => println!(
            "{}",
            format!("✅ Solved in {}!", guesses(rounds)).green().bold()
        ),
        RoundState::ExhaustedCandidates => println!(
            "{}",
            "❌ No candidates left: the answer was filtered out".red().bold()
        ),
        _ => println!(
            "{}",
            format!("❌ Failed to solve in {}", guesses(result.steps.len()))
                .red()
                .bold()
        ),
    }
}

/// Print the opening ranking and any looked-up words
pub fn print_rank_report(report: &RankReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} candidates",
        "RANKING".bright_cyan().bold(),
        report.total_candidates
    );
    println!("{}", "═".repeat(60).cyan());

    let best = report.top.first().map_or(0.0, |entry| entry.score);
    println!();
    for (i, entry) in report.top.iter().enumerate() {
        println!(
            "  {:>3}. {} [{}] {:.4}",
            i + 1,
            entry.word.text().to_uppercase().bright_white().bold(),
            score_bar(entry.score, best, 20).green(),
            entry.score
        );
    }

    if !report.lookups.is_empty() {
        println!("\n📊 {}", "Lookups:".bright_cyan().bold());
        for lookup in &report.lookups {
            let rank = lookup.rank.map_or_else(
                || "not a candidate".bright_black().to_string(),
                |rank| format!("rank {rank}"),
            );
            println!(
                "   {}  {:.4}  {}",
                lookup.word.text().to_uppercase().bright_yellow(),
                lookup.score,
                rank
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green().bold()
    );
    println!(
        "   No candidates:    {}",
        result.exhausted_candidates.to_string().red()
    );
    println!(
        "   Out of rounds:    {}",
        result.exhausted_rounds.to_string().yellow()
    );
    if result.errored > 0 {
        println!("   Errors:           {}", result.errored);
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Best case:        {}", result.min_guesses.to_string().green());
    println!("   Worst case:       {}", result.max_guesses.to_string().yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut rounds: Vec<usize> = result.distribution.keys().copied().collect();
    rounds.sort_unstable();
    for guess_count in rounds {
        let count = result.distribution[&guess_count];
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.exhausted_words.is_empty() {
        println!(
            "\n⚠️  {} {}",
            "Filtered out their own answer:".yellow().bold(),
            result
                .exhausted_words
                .iter()
                .take(10)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}
