//! Test all words - comprehensive solver evaluation
//!
//! Runs the solver against every dictionary word and generates statistics.

use crate::core::Word;
use crate::oracle::TargetOracle;
use crate::output::formatters::{distribution_bar, guess_noun};
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub num_guesses: usize,
    /// Whether the last guess was the answer itself rather than a deduction
    pub guessed_answer: bool,
    pub error: Option<String>,
    pub duration: Duration,
}

impl WordTestResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.error.is_none()
    }
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub failures: Vec<(String, String)>,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Solved words whose answer was deduced without being submitted
    pub deduced: usize,
    /// Solved words with the most guesses, with their guess paths
    pub worst_words: Vec<(String, Vec<String>)>,
    /// Word that took longest to solve
    pub slowest_word: Option<(String, Duration)>,
}

fn test_word<S: Strategy>(solver: &Solver<S>, target: &Word) -> WordTestResult {
    let start = Instant::now();
    let outcome = TargetOracle::new(target.text(), solver.dictionary())
        .map_err(Into::into)
        .and_then(|oracle| solver.solve(&oracle));

    let (guesses, guessed_answer, error) = match outcome {
        Ok(solution) => (
            solution
                .steps
                .iter()
                .map(|step| step.guess.text().to_string())
                .collect(),
            solution.answer_was_guessed(),
            None,
        ),
        Err(err) => (Vec::new(), false, Some(err.to_string())),
    };

    WordTestResult {
        word: target.text().to_string(),
        num_guesses: guesses.len(),
        guesses,
        guessed_answer,
        error,
        duration: start.elapsed(),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

/// Run solver on all dictionary words (or the first `limit`)
///
/// Words are solved in parallel; results keep dictionary order.
pub fn run_test_all<S: Strategy + Sync>(
    solver: &Solver<S>,
    limit: Option<usize>,
) -> TestAllStatistics {
    let words = solver.dictionary().words();
    let test_words = &words[..limit.unwrap_or(words.len()).min(words.len())];

    println!("🎯 Testing {} words...", test_words.len());

    let pb = progress_bar(test_words.len());
    let total_start = Instant::now();

    let results: Vec<WordTestResult> = test_words
        .par_iter()
        .map(|target| {
            let result = test_word(solver, target);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, total_start.elapsed())
}

/// Aggregate per-word results
#[must_use]
pub fn summarize(results: &[WordTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&WordTestResult> = results.iter().filter(|r| r.success()).collect();

    let mut guess_distribution = BTreeMap::new();
    for result in &solved {
        *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
    }

    let failures: Vec<(String, String)> = results
        .iter()
        .filter_map(|r| r.error.as_ref().map(|e| (r.word.clone(), e.clone())))
        .collect();

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut hardest = solved.clone();
    hardest.sort_by_key(|r| std::cmp::Reverse(r.num_guesses));
    let worst_words: Vec<(String, Vec<String>)> = hardest
        .iter()
        .take(10)
        .map(|r| (r.word.clone(), r.guesses.clone()))
        .collect();

    let slowest_word = solved
        .iter()
        .max_by_key(|r| r.duration)
        .map(|r| (r.word.clone(), r.duration));

    TestAllStatistics {
        total_words: results.len(),
        solved: solved.len(),
        failed: failures.len(),
        failures,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        deduced: solved.iter().filter(|r| !r.guessed_answer).count(),
        worst_words,
        slowest_word,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Fewest / most:       {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    println!("  Deduced unguessed:   {}", stats.deduced);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for (guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = distribution_bar(count, max_count, 40);
        println!("  {guesses:2} guesses: {} {count:4} ({percentage:5.1}%)", bar.green());
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, path) in stats.worst_words.iter().take(5) {
            println!(
                "  {} ({} {}): {}",
                word.to_uppercase().yellow(),
                path.len(),
                guess_noun(path.len()),
                path.join(" → ").to_uppercase()
            );
        }
    }

    if let Some((word, duration)) = &stats.slowest_word {
        println!(
            "\n🐢 Slowest word:       {} ({:.2}ms)",
            word.to_uppercase(),
            duration.as_secs_f64() * 1000.0
        );
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Failures".red().bold());
        for (word, reason) in &stats.failures {
            println!("  {}: {reason}", word.to_uppercase().red());
        }
    }
}
