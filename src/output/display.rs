//! Display functions for command results

use super::formatters::{distribution_bar, feedback_tiles, guess_noun, word_list};
use crate::commands::{BenchmarkResult, Suggestion};
use crate::solver::Solution;
use colored::Colorize;

/// Candidates listed by `print_suggestion`
const SUGGESTION_LIMIT: usize = 20;

/// Print the result of solving a word
pub fn print_solve_result(solution: &Solution, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        solution.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in solution.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            feedback_tiles(&step.guess, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    println!("{}", solve_summary(solution).green().bold());
}

fn solve_summary(solution: &Solution) -> String {
    let guesses = solution.guess_count();
    let noun = guess_noun(guesses);
    if solution.answer_was_guessed() {
        format!("✅ Solved in {guesses} {noun}!")
    } else {
        format!(
            "✅ Deduced {} after {guesses} {noun}!",
            solution.answer.text().to_uppercase()
        )
    }
}

/// Print the next move for a replayed history
pub fn print_suggestion(suggestion: &Suggestion) {
    for (i, (guess, feedback)) in suggestion.history.iter().enumerate() {
        println!("Turn {}: {}", i + 1, feedback_tiles(guess, feedback));
    }

    println!("\n🔎 Constraints: {}", suggestion.constraints);
    println!(
        "   {} candidates: {}",
        suggestion.candidates.len(),
        word_list(&suggestion.candidates, SUGGESTION_LIMIT)
    );

    match &suggestion.next_guess {
        Some(answer) if suggestion.solved => {
            println!(
                "\n{}",
                format!("✅ The word is {}", answer.text().to_uppercase())
                    .green()
                    .bold()
            );
        }
        Some(guess) => {
            println!(
                "\n📊 Suggested guess: {}",
                guess.text().to_uppercase().bright_yellow().bold()
            );
        }
        None => {
            println!(
                "\n{}",
                "❌ No candidates remain! The feedback is inconsistent."
                    .red()
                    .bold()
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
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (guess_count, &count) in &result.distribution {
        let pct = count as f64 / result.total_words.max(1) as f64 * 100.0;
        let bar = distribution_bar(count, max_count, 40);
        println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Failures:".red().bold());
        for (word, reason) in &result.failures {
            println!("   {}: {reason}", word.to_uppercase().red());
        }
    }
}
