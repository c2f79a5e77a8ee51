//! Benchmark command
//!
//! Tests solver performance across a random sample of dictionary words.

use crate::core::Word;
use crate::oracle::TargetOracle;
use crate::solver::{Solver, Strategy};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Targets that did not solve, with the reason
    pub failures: Vec<(String, String)>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick up to `count` distinct dictionary words at random
///
/// A fixed `seed` makes the sample reproducible.
#[must_use]
pub fn sample_targets(words: &[Word], count: usize, seed: Option<u64>) -> Vec<&Word> {
    match seed {
        Some(seed) => words
            .choose_multiple(&mut StdRng::seed_from_u64(seed), count)
            .collect(),
        None => words.choose_multiple(&mut rand::rng(), count).collect(),
    }
}

/// Run benchmark on a set of target words
pub fn run_benchmark<S: Strategy>(solver: &Solver<S>, targets: &[&Word]) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    for target in targets {
        let outcome = TargetOracle::new(target.text(), solver.dictionary())
            .map_err(Into::into)
            .and_then(|oracle| solver.solve(&oracle));

        match outcome {
            Ok(solution) => {
                let guesses = solution.guess_count();
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Err(err) => {
                warn!(word = %target, error = %err, "benchmark target failed");
                failures.push((target.text().to_string(), err.to_string()));
            }
        }
    }

    let duration = start.elapsed();
    let total_words = targets.len();
    let solved = total_words - failures.len();

    BenchmarkResult {
        total_words,
        solved,
        failures,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
