//! Greedy Wordle Solver - CLI
//!
//! Interactive play, single-word solving, suggestions from a recorded game,
//! and benchmarks over the dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_greedy::{
    commands::{
        SolveConfig, print_test_all_statistics, run_benchmark, run_simple, run_test_all,
        sample_targets, solve_word, suggest,
    },
    core::Dictionary,
    logging,
    output::{print_benchmark_result, print_solve_result, print_suggestion},
    solver::{DEFAULT_OPENER, OverlapStrategy, Solver, SolverConfig},
    wordlists::loader::{embedded_dictionary, load_dictionary},
};

#[derive(Parser)]
#[command(
    name = "wordle_greedy",
    about = "Wordle solver using constraint filtering and a greedy letter-overlap heuristic",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Fixed first guess (falls back to the heuristic if not in the wordlist)
    #[arg(short, long, global = true, default_value = DEFAULT_OPENER)]
    opener: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): you enter the feedback the game shows
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Suggest the next guess for a game in progress
    Suggest {
        /// Rounds played so far, as GUESS=FEEDBACK (e.g. slate=--G-Y)
        entries: Vec<String>,
    },

    /// Benchmark solver performance on random words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Test solver on ALL dictionary words
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(embedded_dictionary()),
        path => load_dictionary(path).with_context(|| format!("failed to load wordlist '{path}'")),
    }
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let dictionary = load_wordlist(&cli.wordlist)?;
    let config = SolverConfig { opener: cli.opener };
    let solver = Solver::with_config(OverlapStrategy, &dictionary, &config);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_simple(&solver),
        Commands::Solve { word, verbose } => {
            let solution = solve_word(&SolveConfig::new(word.clone()), &solver)
                .with_context(|| format!("failed to solve '{word}'"))?;
            print_solve_result(&solution, verbose);
            Ok(())
        }
        Commands::Suggest { entries } => {
            let suggestion = suggest(&entries, &solver)?;
            print_suggestion(&suggestion);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random words...");
            let targets = sample_targets(dictionary.words(), count, seed);
            print_benchmark_result(&run_benchmark(&solver, &targets));
            Ok(())
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Wordle Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} dictionary words\n", dictionary.len());

            let stats = run_test_all(&solver, limit);
            print_test_all_statistics(&stats);
            if stats.failed > 0 {
                anyhow::bail!("{} word(s) failed to solve", stats.failed);
            }
            Ok(())
        }
    }
}
