//! Interactive play mode
//!
//! The user is the oracle: the solver suggests a guess, the user types the
//! feedback the game showed.

use super::suggest::parse_entry;
use crate::core::{Feedback, Word};
use crate::output::formatters::{feedback_tiles, guess_noun, word_list};
use crate::solver::{Session, SessionState, Solver, Strategy};
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates are listed once at most this many remain
const SHOW_CANDIDATES: usize = 10;

enum Input {
    Quit,
    NewGame,
    Undo,
    Feedback(Word, Feedback),
}

/// Run interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: Strategy>(solver: &Solver<S>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(solver, &mut stdin.lock(), &mut stdout.lock())
}

/// Interactive game loop over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// dictionary is empty.
pub fn play<S: Strategy>(
    solver: &Solver<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    if solver.dictionary().is_empty() {
        bail!("the dictionary is empty");
    }

    print_banner(out)?;
    let mut session = solver.start();

    loop {
        let suggestion = match session.state() {
            SessionState::Guessing => solver.next_guess(&session),
            SessionState::Solved(answer) => {
                print_solved(out, &session, answer)?;
                match prompt(input, out, "Play again? (yes/no)")?.as_deref() {
                    Some("yes" | "y") => {
                        session = solver.start();
                        writeln!(out, "\n🔄 New game started!\n")?;
                        continue;
                    }
                    _ => break,
                }
            }
            SessionState::Failed => {
                writeln!(
                    out,
                    "\n{} {}",
                    "❌ No candidates remain! Your feedback may be incorrect.".red(),
                    session.inconsistency()
                )?;
                writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
                None
            }
        };

        if let Some(guess) = suggestion {
            print_turn(out, &session, guess)?;
        }

        match read_input(input, out, suggestion)? {
            Input::Quit => break,
            Input::NewGame => {
                session = solver.start();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Input::Undo => {
                let history = session.history();
                if history.is_empty() {
                    writeln!(out, "Nothing to undo!\n")?;
                } else {
                    session = Session::replay(solver.dictionary(), &history[..history.len() - 1]);
                    writeln!(out, "✓ Undone! Back to turn {}\n", session.history().len() + 1)?;
                }
            }
            Input::Feedback(guess, feedback) => {
                writeln!(out, "  {}", feedback_tiles(&guess, &feedback))?;
                session.record(&guess, feedback);
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "Wordle Solver - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "\nAfter each guess, enter the feedback pattern:\n")?;
    writeln!(out, "  - Use G/g/🟩 for green (correct position)")?;
    writeln!(out, "  - Use Y/y/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - Use -/_/⬜ for gray (not in word)")?;
    writeln!(out, "  - Or type 'win' if you got it right!")?;
    writeln!(out, "  - Played a different word? Enter WORD=FEEDBACK\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n")
}

fn print_turn(out: &mut impl Write, session: &Session<'_>, guess: &Word) -> io::Result<()> {
    let remaining = session.candidates().len();

    writeln!(out, "{}", "─".repeat(60))?;
    writeln!(out, "Turn {}: {remaining} candidates remaining", session.history().len() + 1)?;
    writeln!(out, "{}", "─".repeat(60))?;
    writeln!(out, "\n📊 Suggested guess: {}", guess.text().to_uppercase().bright_white().bold())?;

    if remaining <= SHOW_CANDIDATES {
        let candidates: Vec<Word> = session.candidates().iter().map(|&w| w.clone()).collect();
        writeln!(out, "   Candidates: {}", word_list(&candidates, SHOW_CANDIDATES))?;
    }
    writeln!(out)
}

fn print_solved(out: &mut impl Write, session: &Session<'_>, answer: &Word) -> io::Result<()> {
    let rounds = session.history().len();

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "  {} {}",
        "🎉 The word is".bright_green().bold(),
        answer.text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\n  Found after {} {}",
        rounds.to_string().bright_cyan().bold(),
        guess_noun(rounds)
    )?;

    writeln!(out, "\n  Guess history:")?;
    for (i, (word, feedback)) in session.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            feedback.to_emoji()
        )?;
    }
    writeln!(out)
}

/// Read one line; `None` at end of input
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

/// Keep prompting until the user enters a command or valid feedback
///
/// Plain feedback applies to `suggestion`; without one only commands and
/// `WORD=FEEDBACK` entries are accepted.
fn read_input(
    input: &mut impl BufRead,
    out: &mut impl Write,
    suggestion: Option<&Word>,
) -> Result<Input> {
    loop {
        let Some(line) = prompt(input, out, "Enter feedback (G/Y/-, 'win', or command)")? else {
            return Ok(Input::Quit);
        };

        match line.as_str() {
            "quit" | "q" | "exit" => return Ok(Input::Quit),
            "new" | "n" => return Ok(Input::NewGame),
            "undo" | "u" => return Ok(Input::Undo),
            "" => {}
            _ if line.contains('=') => match parse_entry(&line) {
                Ok((guess, feedback)) => return Ok(Input::Feedback(guess, feedback)),
                Err(err) => writeln!(out, "❌ {err:#}\n")?,
            },
            "win" | "correct" | "yes" | "solved" => {
                if let Some(guess) = suggestion {
                    return Ok(Input::Feedback(guess.clone(), Feedback::PERFECT));
                }
                writeln!(out, "No guess to confirm. Type 'undo' or 'new'.\n")?;
            }
            _ => match (suggestion, line.parse::<Feedback>()) {
                (Some(guess), Ok(feedback)) => {
                    return Ok(Input::Feedback(guess.clone(), feedback));
                }
                (None, Ok(_)) => writeln!(out, "No guess to score. Type 'undo' or 'new'.\n")?,
                (_, Err(err)) => {
                    writeln!(out, "❌ Invalid pattern ({err})! Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n")?;
                }
            },
        }
    }
}
