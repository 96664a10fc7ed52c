//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line, coloured board and
//! keyboard after every move.

use crate::challenge::Challenge;
use crate::game::{AttemptStore, Game, GameEvent, KeyboardState, Seed, SubmitOutcome};
use crate::output::{print_board, print_challenge, print_keyboard, print_share};
use colored::Colorize;
use std::io::{self, Write};
use std::sync::mpsc::Receiver;

/// Run the simple interactive CLI mode
///
/// `challenge` is a received challenge for the current seed; it can be
/// opened with `reveal <word>`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: AttemptStore>(
    game: &mut Game<'_, S>,
    mut challenge: Option<Challenge>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     yawdle - Text Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} attempts.",
        game.word_length(),
        game.attempts_limit()
    );
    println!("Commands: 'quit', 'new' for a fresh puzzle, 'share' for a challenge link");
    if challenge.is_some() {
        println!("          'reveal <word>' to open the challenge you received");
    }
    println!();

    let events = game.subscribe();
    let mut keyboard = KeyboardState::new();
    // Replayed attempts were emitted before we subscribed
    for row in game.rows() {
        keyboard.apply(&GameEvent::AttemptMade {
            index: 0,
            row: row.clone(),
        });
    }

    if let Some(challenge) = &challenge {
        print_challenge(challenge);
    }

    loop {
        drain_events(&events, &mut keyboard);
        print_board(&game.snapshot());

        if game.is_ended() {
            announce_end(game);
            if wants_new_game(&get_user_input("Play a new puzzle? (yes/no)")?) {
                game.new_game(Seed::random());
                challenge = None;
                continue;
            }
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        print_keyboard(&keyboard);
        let input = get_user_input(&format!("Guess {}", game.attempts().len() + 1))?;
        let command = input.to_lowercase();

        match command.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["quit" | "q" | "exit"] => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ["new"] => {
                game.new_game(Seed::random());
                challenge = None;
                println!("\n🔄 New puzzle started!\n");
            }
            ["share"] => share(game),
            ["reveal", word] => match challenge.as_mut() {
                Some(challenge) => match challenge.try_reveal(word) {
                    Ok(_) => print_challenge(challenge),
                    Err(e) => println!("{}", format!("🔒 {e}. Try again.").red()),
                },
                None => println!("{}", "No challenge to reveal.".yellow()),
            },
            _ => report_outcome(game.submit_attempt(&input)),
        }
    }
}

/// Whether an answer to the end-of-game prompt asks for another puzzle
fn wants_new_game(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "yes" | "y" | "new"
    )
}

fn report_outcome(outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Accepted(_) => {}
        SubmitOutcome::Redundant => println!("{}", "Already tried that word.".yellow()),
        SubmitOutcome::Invalid => println!("{}", "❌ Not in the word list.".red()),
        SubmitOutcome::GameOver => println!("{}", "The game is over.".yellow()),
    }
}

fn announce_end<S: AttemptStore>(game: &Game<'_, S>) {
    if game.is_success() {
        let attempts = game.attempts().len();
        println!(
            "{}",
            "    🎉 🎊 ✨  S O L V E D !  ✨ 🎊 🎉    ".bright_green().bold()
        );
        println!(
            "\n  Solution found in {} {}",
            attempts.to_string().bright_cyan().bold(),
            if attempts == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!(
            "{} {}",
            "❌ Out of attempts. The word was".red().bold(),
            game.target().to_uppercase().bright_yellow().bold()
        );
    }
    share(game);
}

fn share<S: AttemptStore>(game: &Game<'_, S>) {
    match game.share_message(true) {
        Ok(message) => print_share(&message),
        Err(e) => println!("{}", format!("Could not build share link: {e}").red()),
    }
}

fn drain_events(events: &Receiver<GameEvent>, keyboard: &mut KeyboardState) {
    for event in events.try_iter() {
        keyboard.apply(&event);
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yes_answers_start_a_new_game() {
        for answer in ["y", "yes", "Y", "new", " yes "] {
            assert!(wants_new_game(answer), "{answer:?}");
        }
        for answer in ["n", "no", "N", "quit", ""] {
            assert!(!wants_new_game(answer), "{answer:?}");
        }
    }
}
