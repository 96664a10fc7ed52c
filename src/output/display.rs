//! Display functions for boards and command results

use super::formatters::{colored_cell, create_progress_bar, row_text};
use crate::challenge::{Challenge, ShareMessage};
use crate::commands::{Distribution, RevealResult};
use crate::core::LetterCell;
use crate::game::{GameSnapshot, GameStatus, KEYBOARD_LAYOUT, KeyboardState};
use colored::Colorize;

/// Print the board of a game, one coloured row per attempt slot
pub fn print_board(snapshot: &GameSnapshot) {
    let score = match snapshot.status {
        GameStatus::Ended { success: false } => "X".to_string(),
        _ => snapshot.attempts.len().to_string(),
    };

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " Puzzle {}   {}/{}",
        snapshot.seed.bright_yellow().bold(),
        score,
        snapshot.attempts_limit
    );
    println!("{}", "─".repeat(40).cyan());

    let colorize = colored::control::SHOULD_COLORIZE.should_colorize();
    for row in &snapshot.board {
        println!("   {}", row_text(row, colorize));
    }
    println!();
}

/// Print the keyboard with letter colouring
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in KEYBOARD_LAYOUT.iter().enumerate() {
        let keys: String = row
            .chars()
            .map(|c| colored_cell(LetterCell::new(c, keyboard.state_of(c))).to_string())
            .collect();
        println!("{}{keys}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print a share message as the sharing sink would receive it
pub fn print_share(message: &ShareMessage) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    println!(" {}", message.title.bright_cyan().bold());
    println!("{}", "═".repeat(40).bright_cyan());
    println!("{}", message.body);
    println!("\n{}", message.url.underline());
    println!();
}

/// Print the summary, or the full play-through once revealed
pub fn print_challenge(challenge: &Challenge) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " Challenge for puzzle {}",
        challenge.seed().as_str().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    if let Some(revealed) = challenge.revealed() {
        println!(
            " Solution: {}",
            revealed.solution.to_uppercase().green().bold()
        );
        let colorize = colored::control::SHOULD_COLORIZE.should_colorize();
        for (i, row) in revealed.rows.iter().enumerate() {
            println!(
                "   {} {}",
                (i + 1).to_string().bright_black(),
                row_text(row, colorize)
            );
        }
        let verdict = if revealed.is_success() {
            format!("✅ Solved in {}", revealed.rows.len()).green().bold()
        } else {
            "❌ Not solved".red().bold()
        };
        println!("\n {verdict}");
    } else if let Some(summary) = challenge.summary() {
        println!(" {}", "Hidden play-through:".bright_black());
        for line in summary.to_emoji().lines() {
            println!("   {line}");
        }
    } else {
        println!(" {}", "Hidden play-through (no summary)".bright_black());
    }
    println!();
}

/// Print the outcome of the reveal command
pub fn print_reveal_result(result: &RevealResult) {
    print_challenge(&result.challenge);
    if let Some(error) = &result.error {
        println!("{}", format!("🔒 Reveal failed: {error}. Try again.").red());
    }
}

/// Print a selection distribution
pub fn print_distribution(dist: &Distribution) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SELECTION DISTRIBUTION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Sampling:".bright_cyan().bold());
    println!("   Seeds sampled:    {}", dist.samples);
    println!(
        "   Bias exponent:    {}",
        format!("{:.2}", dist.bias).bright_yellow().bold()
    );
    println!("   Distinct words:   {}", dist.distinct_words);
    println!("   Time taken:       {:.2}s", dist.duration.as_secs_f64());

    println!("\n📈 {}", "By frequency bucket:".bright_cyan().bold());
    for bucket in &dist.buckets {
        let pct = if dist.samples > 0 {
            bucket.hits as f64 / dist.samples as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {:>6} ({:>4} words): {} {:5} ({pct:5.1}%)",
            bucket.frequency,
            bucket.words,
            bar.green(),
            bucket.hits
        );
    }

    if !dist.top_words.is_empty() {
        println!("\n🏆 {}", "Most selected:".bright_cyan().bold());
        for (word, count) in &dist.top_words {
            println!("   {:<8} {count}", word.to_uppercase());
        }
    }
}
