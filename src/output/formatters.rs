//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// Foreground for every feedback letter
const LETTER: (u8, u8, u8) = (255, 255, 255);

/// Background for a letter in the right place
const EXACT_BG: (u8, u8, u8) = (106, 170, 100);

/// Background for a letter found elsewhere in the word
const CLOSE_BG: (u8, u8, u8) = (201, 180, 88);

/// Background for a letter not in the word
const WRONG_BG: (u8, u8, u8) = (220, 20, 60);

/// Background color for a status
#[must_use]
pub const fn status_background(status: LetterStatus) -> (u8, u8, u8) {
    match status {
        LetterStatus::Exact => EXACT_BG,
        LetterStatus::Close => CLOSE_BG,
        LetterStatus::Wrong => WRONG_BG,
    }
}

/// Style a single letter as a colored box
#[must_use]
pub fn style_letter(letter: char, status: LetterStatus) -> ColoredString {
    paint(&letter.to_string(), status)
}

/// Format a guess as individually styled uppercase letters
///
/// Each letter carries its own reset so colors never bleed.
#[must_use]
pub fn format_guess(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| style_letter(letter.to_ascii_uppercase(), status).to_string())
        .collect()
}

/// The game title in the Exact color
#[must_use]
pub fn title(text: &str) -> ColoredString {
    paint(text, LetterStatus::Exact)
}

fn paint(text: &str, status: LetterStatus) -> ColoredString {
    let (r, g, b) = status_background(status);
    text.truecolor(LETTER.0, LETTER.1, LETTER.2).on_truecolor(r, g, b).bold()
}
