//! Formatting utilities used for CLI and export outputs.

use ansi_term::{Colour, Style};
use unicode_width::UnicodeWidthStr;

use crate::models::ShiftStatus;

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// Left-align on display width, so names with wide characters still line up.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{s}", " ".repeat(pad))
}

/// Integer amount with `,` thousands grouping: 1234567 -> "1,234,567".
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if amount < 0 {
        format!("-{out}")
    } else {
        out
    }
}

pub fn status_colour(status: ShiftStatus) -> Colour {
    match status {
        ShiftStatus::Confirmed => Colour::Green,
        ShiftStatus::Declined => Colour::Red,
        ShiftStatus::Undecided => Colour::Fixed(244),
    }
}

pub fn colorize_status(status: ShiftStatus) -> String {
    status_colour(status).paint(status.as_str()).to_string()
}

/// Unassigned counts above zero stand out in yellow; zero is greyed.
pub fn colorize_unassigned(count: usize) -> String {
    if count > 0 {
        Colour::Yellow.bold().paint(count.to_string()).to_string()
    } else {
        Colour::Fixed(244).paint("0").to_string()
    }
}
