//! Status messages on stderr.

use owo_colors::OwoColorize;

pub fn success(message: &str, color: bool) {
    if color {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {}", message);
    }
}

pub fn warning(message: &str, color: bool) {
    if color {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {}", message);
    }
}
