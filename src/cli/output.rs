//! Output formatting and progress indication for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::game::{LOSS, Score, WIN};

/// Create a spinner for long-running analysis tasks
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Render a search score, naming the sentinel extremes
pub fn format_score(score: Score) -> String {
    if score == WIN {
        "win".to_string()
    } else if score == LOSS {
        "loss".to_string()
    } else {
        format!("{score}")
    }
}
