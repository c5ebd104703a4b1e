//! CLI utility functions for terminal interaction and formatting.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use console::{style, Term};
use dialoguer::{FuzzySelect, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::error::{Error, Result};

/// Prompt for a non-empty line of text.
pub fn prompt_input(message: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(message)
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("a value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Pick one of `items`, typing filters the list. Returns the chosen index.
pub fn fuzzy_select<T: ToString>(message: &str, items: &[T]) -> Result<usize> {
    FuzzySelect::new()
        .with_prompt(message)
        .items(items)
        .default(0)
        .interact_opt()?
        .ok_or_else(|| Error::Prompt("selection cancelled".to_string()))
}

/// Pick one of `items` with the arrow keys. Returns the chosen index.
pub fn select<T: ToString>(message: &str, items: &[T]) -> Result<usize> {
    Select::new()
        .with_prompt(message)
        .items(items)
        .default(0)
        .interact_opt()?
        .ok_or_else(|| Error::Prompt("selection cancelled".to_string()))
}

/// Create a spinner progress bar with message.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(template);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print error message in red.
pub fn print_error(message: &str) {
    let term = Term::stderr();
    let _ = term.write_line(&format!("{} {}", style("✗").red().bold(), message));
}

/// Print info message in blue.
pub fn print_info(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("ℹ").blue().bold(), message));
}

/// Print warning message in yellow.
pub fn print_warning(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("⚠").yellow().bold(), message));
}

/// Create a table with custom headers.
pub fn create_table_with_headers(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| style(*h).bold().to_string()));
    table
}

/// Shares in display units with fixed precision
pub fn format_shares(shares: f64) -> String {
    format!("{:.6}", shares)
}

/// Coin amount and denom as a single string, e.g. `1500000uatom`
pub fn format_coin(coin: Option<&crate::types::Coin>) -> String {
    match coin {
        Some(c) => format!("{}{}", c.amount, c.denom),
        None => "-".to_string(),
    }
}
