//! Terminal output for the organizing pass.
//!
//! Centralizes styling so progress lines, per-file results, and the closing
//! summary all look consistent. Colors are handled by `colored`, which
//! disables itself automatically when output is not a terminal.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;

/// Styled output helpers used by the CLI and the organizer.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints an informational progress line in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a per-file success line with a green checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error line in red to standard error.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Creates the progress bar shown while files are being moved.
    pub fn move_progress_bar(total: u64) -> ProgressBar {
        let bar = ProgressBar::new(total);
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("█▓░"));
        }
        bar
    }

    /// Prints the per-category move counts after a run.
    pub fn summary_table(moved: &HashMap<String, usize>, total: usize) {
        if moved.is_empty() {
            println!("Nothing to tidy.");
            return;
        }

        // Sort category names for stable output.
        let mut categories: Vec<_> = moved.iter().collect();
        categories.sort_by_key(|&(name, _)| name);

        println!("\n{}", "Tidied up:".bold());
        for (category, count) in categories {
            let noun = if *count == 1 { "file" } else { "files" };
            println!("  {} → {} {}", category, count.to_string().green(), noun);
        }
        println!(
            "{} {} moved",
            "Total:".bold(),
            total.to_string().green().bold()
        );
    }
}
