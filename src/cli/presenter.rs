//! CLI presenter for output formatting

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::prescription::human_readable_bytes;

/// A running spinner shown while waiting on the recognition service.
///
/// Cloning yields another handle to the same spinner.
#[derive(Clone)]
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Replace the spinner message
    pub fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Finish with a success mark
    pub fn success(&self, message: &str) {
        self.bar
            .finish_with_message(format!("{} {}", "✓".green(), message));
    }

    /// Finish with a failure mark
    pub fn fail(&self, message: &str) {
        self.bar.finish_with_message(format!("{} {}", "✗".red(), message));
    }

    /// Remove the spinner without a status line
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Start a spinner with message
    pub fn start_spinner(&self, message: &str) -> Spinner {
        Spinner::start(message)
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {} {}", "✗".red(), "Error:".red().bold(), message);
    }

    /// Output text to stdout (the actual transcription output)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Format the export summary line
    pub fn format_export_summary(&self, path: &str, pages: usize, size_bytes: usize) -> String {
        let pages_label = if pages == 1 { "page" } else { "pages" };
        format!(
            "PDF saved to {} ({} {}, {})",
            path,
            pages,
            pages_label,
            human_readable_bytes(size_bytes)
        )
    }

    /// Format the warning shown when characters were replaced in the PDF
    pub fn format_substitution_warning(&self, substitutions: usize) -> String {
        let noun = if substitutions == 1 {
            "character"
        } else {
            "characters"
        };
        format!(
            "{} {} could not be printed in the PDF and were replaced with '?'",
            substitutions, noun
        )
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_summary_single_page() {
        let presenter = Presenter::new();
        let line = presenter.format_export_summary("Receta_Traducida.pdf", 1, 900);
        assert_eq!(line, "PDF saved to Receta_Traducida.pdf (1 page, 900 B)");
    }

    #[test]
    fn export_summary_many_pages() {
        let presenter = Presenter::new();
        let line = presenter.format_export_summary("out.pdf", 3, 2048);
        assert!(line.contains("3 pages"));
        assert!(line.contains("2.0 KB"));
    }

    #[test]
    fn substitution_warning_pluralizes() {
        let presenter = Presenter::new();
        assert!(presenter
            .format_substitution_warning(1)
            .starts_with("1 character could"));
        assert!(presenter
            .format_substitution_warning(4)
            .starts_with("4 characters could"));
    }

    #[test]
    fn spinner_finishes() {
        let spinner = Presenter::new().start_spinner("Analizando...");
        let handle = spinner.clone();
        handle.clear();
        assert!(spinner.bar.is_finished());
    }

    #[test]
    fn spinner_reports_outcome() {
        let presenter = Presenter::new();

        let ok = presenter.start_spinner("Analizando...");
        ok.set_message("Waiting for Gemini...");
        ok.success("Prescription analyzed (1.2 KB)");
        assert!(ok.bar.is_finished());
        assert!(ok.bar.message().contains("Prescription analyzed"));

        let failed = presenter.start_spinner("Analizando...");
        failed.fail("Analysis failed");
        assert!(failed.bar.is_finished());
        assert!(failed.bar.message().contains("Analysis failed"));
    }
}
