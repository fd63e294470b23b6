//! CLI presenter for output formatting

use std::future::Future;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
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
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the actual command output)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list and content summaries)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a network operation behind a spinner, clearing it before any
/// other output is printed
pub async fn with_spinner<T, E, F>(presenter: &mut Presenter, message: &str, op: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    presenter.start_spinner(message);
    let result = op.await;
    presenter.stop_spinner();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_lifecycle_start_then_stop() {
        let mut presenter = Presenter::new();
        assert!(presenter.spinner.is_none());

        presenter.start_spinner("Working");
        assert!(presenter.spinner.is_some());

        presenter.stop_spinner();
        assert!(presenter.spinner.is_none());
    }

    #[tokio::test]
    async fn with_spinner_passes_result_through() {
        let mut presenter = Presenter::new();
        let ok: Result<u32, String> =
            with_spinner(&mut presenter, "Working", async { Ok(7) }).await;
        assert_eq!(ok, Ok(7));

        let err: Result<u32, String> =
            with_spinner(&mut presenter, "Working", async { Err("boom".to_string()) }).await;
        assert_eq!(err, Err("boom".to_string()));
    }
}
