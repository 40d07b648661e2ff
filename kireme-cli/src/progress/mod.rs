//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a request is in flight
///
/// Dropping the indicator clears the spinner, so the loading state is
/// released on every exit path - success, service error, or network error.
pub struct LoadingIndicator {
    spinner: Option<ProgressBar>,
}

impl LoadingIndicator {
    /// Start the loading spinner (no-op when quiet)
    pub fn start(quiet: bool) -> Self {
        if quiet {
            return Self { spinner: None };
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Processing...");
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { spinner: Some(pb) }
    }

    /// Update the status message next to the spinner
    pub fn set_message(&self, message: impl Into<String>) {
        if let Some(pb) = &self.spinner {
            pb.set_message(message.into());
        }
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}
