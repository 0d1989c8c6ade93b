//! CLI command implementations

mod search;
mod show;

pub use search::search;
pub use show::show;

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Message shown while a catalog request is in flight
const LOADING_MESSAGE: &str = "Fetching data...";

/// Spinner shown on stderr until the fetch finishes
fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(LOADING_MESSAGE);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
