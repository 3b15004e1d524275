//! Snapshot command: aggregate one repository and print the report

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::models::SnapshotDisplay;
use crate::output::Formattable;

/// Run the snapshot command
pub async fn run(opts: &GlobalOptions, reference: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let aggregator = ctx.aggregator();

    let pb = spinner(!opts.no_progress);
    pb.set_message(format!("Calculating {}...", reference.trim()));

    let result = aggregator.snapshot(reference).await;
    pb.finish_and_clear();

    let snapshot = result?;
    debug!(
        "Snapshot for {}/{} complete ({} languages)",
        snapshot.owner,
        snapshot.name,
        snapshot.languages.len()
    );

    SnapshotDisplay::new(&snapshot).print(ctx.format)
}

/// Spinner on stderr; hidden when disabled or when stderr is not a terminal
fn spinner(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.yellow} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
