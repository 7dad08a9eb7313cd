//! Batch conversion command implementation

use anyhow::{bail, Context, Result};
use shuban_core::batch;
use shuban_core::Settings;
use std::path::Path;

/// Convert every eligible text file under `root`
pub fn batch(root: &Path, settings: &Settings) -> Result<()> {
    tracing::debug!(
        "Batch settings: profile={} order={:?} write_mode={:?} keep_going={}",
        settings.profile,
        settings.order,
        settings.write_mode,
        settings.keep_going
    );

    let report = batch::run(root, settings)
        .with_context(|| format!("Batch conversion of {} halted", root.display()))?;

    if report.processed() == 0 {
        println!("No .{} files found in {}", settings.source_extension, root.display());
        return Ok(());
    }

    let converted = report.converted.len();
    let failed = report.failed.len();

    println!("\nBatch conversion complete:");
    println!("  Converted: {}", converted);
    println!("  Failed:    {}", failed);

    for failure in &report.failed {
        println!("  [{}] {}: {}", failure.ordinal, failure.input.display(), failure.error);
    }

    if failed > 0 {
        bail!("Batch conversion completed with {} errors", failed);
    }

    Ok(())
}
