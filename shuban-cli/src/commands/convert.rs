//! Convert command implementation

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use shuban_core::batch::{convert_file, output_path_for};
use shuban_core::{ScriptConverter, Settings};
use std::path::Path;
use std::time::{Duration, Instant};

/// Convert a single text file into a package
pub fn convert(input: &Path, output: Option<&Path>, settings: &Settings) -> Result<()> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| output_path_for(input));

    // Set up progress spinner
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Converting {}...", input.display()));

    let started = Instant::now();
    let converter = ScriptConverter::new(settings.profile);
    let conversion = convert_file(input, &output, &converter, settings)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    tracing::info!(
        "Finished {} in {:.2}s",
        input.display(),
        started.elapsed().as_secs_f64()
    );

    pb.finish_with_message(format!(
        "Converted {} -> {} ({})",
        input.display(),
        conversion.output.display(),
        conversion.identifier
    ));

    Ok(())
}
