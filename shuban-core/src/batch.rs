//! Batch driver: walks a directory tree and converts every eligible text
//! file into a sibling EPUB, one file at a time.

use crate::config::{Settings, TraversalOrder, WriteMode};
use crate::encoder::EPUB_EXTENSION;
use crate::error::{Result, ShubanError};
use crate::markup::document_for_source;
use crate::script::ScriptConverter;
use crate::types::Package;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};
use uuid::Uuid;

/// Result of converting one file
#[derive(Debug, Clone)]
pub struct FileConversion {
    pub output: PathBuf,
    pub identifier: Uuid,
}

/// A converted file within a batch
#[derive(Debug, Clone)]
pub struct ConvertedFile {
    /// 1-based position in the run
    pub ordinal: usize,
    pub input: PathBuf,
    pub output: PathBuf,
    pub identifier: Uuid,
    pub elapsed: Duration,
}

/// A file that failed while `keep_going` was set
#[derive(Debug, Clone)]
pub struct FailedFile {
    pub ordinal: usize,
    pub input: PathBuf,
    pub error: String,
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
}

impl BatchReport {
    /// Number of files attempted
    pub fn processed(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

/// Whether a file name selects a source document
pub fn is_eligible(file_name: &str, settings: &Settings) -> bool {
    let suffix = format!(".{}", settings.source_extension);
    file_name.ends_with(&suffix) && !file_name.starts_with(&settings.hidden_prefix)
}

/// Sibling output path: same directory, same stem, `.epub`
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_file_name(format!("{}.{}", display_name(input), EPUB_EXTENSION))
}

/// Base name of `path` without its last extension
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Recursively collect eligible source files under `root`
pub fn discover(root: &Path, settings: &Settings) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ShubanError::RootNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    collect(root, settings, &mut files)?;

    if settings.order == TraversalOrder::Lexicographic {
        files.sort();
    }

    debug!("Discovered {} source files under {}", files.len(), root.display());
    Ok(files)
}

fn collect(dir: &Path, settings: &Settings, out: &mut Vec<PathBuf>) -> Result<()> {
    let walk_err = |source| ShubanError::Walk {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(walk_err)? {
        let entry = entry.map_err(walk_err)?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(walk_err)?;

        if file_type.is_dir() {
            collect(&path, settings, out)?;
            continue;
        }

        // Symlinked directories are listed but not descended into
        if file_type.is_symlink() && path.is_dir() {
            debug!("Skipping symlinked directory {}", path.display());
            continue;
        }

        let name = entry.file_name();
        if is_eligible(&name.to_string_lossy(), settings) {
            out.push(path);
        }
    }
    Ok(())
}

/// Convert one source file into a package at `output`
pub fn convert_file(
    input: &Path,
    output: &Path,
    converter: &ScriptConverter,
    settings: &Settings,
) -> Result<FileConversion> {
    if settings.write_mode == WriteMode::Replace && output.exists() {
        debug!("Removing existing output {}", output.display());
        fs::remove_file(output).map_err(|source| ShubanError::Write {
            path: output.to_path_buf(),
            source,
        })?;
    }

    let source = fs::read_to_string(input).map_err(|source| ShubanError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let markup = document_for_source(&source, converter, settings);
    let package = Package::assemble(&display_name(input), &markup, settings);

    match settings.write_mode {
        WriteMode::Replace => write_in_place(&package, output)?,
        WriteMode::Atomic => write_atomically(&package, output)?,
    }

    Ok(FileConversion {
        output: output.to_path_buf(),
        identifier: package.id(),
    })
}

fn write_in_place(package: &Package, output: &Path) -> Result<()> {
    let write_err = |source| ShubanError::Write {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    package.write_epub(&mut writer)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

fn write_atomically(package: &Package, output: &Path) -> Result<()> {
    let write_err = |source| ShubanError::Write {
        path: output.to_path_buf(),
        source,
    };

    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        package.write_epub(&mut writer)?;
        writer.flush().map_err(write_err)?;
    }
    temp.persist(output).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Convert every eligible file under `root`.
///
/// Files are processed sequentially in discovery order. The first failure
/// halts the run unless `settings.keep_going` is set.
pub fn run(root: &Path, settings: &Settings) -> Result<BatchReport> {
    let inputs = discover(root, settings)?;
    let converter = ScriptConverter::new(settings.profile);
    let mut report = BatchReport::default();

    for (index, input) in inputs.iter().enumerate() {
        let ordinal = index + 1;
        let output = output_path_for(input);
        let started = Instant::now();

        info!("Processing file {} : {}", ordinal, input.display());

        match convert_file(input, &output, &converter, settings) {
            Ok(conversion) => {
                let elapsed = started.elapsed();
                info!(
                    "Finished {} in {:.2}s",
                    input.display(),
                    elapsed.as_secs_f64()
                );
                report.converted.push(ConvertedFile {
                    ordinal,
                    input: input.clone(),
                    output: conversion.output,
                    identifier: conversion.identifier,
                    elapsed,
                });
            }
            Err(e) if settings.keep_going => {
                error!("Failed to convert {}: {}", input.display(), e);
                report.failed.push(FailedFile {
                    ordinal,
                    input: input.clone(),
                    error: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    info!("All files processed");
    Ok(report)
}
