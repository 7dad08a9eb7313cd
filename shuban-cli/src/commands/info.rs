//! Info command implementation

use anyhow::{Context, Result};
use shuban_core::inspect::inspect;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Display information about a converted package
pub fn info(input: &Path, json: bool) -> Result<()> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let mut reader = BufReader::new(file);

    let info = inspect(&mut reader)
        .with_context(|| format!("Failed to read package {}", input.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Title:       {}", info.title);
        if !info.creators.is_empty() {
            println!("Authors:     {}", info.creators.join(", "));
        }
        if let Some(language) = &info.language {
            println!("Language:    {}", language);
        }
        if let Some(identifier) = &info.identifier {
            println!("Identifier:  {}", identifier);
        }
        println!(
            "Direction:   {}",
            info.page_direction.as_deref().unwrap_or("unspecified")
        );
        println!("Spine:       {}", info.spine.join(", "));
        println!("Contents:    {}", info.toc.join(", "));
        for (i, text) in info.containers.iter().enumerate() {
            println!("Container {}: {} characters", i + 1, text.chars().count());
        }
    }

    Ok(())
}
