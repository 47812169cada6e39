use std::path::Path;

use console::style;
use pzmod::prelude::*;

use crate::progress;

pub fn execute(path: &Path) -> anyhow::Result<()> {
    let root = ModRoot::open(path)?;

    let spinner = progress::simple_spinner("Validating mod...");
    let report = validate_mod(&root)?;
    spinner.finish_and_clear();

    if !report.is_valid() {
        println!("{}", style("Validation issues found:").red().bold());
        for issue in &report.issues {
            println!("  - {issue}");
        }
        std::process::exit(1);
    }

    println!("{}", style("Mod validation passed").green().bold());

    if let Some(info) = root.info() {
        println!("  Name: {}", info.name);
        println!("  ID: {}", info.id);
        println!("  Version: {} (PZ {})", info.version, info.pzversion);
        if !info.authors.is_empty() {
            println!("  Authors: {}", info.authors);
        }
    }

    let file_count = root.files()?.len();
    let size_mb = root.total_size()? as f64 / (1024.0 * 1024.0);
    println!("  Files: {file_count}");
    println!("  Size: {size_mb:.2} MB");

    Ok(())
}
