use std::path::Path;
use std::time::Instant;

use console::style;
use pzmod::prelude::*;

use crate::progress;

pub fn execute(
    path: &Path,
    output: &Path,
    archive: bool,
    skip_validation: bool,
    force: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let root = ModRoot::open(path)?;

    let total = if skip_validation { 1 } else { 2 };
    let mut step = 0;

    if !skip_validation {
        step += 1;
        progress::print_step(step, total, progress::LOOKING_GLASS, "Validating mod...");

        let report = validate_mod(&root)?;
        if !report.is_valid() {
            println!("{}", style("Validation issues found:").red().bold());
            for issue in &report.issues {
                println!("  - {issue}");
            }
            if !force {
                println!(
                    "{}",
                    style("Build aborted (use --force to build anyway)").yellow()
                );
                std::process::exit(1);
            }
            println!(
                "{}",
                style("Continuing build despite validation issues...").yellow()
            );
        }
    }

    step += 1;
    progress::print_step(step, total, progress::PACKAGE, "Building package...");
    let artifact = build_mod(&root, output, archive)?;

    progress::print_done(started.elapsed());
    println!("Output: {}", artifact.display());
    Ok(())
}
