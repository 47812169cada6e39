use std::path::Path;

use console::style;
use pzmod::prelude::*;

pub fn execute(path: &Path) -> anyhow::Result<()> {
    let descriptor = path.join(MOD_INFO_FILE);
    if !descriptor.exists() {
        anyhow::bail!("mod.info not found at {}", descriptor.display());
    }

    let info = ModInfo::load(&descriptor)?;

    println!("{}", style("Mod Information").bold());
    println!("  Name: {}", info.name);
    println!("  ID: {}", info.id);
    println!("  Description: {}", info.description);
    println!("  Version: {}", info.version);
    println!("  PZ Version: {}", info.pzversion);

    if !info.authors.is_empty() {
        println!("  Authors: {}", info.authors);
    }
    if !info.url.is_empty() {
        println!("  URL: {}", info.url);
    }
    if !info.poster.is_empty() {
        println!("  Poster: {}", info.poster);
    }
    if !info.tile.is_empty() {
        println!("  Tile: {}", info.tile);
    }
    if !info.require.is_empty() {
        println!("  Requires: {}", info.require.join(", "));
    }

    Ok(())
}
