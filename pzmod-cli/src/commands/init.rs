use std::fs;
use std::path::Path;

use console::style;
use pzmod::prelude::*;

/// Standard subdirectories created for a fresh mod.
const INITIAL_DIRECTORIES: &[&str] = &["media/lua", "media/scripts", "media/textures"];

pub fn execute(
    path: &Path,
    name: &str,
    id: Option<&str>,
    description: &str,
    authors: &str,
    version: &str,
) -> anyhow::Result<()> {
    let id = id.map_or_else(|| name.replace(' ', ""), str::to_string);

    let mut info = ModInfo::new();
    info.name = name.to_string();
    info.id = id;
    info.description = description.to_string();
    info.authors = authors.to_string();
    info.version = version.to_string();

    for dir in INITIAL_DIRECTORIES {
        fs::create_dir_all(path.join(dir))?;
    }
    info.save(path.join(MOD_INFO_FILE))?;

    println!(
        "{} Initialized mod at {}",
        style("✓").green(),
        path.display()
    );
    println!("  ID: {}", info.id);
    println!("  Name: {}", info.name);
    Ok(())
}
