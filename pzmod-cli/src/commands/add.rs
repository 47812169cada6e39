use std::path::Path;

use console::style;
use pzmod::prelude::*;

pub fn item(
    path: &Path,
    name: &str,
    display_name: Option<&str>,
    item_type: &str,
) -> anyhow::Result<()> {
    let scaffolder = Scaffolder::new(path);
    let created = scaffolder.add_item(name, display_name, item_type)?;
    println!("{} Created item: {}", style("✓").green(), created.display());
    Ok(())
}

pub fn recipe(path: &Path, name: &str, result: &str, source: &str) -> anyhow::Result<()> {
    let scaffolder = Scaffolder::new(path);
    let created = scaffolder.add_recipe(name, result, source)?;
    println!(
        "{} Created recipe: {}",
        style("✓").green(),
        created.display()
    );
    Ok(())
}
