//! Boilerplate generation for mod content
//!
//! Generates item and recipe script definitions under `media/scripts/`.
//! Existing files are never overwritten; picking a fresh name is on the
//! caller.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Generates script boilerplate inside a mod directory.
pub struct Scaffolder {
    mod_path: PathBuf,
}

impl Scaffolder {
    #[must_use]
    pub fn new(mod_path: impl AsRef<Path>) -> Self {
        Self {
            mod_path: mod_path.as_ref().to_path_buf(),
        }
    }

    /// Create an item definition script.
    ///
    /// `display_name` defaults to `name`; `item_type` is one of the script
    /// item types (Normal, Weapon, Food, Clothing, Literature). Returns the
    /// created file path.
    pub fn add_item(
        &self,
        name: &str,
        display_name: Option<&str>,
        item_type: &str,
    ) -> Result<PathBuf> {
        let display_name = display_name.unwrap_or(name);
        let content = format!(
            r"module MyMod {{

    item {name}
    {{
        Type = {item_type},
        DisplayName = {display_name},
        Icon = Question,
        Weight = 1.0,
    }}

}}
"
        );

        self.write_script(&script_stem(name), &content)
    }

    /// Create a recipe definition script turning `source` into `result`.
    pub fn add_recipe(&self, name: &str, result: &str, source: &str) -> Result<PathBuf> {
        let content = format!(
            r"module MyMod {{

    recipe {name}
    {{
        {source},
        Result:{result},
        Time:50.0,
        Category:Survivalist,
    }}

}}
"
        );

        self.write_script(&format!("{}_recipe", script_stem(name)), &content)
    }

    fn write_script(&self, stem: &str, content: &str) -> Result<PathBuf> {
        let scripts_dir = self.mod_path.join("media").join("scripts");
        fs::create_dir_all(&scripts_dir)?;

        let path = scripts_dir.join(format!("{stem}.txt"));
        if path.exists() {
            return Err(Error::FileExists { path });
        }
        fs::write(&path, content)?;

        tracing::debug!("Scaffolded {}", path.display());
        Ok(path)
    }
}

fn script_stem(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}
