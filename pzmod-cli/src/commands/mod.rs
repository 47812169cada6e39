use clap::Subcommand;
use std::path::{Path, PathBuf};

pub mod add;
pub mod build;
pub mod info;
pub mod init;
pub mod validate;

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new mod directory
    Init {
        /// Path for the new mod
        path: PathBuf,

        /// Mod display name
        #[arg(long, default_value = "My Awesome Mod")]
        name: String,

        /// Internal mod ID (defaults to the name without spaces)
        #[arg(long)]
        id: Option<String>,

        /// Mod description
        #[arg(long, default_value = "A Project Zomboid mod")]
        description: String,

        /// Mod author(s)
        #[arg(long, default_value = "Unknown")]
        authors: String,

        /// Mod version
        #[arg(long, default_value = "1.0")]
        version: String,
    },

    /// Validate a mod directory
    Validate {
        /// Path to the mod directory
        path: PathBuf,
    },

    /// Build a mod package
    Build {
        /// Path to the mod directory
        path: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "./mods_output")]
        output: PathBuf,

        /// Copy to a directory instead of creating a ZIP file
        #[arg(long)]
        no_zip: bool,

        /// Skip validation before building
        #[arg(long)]
        skip_validation: bool,

        /// Build even when validation reports issues
        #[arg(long)]
        force: bool,
    },

    /// Display mod information
    Info {
        /// Path to the mod directory
        path: PathBuf,
    },

    /// Add content to a mod
    Add {
        /// Path to the mod directory
        path: PathBuf,

        #[command(subcommand)]
        command: AddCommands,
    },
}

/// Content scaffolding commands
#[derive(Subcommand)]
pub enum AddCommands {
    /// Add an item definition
    Item {
        /// Item name (ID)
        #[arg(long)]
        name: String,

        /// Display name (defaults to the item name)
        #[arg(long)]
        display_name: Option<String>,

        /// Item type (Normal, Weapon, Food, Clothing, Literature)
        #[arg(long, default_value = "Normal")]
        item_type: String,
    },

    /// Add a recipe definition
    Recipe {
        /// Recipe name
        #[arg(long)]
        name: String,

        /// Result item
        #[arg(long)]
        result: String,

        /// Source item
        #[arg(long, default_value = "Base.Plank")]
        source: String,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Init {
                path,
                name,
                id,
                description,
                authors,
                version,
            } => init::execute(path, name, id.as_deref(), description, authors, version),
            Commands::Validate { path } => validate::execute(path),
            Commands::Build {
                path,
                output,
                no_zip,
                skip_validation,
                force,
            } => build::execute(path, output, !*no_zip, *skip_validation, *force),
            Commands::Info { path } => info::execute(path),
            Commands::Add { path, command } => command.execute(path),
        }
    }
}

impl AddCommands {
    pub fn execute(&self, path: &Path) -> anyhow::Result<()> {
        match self {
            AddCommands::Item {
                name,
                display_name,
                item_type,
            } => add::item(path, name, display_name.as_deref(), item_type),
            AddCommands::Recipe {
                name,
                result,
                source,
            } => add::recipe(path, name, result, source),
        }
    }
}
