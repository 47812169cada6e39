//! # pzmod
//!
//! A library for building and packaging Project Zomboid b42 mods.
//!
//! ## What it covers
//!
//! - **Descriptors** - parse, edit, and write `mod.info` files
//! - **Validation** - check a mod tree and its referenced assets before shipping
//! - **Packaging** - produce a ZIP archive or a plain directory copy
//! - **Scaffolding** - generate item and recipe script boilerplate
//!
//! ## Quick Start
//!
//! ```no_run
//! use pzmod::prelude::*;
//!
//! let root = ModRoot::open("my_mod")?;
//!
//! let report = validate_mod(&root)?;
//! for issue in &report.issues {
//!     eprintln!("issue: {issue}");
//! }
//!
//! // Build anyway - the caller decides whether issues are fatal.
//! let artifact = build_mod(&root, "mods_output", true)?;
//! println!("built {}", artifact.display());
//! # Ok::<(), pzmod::Error>(())
//! ```
//!
//! ## Mod layout
//!
//! Mod trees follow the b42 convention of `media/lua`, `media/scripts`,
//! `media/textures`, `media/ui`, `media/sound`, `media/models`,
//! `media/clothing`, and `media/maps` subdirectories. The convention is
//! advisory: none of the directories are required to exist, and validation
//! checks file extensions rather than directory placement.

pub mod build;
pub mod error;
pub mod info;
pub mod root;
pub mod scaffold;
pub mod scan;
pub mod validate;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::build::build_mod;
    pub use crate::error::{Error, Result};
    pub use crate::info::{MOD_INFO_FILE, ModInfo, PZ_VERSION};
    pub use crate::root::ModRoot;
    pub use crate::scaffold::Scaffolder;
    pub use crate::validate::{ModValidationResult, VALID_EXTENSIONS, validate_mod};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
