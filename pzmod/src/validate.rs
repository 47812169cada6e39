//! Mod content validation
//!
//! Checks a mod tree against the b42 packaging rules: descriptor presence
//! and fields, referenced poster/tile images, and the file-extension
//! whitelist. All findings are collected into a report; validation itself
//! only fails when the root cannot be read at all.

use std::path::Path;

use crate::error::Result;
use crate::info::MOD_INFO_FILE;
use crate::root::ModRoot;

/// File extensions accepted in a b42 mod tree, compared case-insensitively.
pub const VALID_EXTENSIONS: &[&str] = &[
    "lua", "txt", "png", "ogg", "wav", "xml", "json", "fbx", "bin", "tiles", "tmx", "tsx",
];

/// Result of mod validation
#[derive(Clone, Debug, Default)]
pub struct ModValidationResult {
    /// Problems found, in discovery order. Empty means the mod is valid.
    pub issues: Vec<String>,
}

impl ModValidationResult {
    /// Whether validation found no issues.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate a mod's descriptor, referenced images, and file extensions.
///
/// Issue order is fixed: missing descriptor, descriptor field issues,
/// poster, tile, then extension findings in sorted file order. Content
/// problems never become errors; the caller decides their severity.
pub fn validate_mod(root: &ModRoot) -> Result<ModValidationResult> {
    let mut issues = Vec::new();

    match root.info() {
        None => issues.push("Missing mod.info file".to_string()),
        Some(info) => {
            issues.extend(info.validate());

            check_image(root.path(), &info.poster, "Poster", &mut issues);
            check_image(root.path(), &info.tile, "Tile", &mut issues);
        }
    }

    for relative in root.files()? {
        let path = Path::new(&relative);
        if path.file_name().is_some_and(|name| name == MOD_INFO_FILE) {
            continue;
        }
        if let Some(ext) = path.extension() {
            let ext = ext.to_string_lossy().to_lowercase();
            if !ext.is_empty() && !VALID_EXTENSIONS.contains(&ext.as_str()) {
                issues.push(format!("Unusual file extension: {relative}"));
            }
        }
    }

    Ok(ModValidationResult { issues })
}

/// Check one referenced image: it must exist under the root and decode as a
/// well-formed image. Both failure modes become issues, never errors.
fn check_image(root: &Path, relative: &str, kind: &str, issues: &mut Vec<String>) {
    if relative.is_empty() {
        return;
    }

    let path = root.join(relative);
    if !path.exists() {
        issues.push(format!("{kind} image not found: {relative}"));
    } else if image::open(&path).is_err() {
        issues.push(format!("Invalid {} image: {relative}", kind.to_lowercase()));
    }
}
