//! `mod.info` descriptor handling (b42 format)
//!
//! The descriptor is a plain-text file of `key=value` lines. Parsing is
//! deliberately tolerant so that half-edited files can still be loaded;
//! [`ModInfo::validate`] reports problems without rejecting the record.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Platform version tag written into every descriptor.
pub const PZ_VERSION: &str = "b42";

/// Name of the descriptor file expected at the mod root.
pub const MOD_INFO_FILE: &str = "mod.info";

/// A `mod.info` metadata record.
///
/// The record holds whatever the file holds, including values that would
/// fail validation - a mod that is still being edited may have an empty
/// `id`. Validation is advisory and separate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModInfo {
    /// Display name.
    pub name: String,
    /// Internal mod ID (`[A-Za-z0-9_]+` when valid).
    pub id: String,
    pub description: String,
    /// Poster image path, relative to the mod root.
    pub poster: String,
    /// Tile image path, relative to the mod root.
    pub tile: String,
    pub authors: String,
    pub version: String,
    pub url: String,
    pub modversion: String,
    /// Target platform version, [`PZ_VERSION`] by default.
    pub pzversion: String,
    /// Required mod IDs, in declaration order.
    pub require: Vec<String>,
}

impl Default for ModInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            id: String::new(),
            description: String::new(),
            poster: String::new(),
            tile: String::new(),
            authors: String::new(),
            version: "1.0".to_string(),
            url: String::new(),
            modversion: String::new(),
            pzversion: PZ_VERSION.to_string(),
            require: Vec::new(),
        }
    }
}

/// One descriptor field: its key plus accessors in both directions.
struct Field {
    key: &'static str,
    get: fn(&ModInfo) -> String,
    set: fn(&mut ModInfo, &str),
}

/// Descriptor fields in serialization order. A single table drives both the
/// parser and the writer so the two cannot drift apart.
const FIELDS: &[Field] = &[
    Field {
        key: "name",
        get: |m| m.name.clone(),
        set: |m, v| m.name = v.to_string(),
    },
    Field {
        key: "id",
        get: |m| m.id.clone(),
        set: |m, v| m.id = v.to_string(),
    },
    Field {
        key: "description",
        get: |m| m.description.clone(),
        set: |m, v| m.description = v.to_string(),
    },
    Field {
        key: "poster",
        get: |m| m.poster.clone(),
        set: |m, v| m.poster = v.to_string(),
    },
    Field {
        key: "tile",
        get: |m| m.tile.clone(),
        set: |m, v| m.tile = v.to_string(),
    },
    Field {
        key: "authors",
        get: |m| m.authors.clone(),
        set: |m, v| m.authors = v.to_string(),
    },
    Field {
        key: "version",
        get: |m| m.version.clone(),
        set: |m, v| m.version = v.to_string(),
    },
    Field {
        key: "url",
        get: |m| m.url.clone(),
        set: |m, v| m.url = v.to_string(),
    },
    Field {
        key: "modversion",
        get: |m| m.modversion.clone(),
        set: |m, v| m.modversion = v.to_string(),
    },
    Field {
        key: "pzversion",
        get: |m| m.pzversion.clone(),
        set: |m, v| m.pzversion = v.to_string(),
    },
    Field {
        key: "require",
        get: |m| m.require.join(","),
        set: |m, v| {
            m.require = v
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from)
                .collect();
        },
    },
];

impl ModInfo {
    /// Create an empty record with default `version` and `pzversion`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse descriptor text.
    ///
    /// Blank lines, `#` comments, lines without `=`, and unrecognized keys
    /// are skipped without warning. Unknown keys are dropped rather than
    /// preserved, so a load-then-save cycle normalizes the file to known
    /// fields. Only the first `=` splits key from value; later `=` characters
    /// belong to the value.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut info = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            if let Some(field) = FIELDS.iter().find(|f| f.key == key) {
                (field.set)(&mut info, value);
            }
        }

        info
    }

    /// Load and parse a descriptor file.
    ///
    /// Fails only if the file cannot be read or is not UTF-8 text; malformed
    /// content parses tolerantly like [`ModInfo::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|_| Error::DescriptorNotText {
            path: path.to_path_buf(),
        })?;
        Ok(Self::parse(&content))
    }

    /// Write the descriptor to a file in serialized form.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Check required fields and report problems.
    ///
    /// Returns issue messages in a fixed order: missing name, missing ID,
    /// bad ID charset (only checked when the ID is non-empty), missing
    /// description. An empty vec means the record is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.name.is_empty() {
            issues.push("Mod name is required".to_string());
        }
        if self.id.is_empty() {
            issues.push("Mod ID is required".to_string());
        } else if !self
            .id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            issues.push("Mod ID must contain only letters, numbers, and underscores".to_string());
        }
        if self.description.is_empty() {
            issues.push("Mod description is required".to_string());
        }

        issues
    }
}

impl fmt::Display for ModInfo {
    /// Serialized descriptor form: one `key=value` line per non-empty field,
    /// in table order, with a trailing newline. Empty fields are omitted
    /// entirely rather than written as `key=`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in FIELDS {
            let value = (field.get)(self);
            if !value.is_empty() {
                writeln!(f, "{}={}", field.key, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let info = ModInfo::new();
        assert_eq!(info.version, "1.0");
        assert_eq!(info.pzversion, PZ_VERSION);
        assert!(info.name.is_empty());
        assert!(info.require.is_empty());
    }

    #[test]
    fn test_parse_basic() {
        let info = ModInfo::parse(
            "name=Test Mod\nid=TestMod\ndescription=A test\nauthors=Someone\nversion=2.0\n",
        );
        assert_eq!(info.name, "Test Mod");
        assert_eq!(info.id, "TestMod");
        assert_eq!(info.description, "A test");
        assert_eq!(info.authors, "Someone");
        assert_eq!(info.version, "2.0");
        // Untouched fields keep their defaults
        assert_eq!(info.pzversion, PZ_VERSION);
    }

    #[test]
    fn test_parse_skips_comments_blanks_and_junk() {
        let info = ModInfo::parse(
            "# a comment\n\nname=Real Name\nnot a data line\nunknownkey=dropped\nName=wrong case\n",
        );
        assert_eq!(info.name, "Real Name");
        // Unknown and wrong-case keys leave nothing behind
        assert!(info.id.is_empty());
    }

    #[test]
    fn test_parse_splits_on_first_equals_only() {
        let info = ModInfo::parse("url=https://example.com/?a=1&b=2\n");
        assert_eq!(info.url, "https://example.com/?a=1&b=2");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let info = ModInfo::parse("  name  =  Padded Mod  \n");
        assert_eq!(info.name, "Padded Mod");
    }

    #[test]
    fn test_require_parsing() {
        let info = ModInfo::parse("require=a, b ,,c\n");
        assert_eq!(info.require, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_serialize_omits_empty_fields() {
        let mut info = ModInfo::new();
        info.name = "Test".to_string();
        info.id = "Test".to_string();

        let text = info.to_string();
        assert!(text.ends_with('\n'));
        assert!(text.contains("name=Test\n"));
        assert!(!text.contains("description="));
        assert!(!text.contains("poster="));
        assert!(!text.contains("require="));
    }

    #[test]
    fn test_serialize_field_order() {
        let mut info = ModInfo::new();
        info.name = "N".to_string();
        info.id = "I".to_string();
        info.description = "D".to_string();
        info.require = vec!["x".to_string(), "y".to_string()];

        assert_eq!(
            info.to_string(),
            "name=N\nid=I\ndescription=D\nversion=1.0\npzversion=b42\nrequire=x,y\n"
        );
    }

    #[test]
    fn test_roundtrip() {
        let mut info = ModInfo::new();
        info.name = "My Mod".to_string();
        info.id = "MyMod".to_string();
        info.description = "Does things".to_string();
        info.poster = "poster.png".to_string();
        info.tile = "tile.png".to_string();
        info.authors = "A, B".to_string();
        info.url = "https://example.com".to_string();
        info.modversion = "3".to_string();
        info.require = vec!["Base".to_string(), "OtherMod".to_string()];

        let parsed = ModInfo::parse(&info.to_string());
        assert_eq!(parsed, info);
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(MOD_INFO_FILE);

        let mut info = ModInfo::new();
        info.name = "Disk Mod".to_string();
        info.id = "DiskMod".to_string();
        info.save(&path).unwrap();

        let loaded = ModInfo::load(&path).unwrap();
        assert_eq!(loaded, info);
    }

    #[test]
    fn test_load_rejects_non_utf8() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(MOD_INFO_FILE);
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        assert!(matches!(
            ModInfo::load(&path),
            Err(Error::DescriptorNotText { .. })
        ));
    }

    #[test]
    fn test_validate_complete_record() {
        let mut info = ModInfo::new();
        info.name = "Test".to_string();
        info.id = "Test_Mod_42".to_string();
        info.description = "desc".to_string();
        assert!(info.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_in_order() {
        let info = ModInfo::new();
        let issues = info.validate();
        assert_eq!(
            issues,
            vec![
                "Mod name is required",
                "Mod ID is required",
                "Mod description is required",
            ]
        );
    }

    #[test]
    fn test_validate_id_charset() {
        let mut info = ModInfo::new();
        info.name = "Test".to_string();
        info.id = "Bad Mod!".to_string();
        info.description = "desc".to_string();

        let issues = info.validate();
        assert_eq!(
            issues,
            vec!["Mod ID must contain only letters, numbers, and underscores"]
        );
    }
}
