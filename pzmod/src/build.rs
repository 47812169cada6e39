//! Mod packaging - ZIP archives and directory copies

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{Error, Result};
use crate::root::ModRoot;
use crate::scan;

/// Build a distributable package from a mod directory.
///
/// The artifact is named after the descriptor `id` when one is set, falling
/// back to the root directory name. With `archive` set the output is
/// `<output_dir>/<name>.zip`; otherwise the whole tree is copied to
/// `<output_dir>/<name>`. Either form fully replaces prior output at the
/// same path - there is no incremental merge.
///
/// I/O failures (unreadable root, unwritable output) propagate as errors.
pub fn build_mod(root: &ModRoot, output_dir: impl AsRef<Path>, archive: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let name = root
        .info()
        .filter(|info| !info.id.is_empty())
        .map_or_else(|| root.dir_name(), |info| info.id.clone());

    if archive {
        let zip_path = output_dir.join(format!("{name}.zip"));
        create_zip(root.path(), &zip_path)?;
        Ok(zip_path)
    } else {
        let dest = output_dir.join(&name);
        if dest.exists() {
            fs::remove_dir_all(&dest)?;
        }
        copy_tree(root.path(), &dest)?;
        Ok(dest)
    }
}

/// Write a deflate-compressed ZIP of every file under `source`.
///
/// Dotfile-named files are silently skipped. Entry paths are the scanner's
/// root-relative paths; directories get no entries of their own. An
/// existing archive at `zip_path` is replaced in full.
fn create_zip(source: &Path, zip_path: &Path) -> Result<()> {
    tracing::info!("Creating archive: {}", zip_path.display());

    let files = scan::list_files(source)?;

    let file = File::create(zip_path)?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut stored = 0usize;
    for relative in &files {
        if is_hidden(relative) {
            continue;
        }
        let data = fs::read(source.join(relative))?;
        writer.start_file(relative.as_str(), options)?;
        writer.write_all(&data)?;
        stored += 1;
    }

    let mut inner = writer.finish()?;
    inner.flush()?;

    tracing::info!("Archived {} of {} files", stored, files.len());
    Ok(())
}

/// Whether a relative path names a dotfile (checked on the file name only,
/// not on parent directories).
fn is_hidden(relative: &str) -> bool {
    Path::new(relative)
        .file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

/// Recursively copy `source` into `dest`, which must not exist yet.
///
/// Unlike archiving, the copy is unfiltered - dotfiles are preserved.
fn copy_tree(source: &Path, dest: &Path) -> Result<()> {
    tracing::info!("Copying {} -> {}", source.display(), dest.display());

    for entry in WalkDir::new(source) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::InvalidPath(e.to_string()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
