//! Filesystem walking with name-based exclusions.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively lists every file under `root`.
///
/// Files whose base name matches an entry of `exclude_names` exactly are
/// skipped; directories are always descended into. Returns only files, in
/// unspecified order. A missing `root` yields an empty list instead of an
/// error.
pub fn list_files<P: AsRef<Path>>(root: P, exclude_names: &[&str]) -> Vec<PathBuf> {
    WalkDir::new(root.as_ref())
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .map(|name| !exclude_names.contains(&name))
                .unwrap_or(true)
        })
        .map(|entry| entry.into_path())
        .collect()
}

/// Lists top-level directories that qualify as template source candidates.
///
/// Used only when unpacking a freshly cloned template repository: hidden
/// entries and the macOS archive artifact are excluded. A missing `root`
/// yields an empty list.
pub fn list_template_dirs<P: AsRef<Path>>(root: P) -> Vec<String> {
    WalkDir::new(root.as_ref())
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_owned))
        .filter(|name| !name.starts_with('.') && name != crate::constants::MACOS_ARCHIVE_ARTIFACT)
        .collect()
}
