use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Converts a path to a string slice, failing on invalid Unicode.
pub fn path_to_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        Error::Other(anyhow::anyhow!(
            "Path '{}' contains invalid Unicode characters",
            path.display()
        ))
    })
}

/// Root directory of the tool installation.
///
/// Templates live in a fixed subdirectory next to the executable; when the
/// executable location cannot be determined the current directory is used.
pub fn tool_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default()
}

/// Default location of the templates directory.
pub fn default_templates_root() -> PathBuf {
    tool_root().join(crate::constants::TEMPLATES_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_to_str_valid() {
        assert_eq!(path_to_str(Path::new("some/path")).unwrap(), "some/path");
    }

    #[test]
    fn default_templates_root_ends_with_templates() {
        assert!(default_templates_root().ends_with(crate::constants::TEMPLATES_DIR));
    }
}
