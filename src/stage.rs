//! In-memory staging of rendered files.
//!
//! Writes are queued against a destination root and flushed to the real
//! filesystem in one pass, so the full set of outputs is known before any
//! disk mutation becomes visible.

use indexmap::IndexMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::Result;
use crate::renderer::TemplateRenderer;

/// Staged file editor: an in-memory overlay over the real filesystem.
///
/// Owns the staging store for the duration of one project creation; nothing
/// outside reads or writes the store directly.
pub struct StagedEditor {
    dest_root: PathBuf,
    store: IndexMap<PathBuf, String>,
}

impl StagedEditor {
    pub fn new<P: Into<PathBuf>>(dest_root: P) -> Self {
        Self { dest_root: dest_root.into(), store: IndexMap::new() }
    }

    pub fn dest_root(&self) -> &Path {
        &self.dest_root
    }

    /// Number of writes currently queued.
    pub fn pending(&self) -> usize {
        self.store.len()
    }

    /// Joins `segments` against the destination root and applies the
    /// destination rewrite rules.
    ///
    /// Rules, per path component:
    /// - a component named exactly `package.json.tmpl` loses the `.tmpl`
    ///   suffix;
    /// - a component starting with `_` gets the underscore replaced with a
    ///   leading dot (dotfiles cannot be stored with a literal leading dot
    ///   in the template source).
    ///
    /// Both rules are deterministic and idempotent: re-resolving an already
    /// rewritten path changes nothing.
    pub fn resolve_destination_path<I, S>(&self, segments: I) -> PathBuf
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut joined = PathBuf::new();
        for segment in segments {
            joined.push(segment.as_ref());
        }

        let mut rewritten = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::Normal(name) => {
                    rewritten.push(rewrite_component(name.to_string_lossy().as_ref()))
                }
                other => rewritten.push(other.as_os_str()),
            }
        }

        if rewritten.is_absolute() {
            rewritten
        } else {
            self.dest_root.join(rewritten)
        }
    }

    /// Queues rendered `content` at `dest` (resolved through
    /// [`Self::resolve_destination_path`]). A later write to the same
    /// destination overrides an earlier one.
    pub fn queue_write<P: AsRef<Path>>(&mut self, dest: P, content: String) -> PathBuf {
        let dest = self.resolve_destination_path([dest.as_ref()]);
        self.store.insert(dest.clone(), content);
        dest
    }

    /// Reads `source` as a text template, renders it with `context` and
    /// queues the result at `dest`.
    ///
    /// A missing source is a logged no-op, not an error; `Ok(None)` is
    /// returned and nothing is queued.
    pub fn copy_template(
        &mut self,
        source: &Path,
        dest: &Path,
        engine: &dyn TemplateRenderer,
        context: &serde_json::Value,
    ) -> Result<Option<PathBuf>> {
        if !source.exists() {
            log::warn!("template source '{}' does not exist, skipping", source.display());
            return Ok(None);
        }
        let template = fs::read_to_string(source)?;
        let rendered = engine.render(&template, context)?;
        Ok(Some(self.queue_write(dest, rendered)))
    }

    /// Flushes every queued write to disk, then invokes `on_complete`.
    ///
    /// Once `on_complete` fires every queued file exists on disk with its
    /// rendered content. Writes to distinct destinations carry no ordering
    /// guarantee among themselves.
    pub fn commit<F: FnOnce()>(&mut self, on_complete: F) -> Result<()> {
        for (dest, content) in self.store.drain(..) {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&dest, content)?;
        }
        on_complete();
        Ok(())
    }
}

/// Applies the destination rewrite rules to a single path component.
fn rewrite_component(name: &str) -> OsString {
    let name = if name == "package.json.tmpl" { "package.json" } else { name };
    match name.strip_prefix('_') {
        Some(rest) => OsString::from(format!(".{rest}")),
        None => OsString::from(name),
    }
}
