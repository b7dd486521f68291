//! File materialization policy.
//!
//! Derives, for every template file, the destination path and the merged
//! template context, then queues the rendered result into the staged
//! editor. Nothing touches the real filesystem until the editor commits.

use serde::Serialize;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::constants::{ALTERNATE_FRAMEWORK_EXT, CONFIG_DIR, PINNED_JS_FILES};
use crate::error::{Error, Result};
use crate::ioutils::path_to_str;
use crate::manifest::{RuleOutcome, TemplateManifest};
use crate::project::{ProjectConfig, RuntimeVersion};
use crate::renderer::TemplateRenderer;
use crate::stage::StagedEditor;

/// Inputs of one rendering pass that are not part of the project config.
pub struct CreateOptions<'a> {
    pub config: &'a ProjectConfig,
    pub cli_version: &'a str,
    pub ui_kit_version: &'a str,
    pub page_name: &'a str,
}

/// The fixed, enumerated key set rendered into every file. Handler-supplied
/// extras are layered on top and win on key conflicts.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileContext<'a> {
    description: &'a str,
    project_name: &'a str,
    version: &'a str,
    css: crate::project::CssPreprocessor,
    css_ext: &'a str,
    date: &'a str,
    typescript: bool,
    template: &'a str,
    page_name: &'a str,
    framework: &'a str,
    runtime: RuntimeVersion,
    compiler: &'a str,
    ui_kit_version: &'a str,
}

/// Drives the rendering pipeline for one project creation.
///
/// Owns the staged editor (and with it the staging store) for the duration
/// of the run.
pub struct Creator<'a> {
    engine: &'a dyn TemplateRenderer,
    template_root: PathBuf,
    pub editor: StagedEditor,
}

impl<'a> Creator<'a> {
    pub fn new<P: Into<PathBuf>>(
        engine: &'a dyn TemplateRenderer,
        template_root: P,
        project_path: P,
    ) -> Self {
        Self {
            engine,
            template_root: template_root.into(),
            editor: StagedEditor::new(project_path.into()),
        }
    }

    /// Queues every listed template file for materialization.
    ///
    /// Returns one human-readable log line per queued file, for display
    /// after the commit. Skipped files produce no log line.
    pub fn create_files(
        &mut self,
        files: &[PathBuf],
        manifest: Option<&TemplateManifest>,
        opts: &CreateOptions<'_>,
    ) -> Result<Vec<String>> {
        let config_context = opts.config.as_context();
        let global_change_ext = manifest.is_some();
        let mut logs = Vec::new();

        for file in files {
            let rel = self.relative_path(file)?;

            if Path::new(&rel)
                .extension()
                .is_some_and(|ext| ext == ALTERNATE_FRAMEWORK_EXT)
            {
                continue;
            }

            let mut change_ext = global_change_ext;
            let mut extra = serde_json::Map::new();
            if let Some(rule) = manifest.and_then(|m| m.rule_for(&rel)) {
                match rule.evaluate(self.engine, &config_context)? {
                    RuleOutcome::Skip => continue,
                    RuleOutcome::Include { change_ext: per_file, extra: rule_extra } => {
                        if per_file == Some(false) {
                            change_ext = false;
                        }
                        extra = rule_extra;
                    }
                }
            }

            let dest_rel = rewrite_destination(&rel, change_ext, opts.config);
            let context = file_context(opts, extra)?;
            if let Some(dest) =
                self.editor.copy_template(file, Path::new(&dest_rel), self.engine, &context)?
            {
                logs.push(format!("✔ created file: {}", dest.display()));
            }
        }

        Ok(logs)
    }

    /// Template-root-relative path with `/` separators and no leading slash.
    fn relative_path(&self, file: &Path) -> Result<String> {
        let relative =
            file.strip_prefix(&self.template_root).map_err(|e| Error::ProcessError {
                source_path: file.display().to_string(),
                e: e.to_string(),
            })?;
        let relative = path_to_str(relative)?
            .replace(MAIN_SEPARATOR, "/")
            .trim_start_matches('/')
            .to_string();
        Ok(relative)
    }
}

/// Builds the merged per-file context; extras win on conflicting keys.
fn file_context(
    opts: &CreateOptions<'_>,
    extra: serde_json::Map<String, serde_json::Value>,
) -> Result<serde_json::Value> {
    let config = opts.config;
    let base = FileContext {
        description: &config.description,
        project_name: &config.project_name,
        version: opts.cli_version,
        css: config.css,
        css_ext: config.css.ext(),
        date: &config.date,
        typescript: config.typescript,
        template: &config.template,
        page_name: opts.page_name,
        framework: &config.framework,
        runtime: config.runtime,
        compiler: &config.compiler,
        ui_kit_version: opts.ui_kit_version,
    };
    let mut context = match serde_json::to_value(base)? {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    for (key, value) in extra {
        context.insert(key, value);
    }
    Ok(serde_json::Value::Object(context))
}

/// Applies the destination rewrite policy to a template-relative path.
///
/// In order: TypeScript extension rewriting (skipping the build-tool config
/// directory and the pinned tooling filenames), stylesheet extension
/// rewriting, and the legacy `pkg` alias for the older runtime.
fn rewrite_destination(rel: &str, change_ext: bool, config: &ProjectConfig) -> String {
    let mut dest = rel.trim_start_matches('/').to_string();

    if config.typescript && change_ext && !dest.starts_with(&format!("{CONFIG_DIR}/")) {
        let path = Path::new(&dest);
        let basename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if !PINNED_JS_FILES.contains(&basename) {
            match path.extension().and_then(|e| e.to_str()) {
                Some("js") => dest = path.with_extension("ts").to_string_lossy().into_owned(),
                Some("jsx") => dest = path.with_extension("tsx").to_string_lossy().into_owned(),
                _ => {}
            }
        }
    }

    if change_ext {
        let path = Path::new(&dest);
        if path.extension().and_then(|e| e.to_str()) == Some("css") {
            dest = path.with_extension(config.css.ext()).to_string_lossy().into_owned();
        }
    }

    // Module-resolution workaround: the older runtime requires a real
    // package.json where templates store a bare `pkg` alias.
    if config.runtime == RuntimeVersion::Lumen2 {
        let path = Path::new(&dest);
        if path.file_name().and_then(|n| n.to_str()) == Some("pkg") {
            dest = path.with_file_name("package.json").to_string_lossy().into_owned();
        }
    }

    dest
}
