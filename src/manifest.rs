//! Template manifests and per-file inclusion rules.
//!
//! A template may carry a manifest file (`creator.yaml`, `creator.yml` or
//! `creator.json`) at its root. The manifest declares listing metadata
//! (`platforms`, `description`) and a `files` map of per-file rules — the
//! inclusion handler deciding whether a given file is emitted and what extra
//! context it receives. A template without a manifest renders every file
//! with default rules.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use crate::constants::MANIFEST_FILENAMES;
use crate::error::Result;
use crate::renderer::TemplateRenderer;

/// Platform tags a template declares support for.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Platforms {
    One(String),
    Many(Vec<String>),
}

impl Platforms {
    /// Whether the given framework is among the declared platforms.
    pub fn supports(&self, framework: &str) -> bool {
        match self {
            Platforms::One(platform) => platform.is_empty() || platform == framework,
            Platforms::Many(platforms) => {
                platforms.iter().any(|platform| platform == framework)
            }
        }
    }
}

/// A per-file rule: condition, extra context and extension-rewrite control.
#[derive(Debug, Clone, Deserialize)]
pub struct FileRule {
    /// Condition expression evaluated against the project config context;
    /// a false result skips the file entirely.
    #[serde(default)]
    pub when: String,

    /// Set to `false` to suppress extension rewriting for this file only.
    #[serde(default)]
    pub change_ext: Option<bool>,

    /// Extra template variables layered over the base context; these win on
    /// key conflicts.
    #[serde(default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Result of evaluating a [`FileRule`] for one file.
#[derive(Debug)]
pub enum RuleOutcome {
    /// The file is not materialized at all.
    Skip,
    /// The file is materialized with the given adjustments.
    Include {
        change_ext: Option<bool>,
        extra: serde_json::Map<String, serde_json::Value>,
    },
}

impl FileRule {
    /// Evaluates this rule with the current project config context.
    pub fn evaluate(
        &self,
        engine: &dyn TemplateRenderer,
        context: &serde_json::Value,
    ) -> Result<RuleOutcome> {
        if !engine.execute_expression(&self.when, context)? {
            return Ok(RuleOutcome::Skip);
        }
        Ok(RuleOutcome::Include {
            change_ext: self.change_ext,
            extra: self.extra.clone(),
        })
    }
}

/// Declarative template manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateManifest {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub platforms: Option<Platforms>,

    /// Inclusion rules keyed by template-relative file path.
    #[serde(default)]
    pub files: IndexMap<String, FileRule>,
}

impl TemplateManifest {
    pub fn rule_for(&self, relative_path: &str) -> Option<&FileRule> {
        self.files.get(relative_path)
    }
}

/// Loads the manifest of a template directory, if one is present.
///
/// Tries each supported file name in order of preference; the content is
/// parsed as JSON first and as YAML on fallback.
pub fn load_manifest(template_root: &Path) -> Result<Option<TemplateManifest>> {
    for filename in MANIFEST_FILENAMES {
        let manifest_path = template_root.join(filename);
        if !manifest_path.exists() {
            continue;
        }
        log::debug!("Loading template manifest from {}", manifest_path.display());
        let content = std::fs::read_to_string(&manifest_path)?;
        let manifest = match serde_json::from_str(&content) {
            Ok(manifest) => manifest,
            Err(_) => serde_yaml::from_str(&content)?,
        };
        return Ok(Some(manifest));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MiniJinjaRenderer;
    use serde_json::json;
    use tempfile::TempDir;

    const MANIFEST_YAML: &str = r#"
description: default Lumen app
platforms:
  - react
files:
  "legacy/compat.js":
    when: "runtime == 'lumen2'"
  "pages/index.css":
    change_ext: false
  "project.config.json":
    extra:
      appId: placeholder
"#;

    #[test]
    fn parses_yaml_manifest() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("creator.yaml"), MANIFEST_YAML).unwrap();

        let manifest = load_manifest(root.path()).unwrap().unwrap();
        assert_eq!(manifest.description.as_deref(), Some("default Lumen app"));
        assert!(manifest.platforms.unwrap().supports("react"));
        assert_eq!(manifest.files.len(), 3);
    }

    #[test]
    fn parses_json_manifest() {
        let root = TempDir::new().unwrap();
        std::fs::write(
            root.path().join("creator.json"),
            r#"{"platforms": "react", "files": {"app.js": {"when": "typescript"}}}"#,
        )
        .unwrap();

        let manifest = load_manifest(root.path()).unwrap().unwrap();
        assert!(manifest.platforms.as_ref().unwrap().supports("react"));
        assert!(manifest.rule_for("app.js").is_some());
    }

    #[test]
    fn absent_manifest_is_none() {
        let root = TempDir::new().unwrap();
        assert!(load_manifest(root.path()).unwrap().is_none());
    }

    #[test]
    fn false_condition_skips_the_file() {
        let engine = MiniJinjaRenderer::new();
        let rule = FileRule {
            when: "runtime == 'lumen2'".to_string(),
            change_ext: None,
            extra: serde_json::Map::new(),
        };
        let outcome =
            rule.evaluate(&engine, &json!({"runtime": "lumen3"})).unwrap();
        assert!(matches!(outcome, RuleOutcome::Skip));
    }

    #[test]
    fn empty_condition_includes_the_file() {
        let engine = MiniJinjaRenderer::new();
        let rule = FileRule {
            when: String::new(),
            change_ext: Some(false),
            extra: serde_json::Map::new(),
        };
        match rule.evaluate(&engine, &json!({})).unwrap() {
            RuleOutcome::Include { change_ext, .. } => {
                assert_eq!(change_ext, Some(false));
            }
            RuleOutcome::Skip => panic!("Expected Include outcome"),
        }
    }

    #[test]
    fn extra_context_is_carried_through() {
        let engine = MiniJinjaRenderer::new();
        let mut extra = serde_json::Map::new();
        extra.insert("appId".to_string(), json!("placeholder"));
        let rule = FileRule { when: String::new(), change_ext: None, extra };
        match rule.evaluate(&engine, &json!({})).unwrap() {
            RuleOutcome::Include { extra, .. } => {
                assert_eq!(extra["appId"], "placeholder");
            }
            RuleOutcome::Skip => panic!("Expected Include outcome"),
        }
    }

    #[test]
    fn platform_lists_and_strings_both_match() {
        assert!(Platforms::One("react".into()).supports("react"));
        assert!(Platforms::One(String::new()).supports("react"));
        assert!(!Platforms::One("vue".into()).supports("react"));
        assert!(Platforms::Many(vec!["react".into(), "vue".into()]).supports("react"));
        assert!(!Platforms::Many(vec![]).supports("react"));
    }
}
