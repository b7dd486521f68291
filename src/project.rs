//! Resolved project configuration and the option enums behind it.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Major version of the Lumen runtime a project targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum RuntimeVersion {
    Lumen2,
    Lumen3,
}

impl RuntimeVersion {
    /// Built-in template identifier for this runtime.
    pub fn default_template(&self) -> &'static str {
        match self {
            RuntimeVersion::Lumen2 => "default-lumen2",
            RuntimeVersion::Lumen3 => "default",
        }
    }

    /// Registry dist-tag for the runtime CLI package.
    pub fn cli_dist_tag(&self) -> &'static str {
        match self {
            RuntimeVersion::Lumen2 => "2.x",
            RuntimeVersion::Lumen3 => "latest",
        }
    }

    /// Registry dist-tag for the UI kit package.
    pub fn ui_kit_dist_tag(&self) -> &'static str {
        match self {
            RuntimeVersion::Lumen2 => "latest",
            RuntimeVersion::Lumen3 => "beta",
        }
    }
}

impl Display for RuntimeVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RuntimeVersion::Lumen2 => "lumen2",
            RuntimeVersion::Lumen3 => "lumen3",
        };
        write!(f, "{s}")
    }
}

/// CSS preprocessor flavor chosen for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum CssPreprocessor {
    Sass,
    Less,
    Stylus,
    None,
}

impl CssPreprocessor {
    /// File extension written for stylesheets of this flavor.
    pub fn ext(&self) -> &'static str {
        match self {
            CssPreprocessor::Sass => "scss",
            CssPreprocessor::Less => "less",
            CssPreprocessor::Stylus => "styl",
            CssPreprocessor::None => "css",
        }
    }
}

impl Display for CssPreprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CssPreprocessor::Sass => "sass",
            CssPreprocessor::Less => "less",
            CssPreprocessor::Stylus => "stylus",
            CssPreprocessor::None => "none",
        };
        write!(f, "{s}")
    }
}

/// The resolved set of user choices for one project creation.
///
/// Built incrementally by the wizard merging answers into defaults and
/// treated as immutable once rendering begins. Serializes with camelCase
/// keys because manifest condition expressions and templates are written
/// against those names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub project_name: String,
    pub project_dir: PathBuf,
    pub description: String,
    pub typescript: bool,
    pub runtime: RuntimeVersion,
    pub css: CssPreprocessor,
    pub framework: String,
    pub compiler: String,
    pub template: String,
    pub template_source: String,
    pub npm_client: String,
    pub auto_install: bool,
    pub date: String,
}

impl ProjectConfig {
    /// Absolute directory the project is generated into.
    pub fn project_path(&self) -> PathBuf {
        self.project_dir.join(&self.project_name)
    }

    /// Context object evaluated by manifest condition expressions.
    pub fn as_context(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Checks whether a candidate project name collides with an existing entry.
pub fn name_collides(project_dir: &Path, name: &str) -> bool {
    !name.is_empty() && project_dir.join(name).exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_extension_mapping_holds_for_all_choices() {
        assert_eq!(CssPreprocessor::Sass.ext(), "scss");
        assert_eq!(CssPreprocessor::Less.ext(), "less");
        assert_eq!(CssPreprocessor::Stylus.ext(), "styl");
        assert_eq!(CssPreprocessor::None.ext(), "css");
    }

    #[test]
    fn runtime_resolves_template_identifier() {
        assert_eq!(RuntimeVersion::Lumen2.default_template(), "default-lumen2");
        assert_eq!(RuntimeVersion::Lumen3.default_template(), "default");
    }

    #[test]
    fn runtime_dist_tags() {
        assert_eq!(RuntimeVersion::Lumen2.cli_dist_tag(), "2.x");
        assert_eq!(RuntimeVersion::Lumen3.cli_dist_tag(), "latest");
        assert_eq!(RuntimeVersion::Lumen2.ui_kit_dist_tag(), "latest");
        assert_eq!(RuntimeVersion::Lumen3.ui_kit_dist_tag(), "beta");
    }

    #[test]
    fn config_serializes_with_camel_case_keys() {
        let config = ProjectConfig {
            project_name: "demo".to_string(),
            project_dir: PathBuf::from("/tmp"),
            description: String::new(),
            typescript: true,
            runtime: RuntimeVersion::Lumen3,
            css: CssPreprocessor::Sass,
            framework: "react".to_string(),
            compiler: "webpack5".to_string(),
            template: "default".to_string(),
            template_source: String::new(),
            npm_client: "npm".to_string(),
            auto_install: true,
            date: "2026-8-6".to_string(),
        };
        let value = config.as_context();
        assert_eq!(value["projectName"], "demo");
        assert_eq!(value["typescript"], true);
        assert_eq!(value["runtime"], "lumen3");
        assert_eq!(value["css"], "sass");
    }

    #[test]
    fn name_collision_requires_existing_entry() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!name_collides(dir.path(), "missing"));
        std::fs::create_dir(dir.path().join("taken")).unwrap();
        assert!(name_collides(dir.path(), "taken"));
        assert!(!name_collides(dir.path(), ""));
    }
}
