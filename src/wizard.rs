//! Interactive question flow assembling the project configuration.
//!
//! The flow is a linear sequence of independently skippable questions: each
//! one is asked only when the invocation did not already supply the answer.
//! Validation failures re-prompt inline and are never fatal.

use dialoguer::{Confirm, Input, Select};
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_TEMPLATE_SOURCE;
use crate::error::Result;
use crate::project::{name_collides, CssPreprocessor, ProjectConfig, RuntimeVersion};
use crate::remote::TemplateInfo;

/// Answers supplied up front (usually from the command line); every `None`
/// becomes an interactive question.
#[derive(Debug, Default)]
pub struct WizardSeed {
    pub project_name: Option<String>,
    pub project_dir: PathBuf,
    pub description: Option<String>,
    pub typescript: Option<bool>,
    pub css: Option<CssPreprocessor>,
    pub runtime: Option<RuntimeVersion>,
    pub template: Option<String>,
    pub template_source: Option<String>,
    pub auto_install: bool,
}

/// Runs the wizard to a fully populated, immutable [`ProjectConfig`].
pub fn run_wizard(seed: WizardSeed) -> Result<ProjectConfig> {
    let runtime = match seed.runtime {
        Some(runtime) => runtime,
        None => ask_runtime()?,
    };
    let project_name = ask_project_name(seed.project_name, &seed.project_dir)?;
    let description = match seed.description {
        Some(description) => description,
        None => ask_description()?,
    };
    let typescript = match seed.typescript {
        Some(typescript) => typescript,
        None => ask_typescript()?,
    };
    let css = match seed.css {
        Some(css) => css,
        None => ask_css()?,
    };

    Ok(ProjectConfig {
        project_name,
        project_dir: seed.project_dir,
        description,
        typescript,
        runtime,
        css,
        framework: "react".to_string(),
        compiler: "webpack5".to_string(),
        template: seed
            .template
            .unwrap_or_else(|| runtime.default_template().to_string()),
        template_source: seed
            .template_source
            .unwrap_or_else(|| DEFAULT_TEMPLATE_SOURCE.to_string()),
        npm_client: "npm".to_string(),
        auto_install: seed.auto_install,
        date: creation_date(),
    })
}

fn ask_runtime() -> Result<RuntimeVersion> {
    let choices = [RuntimeVersion::Lumen2, RuntimeVersion::Lumen3];
    let index = Select::new()
        .with_prompt("Which Lumen runtime version?")
        .items(&["lumen2", "lumen3"])
        .default(1)
        .interact()?;
    Ok(choices[index])
}

/// Asks for the project name unless a usable one was supplied.
///
/// A supplied name that collides with an existing directory re-prompts with
/// a different message than the initial question.
fn ask_project_name(preset: Option<String>, project_dir: &Path) -> Result<String> {
    let prompt = match &preset {
        Some(name) if !name.is_empty() && !name_collides(project_dir, name) => {
            return Ok(name.clone())
        }
        Some(_) => "A project with that name already exists here, pick another one",
        None => "Project name",
    };

    let dir = project_dir.to_path_buf();
    let name = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(move |input: &String| -> std::result::Result<(), String> {
            if input.trim().is_empty() {
                return Err("The project name must not be empty".to_string());
            }
            if name_collides(&dir, input) {
                return Err(
                    "A project with this name already exists, pick another one"
                        .to_string(),
                );
            }
            Ok(())
        })
        .interact_text()?;
    Ok(name)
}

fn ask_description() -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt("Project description")
        .allow_empty(true)
        .interact_text()?)
}

fn ask_typescript() -> Result<bool> {
    Ok(Confirm::new().with_prompt("Use TypeScript?").default(false).interact()?)
}

fn ask_css() -> Result<CssPreprocessor> {
    let choices = [
        CssPreprocessor::Sass,
        CssPreprocessor::Less,
        CssPreprocessor::Stylus,
        CssPreprocessor::None,
    ];
    let index = Select::new()
        .with_prompt("Which CSS preprocessor?")
        .items(&["Sass", "Less", "Stylus", "None"])
        .default(0)
        .interact()?;
    Ok(choices[index])
}

/// Template selection over the fetched remote list. Only reachable through
/// the explicit `--choose-template` flag.
pub fn ask_template(templates: &[TemplateInfo], current: &str) -> Result<String> {
    let mut names = vec!["default".to_string()];
    let mut labels = vec!["default template".to_string()];
    for info in templates {
        labels.push(match &info.description {
            Some(description) if !description.is_empty() => {
                format!("{} ({description})", info.name)
            }
            _ => info.name.clone(),
        });
        names.push(info.name.clone());
    }

    let default_index = names.iter().position(|name| name == current).unwrap_or(0);
    let index = Select::new()
        .with_prompt("Which template?")
        .items(&labels)
        .default(default_index)
        .interact()?;
    Ok(names[index].clone())
}

/// Creation date stamped into the config, unpadded `YYYY-M-D`.
pub fn creation_date() -> String {
    chrono::Local::now().format("%Y-%-m-%-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn full_seed(project_dir: PathBuf) -> WizardSeed {
        WizardSeed {
            project_name: Some("demo".to_string()),
            project_dir,
            description: Some("a demo app".to_string()),
            typescript: Some(true),
            css: Some(CssPreprocessor::Less),
            runtime: Some(RuntimeVersion::Lumen2),
            template: None,
            template_source: None,
            auto_install: true,
        }
    }

    #[test]
    fn fully_seeded_wizard_asks_nothing() {
        let dir = TempDir::new().unwrap();
        let config = run_wizard(full_seed(dir.path().to_path_buf())).unwrap();
        assert_eq!(config.project_name, "demo");
        assert_eq!(config.template, "default-lumen2");
        assert_eq!(config.template_source, DEFAULT_TEMPLATE_SOURCE);
        assert_eq!(config.framework, "react");
        assert_eq!(config.compiler, "webpack5");
        assert!(config.auto_install);
    }

    #[test]
    fn explicit_template_wins_over_runtime_resolution() {
        let dir = TempDir::new().unwrap();
        let mut seed = full_seed(dir.path().to_path_buf());
        seed.template = Some("mobile".to_string());
        let config = run_wizard(seed).unwrap();
        assert_eq!(config.template, "mobile");
    }

    #[test]
    fn creation_date_is_unpadded() {
        let date = creation_date();
        let parts: Vec<_> = date.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4);
        // Month and day carry no leading zeros.
        assert!(!parts[1].starts_with('0'));
        assert!(!parts[2].starts_with('0'));
    }
}
