//! Remote template fetching.
//!
//! Clones a template repository into a fixed staging folder under the
//! templates root, relocates its top-level template directories into place
//! and reads their manifests for listing metadata. Network or clone
//! failures degrade to an empty list and never crash the pipeline.

use std::fs;
use std::path::Path;

use url::Url;

use crate::constants::TEMP_DOWNLOAD_DIR;
use crate::error::{Error, Result};
use crate::manifest::{self, Platforms};
use crate::walker;

/// A selectable template as reported after a fetch.
#[derive(Debug)]
pub struct TemplateInfo {
    pub name: String,
    pub platforms: Option<Platforms>,
    pub description: Option<String>,
}

/// Parsed template repository source.
///
/// Sources use the `direct:<url>[#<branch>]` convention; the `direct:`
/// prefix is optional.
#[derive(Debug, PartialEq)]
pub struct TemplateSource {
    pub url: String,
    pub branch: Option<String>,
}

impl TemplateSource {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.strip_prefix("direct:").unwrap_or(s);
        let (url, branch) = match s.rsplit_once('#') {
            Some((url, branch)) if !branch.is_empty() => (url, Some(branch.to_string())),
            _ => (s, None),
        };
        Url::parse(url).map_err(|e| {
            Error::TemplateError(format!("invalid template source '{url}': {e}"))
        })?;
        Ok(Self { url: url.to_string(), branch })
    }

    /// Repository name used for the staging checkout directory.
    pub fn repo_name(&self) -> String {
        let last_segment = Url::parse(&self.url)
            .ok()
            .and_then(|url| {
                url.path_segments()
                    .and_then(|segments| segments.last().map(str::to_owned))
            })
            .unwrap_or_default();
        let name = last_segment.trim_end_matches(".git");
        if name.is_empty() {
            "template".to_string()
        } else {
            name.to_string()
        }
    }
}

/// Fetches the template repository at `source` and installs its template
/// directories under `templates_root`.
///
/// Returns the installed templates with their manifest metadata. Every
/// failure resolves to an empty list; the clone itself is not retried.
pub fn fetch_template(source: &str, templates_root: &Path) -> Vec<TemplateInfo> {
    match clone_and_unpack(source, templates_root) {
        Ok(templates) => templates,
        Err(err) => {
            log::error!("Failed to fetch remote templates from '{source}': {err}");
            let temp = templates_root.join(TEMP_DOWNLOAD_DIR);
            if temp.exists() {
                let _ = fs::remove_dir_all(&temp);
            }
            Vec::new()
        }
    }
}

fn clone_and_unpack(source: &str, templates_root: &Path) -> Result<Vec<TemplateInfo>> {
    let source = TemplateSource::parse(source)?;

    fs::create_dir_all(templates_root)?;
    let temp = templates_root.join(TEMP_DOWNLOAD_DIR);
    if temp.exists() {
        fs::remove_dir_all(&temp)?;
    }
    fs::create_dir_all(&temp)?;

    let clone_path = temp.join(source.repo_name());
    log::info!("Cloning template repository '{}'", source.url);
    let mut builder = git2::build::RepoBuilder::new();
    if let Some(branch) = &source.branch {
        builder.branch(branch);
    }
    builder.clone(&source.url, &clone_path)?;

    let names = walker::list_template_dirs(&clone_path);
    for name in &names {
        let installed = templates_root.join(name);
        if installed.exists() {
            fs::remove_dir_all(&installed)?;
        }
        fs::rename(clone_path.join(name), installed)?;
    }
    fs::remove_dir_all(&temp)?;

    let templates = names
        .into_iter()
        .map(|name| {
            let manifest =
                manifest::load_manifest(&templates_root.join(&name)).unwrap_or(None);
            let (platforms, description) = match manifest {
                Some(manifest) => (manifest.platforms, manifest.description),
                None => (None, None),
            };
            TemplateInfo { name, platforms, description }
        })
        .collect();
    Ok(templates)
}

/// Keeps the templates usable with the given UI framework. Templates without
/// platform metadata are kept.
pub fn filter_by_platform(
    templates: Vec<TemplateInfo>,
    framework: &str,
) -> Vec<TemplateInfo> {
    templates
        .into_iter()
        .filter(|template| {
            template
                .platforms
                .as_ref()
                .map(|platforms| platforms.supports(framework))
                .unwrap_or(true)
        })
        .collect()
}
