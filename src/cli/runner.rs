//! Orchestration of one `mason create` run.

use std::path::Path;

use crate::{
    cli::CreateArgs,
    constants::{DO_NOT_COPY_FILES, PAGE_NAME},
    creator::{CreateOptions, Creator},
    error::{Error, Result},
    hooks,
    ioutils::default_templates_root,
    manifest, registry, remote,
    renderer::MiniJinjaRenderer,
    walker, wizard,
};

/// Executes the complete project creation workflow.
///
/// # Flow
/// 1. Clears a pre-existing target directory (`--force` or confirmation)
/// 2. Runs the wizard to a full project configuration
/// 3. Optionally fetches the remote template list for interactive selection
/// 4. Resolves default dependency versions from the registry
/// 5. Renders every template file into the staging store
/// 6. Commits the staged files, then runs the post-create hooks
pub fn run(args: CreateArgs) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let project_dir = std::env::current_dir()?;

    if let Some(name) = &args.name {
        let target = project_dir.join(name);
        if target.exists() && !prepare_target(&target, args.force)? {
            println!("cancelled");
            return Ok(());
        }
    }

    println!("About to create a new Lumen project!");
    println!();
    let seed = wizard::WizardSeed {
        project_name: args.name,
        project_dir,
        description: args.description,
        typescript: args.typescript,
        css: args.css,
        runtime: args.runtime,
        template: args.template,
        template_source: args.template_source,
        auto_install: !args.no_install,
    };
    let mut config = wizard::run_wizard(seed)?;

    let templates_root = args.templates_dir.unwrap_or_else(default_templates_root);

    if args.choose_template {
        let fetched = remote::fetch_template(&config.template_source, &templates_root);
        let usable = remote::filter_by_platform(fetched, &config.framework);
        config.template = wizard::ask_template(&usable, &config.template)?;
    }

    let client = reqwest::blocking::Client::new();
    let policy = registry::RetryPolicy::default();
    let cli_version = registry::cli_version(&client, config.runtime, &policy);
    let ui_kit_version = registry::ui_kit_version(&client, config.runtime, &policy);

    let template_root = templates_root.join(&config.template);
    if !template_root.exists() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: template_root.display().to_string(),
        });
    }

    let files = walker::list_files(&template_root, DO_NOT_COPY_FILES);
    let manifest = manifest::load_manifest(&template_root)?;

    let project_path = config.project_path();
    let opts = CreateOptions {
        config: &config,
        cli_version: &cli_version,
        ui_kit_version: &ui_kit_version,
        page_name: PAGE_NAME,
    };
    let mut creator = Creator::new(&engine, template_root, project_path.clone());
    let logs = creator.create_files(&files, manifest.as_ref(), &opts)?;

    creator.editor.commit(|| {
        println!();
        println!("✔ created project: {}", config.project_name);
        for line in &logs {
            println!("{line}");
        }
        println!();
    })?;

    // Post-create hooks only start once the commit has reported completion.
    hooks::run_post_create(&project_path, &config);

    println!(
        "Project '{}' created successfully. Enter the directory and start working!",
        config.project_name
    );
    Ok(())
}

/// Clears an existing target directory.
///
/// With `--force` the directory is removed unconditionally; otherwise the
/// user is asked first. Removal is not idempotent and is never retried.
/// Returns whether the creation may proceed.
fn prepare_target(target: &Path, force: bool) -> Result<bool> {
    let proceed = force || {
        dialoguer::Confirm::new()
            .with_prompt(format!(
                "Directory '{}' already exists. Remove it and continue?",
                target.display()
            ))
            .default(false)
            .interact()?
    };
    if proceed {
        if target.is_dir() {
            std::fs::remove_dir_all(target)?;
        } else {
            std::fs::remove_file(target)?;
        }
    }
    Ok(proceed)
}
