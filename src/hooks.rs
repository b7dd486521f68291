//! Post-create subprocess steps.
//!
//! After the staging commit has reported completion, the generated project
//! gets a git repository and, when enabled, a dependency installation. Both
//! run with an explicit working directory and report failures without
//! aborting the run; the project counts as created either way.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};
use crate::project::ProjectConfig;

/// Initializes a git repository in the project directory.
pub fn git_init(project_path: &Path) -> Result<()> {
    run_step(project_path, "git", &["init"])
}

/// Installs the project dependencies with the configured npm client.
pub fn install_dependencies(project_path: &Path, npm_client: &str) -> Result<()> {
    run_step(project_path, npm_client, &["install"])
}

/// Install command shown to the user.
pub fn install_command(npm_client: &str) -> String {
    format!("{npm_client} install")
}

fn run_step(cwd: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program).args(args).current_dir(cwd).status()?;
    if !status.success() {
        return Err(Error::HookExecutionError { status });
    }
    Ok(())
}

/// Runs every post-create step in order, reporting each outcome.
pub fn run_post_create(project_path: &Path, config: &ProjectConfig) {
    println!("Running 'git init' in {}", project_path.display());
    match git_init(project_path) {
        Ok(()) => println!("✔ initialized empty git repository"),
        Err(err) => eprintln!("✖ git init failed: {err}"),
    }

    if config.auto_install {
        let command = install_command(&config.npm_client);
        println!("Installing dependencies with '{command}', this can take a while...");
        match install_dependencies(project_path, &config.npm_client) {
            Ok(()) => println!("✔ dependencies installed"),
            Err(err) => {
                eprintln!("✖ installing dependencies failed, run '{command}' yourself: {err}")
            }
        }
    }
}
