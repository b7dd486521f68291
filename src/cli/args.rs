use crate::constants::{exit_codes, verbosity};
use crate::project::{CssPreprocessor, RuntimeVersion};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for Mason.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project from a template
    Create(CreateArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct CreateArgs {
    /// Name of the project to create
    #[arg(value_name = "PROJECT_NAME")]
    pub name: Option<String>,

    /// Remove a pre-existing directory of the same name without asking
    #[arg(short, long)]
    pub force: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,

    /// Scaffold a TypeScript project (true/false)
    #[arg(long)]
    pub typescript: Option<bool>,

    /// CSS preprocessor flavor
    #[arg(long, value_enum)]
    pub css: Option<CssPreprocessor>,

    /// Lumen runtime version to target
    #[arg(long, value_enum)]
    pub runtime: Option<RuntimeVersion>,

    /// Template identifier
    #[arg(long)]
    pub template: Option<String>,

    /// Repository the remote template fetch pulls from
    #[arg(long = "template-source")]
    pub template_source: Option<String>,

    /// Fetch the remote template list and pick a template interactively
    #[arg(long = "choose-template")]
    pub choose_template: bool,

    /// Skip the dependency installation step
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Directory holding the templates (defaults to the install location)
    #[arg(long = "templates-dir")]
    pub templates_dir: Option<PathBuf>,
}

/// Parse command line arguments with custom handling for missing inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        use crate::constants::verbosity;
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_create_invocation() {
        let cli = Cli::parse_from(["mason", "create", "demo", "--force"]);
        let Commands::Create(args) = cli.command;
        assert_eq!(args.name.as_deref(), Some("demo"));
        assert!(args.force);
        assert!(!args.choose_template);
    }

    #[test]
    fn create_works_without_a_project_name() {
        let cli = Cli::parse_from(["mason", "create"]);
        let Commands::Create(args) = cli.command;
        assert_eq!(args.name, None);
    }

    #[test]
    fn parses_full_feature_flags() {
        let cli = Cli::parse_from([
            "mason",
            "create",
            "demo",
            "-vvv",
            "--description",
            "a demo app",
            "--typescript",
            "true",
            "--css",
            "stylus",
            "--runtime",
            "lumen2",
            "--template",
            "mobile",
            "--template-source",
            "direct:https://example.com/templates.git#v1",
            "--choose-template",
            "--no-install",
            "--templates-dir",
            "/opt/mason/templates",
        ]);
        let Commands::Create(args) = cli.command;
        assert_eq!(args.verbose, 3);
        assert_eq!(args.description.as_deref(), Some("a demo app"));
        assert_eq!(args.typescript, Some(true));
        assert_eq!(args.css, Some(CssPreprocessor::Stylus));
        assert_eq!(args.runtime, Some(RuntimeVersion::Lumen2));
        assert_eq!(args.template.as_deref(), Some("mobile"));
        assert!(args.choose_template);
        assert!(args.no_install);
        assert_eq!(args.templates_dir, Some(PathBuf::from("/opt/mason/templates")));
    }
}
