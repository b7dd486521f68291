use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to clone repository. Original error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Registry request failed. Original error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse manifest. Original error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    #[error("Dialog error: {0}.")]
    DialogError(#[from] dialoguer::Error),

    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// When a hook subprocess has executed but finished with an error.
    #[error("Hook execution failed with status: {status}")]
    HookExecutionError { status: ExitStatus },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with Mason's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
