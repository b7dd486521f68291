/// Handles argument parsing and run orchestration.
pub mod cli;

/// Constants used throughout the application.
pub mod constants;

/// File materialization policy.
pub mod creator;

/// Defines custom error types.
pub mod error;

/// Post-create subprocess steps (git init, dependency install).
pub mod hooks;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template manifests and per-file inclusion rules.
pub mod manifest;

/// Resolved project configuration.
pub mod project;

/// Registry version lookups with an explicit retry policy.
pub mod registry;

/// Remote template fetching.
pub mod remote;

/// Template parsing and rendering functionality.
pub mod renderer;

/// In-memory staging of rendered files.
pub mod stage;

/// Filesystem walking with name-based exclusions.
pub mod walker;

/// Interactive question flow.
pub mod wizard;
