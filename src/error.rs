//! Error types and handling for msync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for msync operations
#[derive(Error, Diagnostic, Debug)]
pub enum MsyncError {
    // Configuration errors
    #[error("Workspace settings not found (msync.yaml)")]
    #[diagnostic(
        code(msync::config::not_found),
        help(
            "Create an msync.yaml at the workspace root listing module manifest patterns, e.g.\n  modules:\n    - ./libs/*/package.json"
        )
    )]
    ConfigNotFound,

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(msync::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid module pattern: {pattern}")]
    #[diagnostic(
        code(msync::config::invalid_pattern),
        help("Patterns are globs relative to the workspace root, e.g. ./libs/*/package.json")
    )]
    InvalidPattern { pattern: String, reason: String },

    // Module errors
    #[error("Module '{name}' not found in workspace")]
    #[diagnostic(
        code(msync::module::not_found),
        help("Run 'msync ls' to see which modules msync.yaml matches")
    )]
    ModuleNotFound { name: String },

    #[error("Module '{name}' is ignored")]
    #[diagnostic(
        code(msync::module::ignored),
        help("Pass --include-ignored (-i) to operate on ignored modules")
    )]
    ModuleIgnored { name: String },

    // Manifest errors
    #[error("Failed to read manifest: {path}")]
    #[diagnostic(code(msync::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest: {path}")]
    #[diagnostic(code(msync::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Failed to write manifest: {path}")]
    #[diagnostic(code(msync::manifest::write_failed))]
    ManifestWriteFailed { path: String, reason: String },

    // Version errors
    #[error("Invalid version '{value}': {reason}")]
    #[diagnostic(code(msync::version::invalid))]
    InvalidVersion { value: String, reason: String },

    // Dependency errors
    #[error("Circular dependency detected: {chain}")]
    #[diagnostic(
        code(msync::deps::circular),
        help("Break the cycle between these modules before bumping")
    )]
    CircularDependency { chain: String },

    // Mirror errors
    #[error("Sync failed: {command}")]
    #[diagnostic(code(msync::sync::failed))]
    SyncFailed {
        command: String,
        code: Option<i32>,
        reason: String,
    },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(msync::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for MsyncError {
    fn from(err: std::io::Error) -> Self {
        MsyncError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for MsyncError {
    fn from(err: serde_yaml::Error) -> Self {
        MsyncError::ConfigParseFailed {
            path: "msync.yaml".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for MsyncError {
    fn from(err: inquire::InquireError) -> Self {
        MsyncError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MsyncError>;
