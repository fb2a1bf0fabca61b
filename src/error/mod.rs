//! Error types and handling for whitelabel
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Sub-modules hold convenience constructors by error domain:
//! - [`fs`]: File system errors
//! - [`logo`]: Logo payload errors

pub mod fs;
pub mod logo;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for whitelabel operations
#[derive(Error, Diagnostic, Debug)]
pub enum WhitelabelError {
    // Workspace errors
    #[error("Workspace not found at: {path}")]
    #[diagnostic(
        code(whitelabel::workspace::not_found),
        help("Pass the root directory of the application template with --workspace")
    )]
    WorkspaceNotFound { path: String },

    // File system errors

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(whitelabel::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(whitelabel::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(whitelabel::fs::create_dir_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    // Logo errors
    #[error("Invalid logo payload: {reason}")]
    #[diagnostic(
        code(whitelabel::logo::decode_failed),
        help("The logo must be passed as a standard base64 string")
    )]
    LogoDecodeFailed { reason: String },

    // Pattern errors
    #[error("Invalid pattern '{pattern}': {reason}")]
    #[diagnostic(code(whitelabel::pattern::invalid))]
    PatternInvalid { pattern: String, reason: String },
}

impl From<base64::DecodeError> for WhitelabelError {
    fn from(err: base64::DecodeError) -> Self {
        logo::decode_failed(err.to_string())
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, WhitelabelError>;
