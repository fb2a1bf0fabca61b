//! File system errors

use std::path::Path;

use super::WhitelabelError;

/// Creates a read error for `path`
pub fn read_failed(path: &Path, err: &std::io::Error) -> WhitelabelError {
    WhitelabelError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a write error for `path`
pub fn write_failed(path: &Path, err: &std::io::Error) -> WhitelabelError {
    WhitelabelError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a directory creation error for `path`
pub fn create_dir_failed(path: &Path, err: &std::io::Error) -> WhitelabelError {
    WhitelabelError::DirectoryCreateFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
