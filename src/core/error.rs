use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures surfaced by the batch driver. Display is the one-line message shown to the user.
#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("Usage: {program} <input_file> <output_file>\nExample: {program} usernames.txt results.txt")]
    Usage { program: String },

    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("No usernames found in {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("Permission denied accessing {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WordlistError {
    /// Classifies an error raised while reading the username list
    pub fn from_read_error(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::InputNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Classifies an error raised while writing the wordlist
    pub fn from_write_error(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}
