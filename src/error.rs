//! Error types for scanning and report generation

use std::io;
use std::path::PathBuf;

/// Failures that stop a run.
///
/// A file whose size cannot be read is not an error: the detailed report
/// renders it without a size and moves on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("path '{}' does not exist", .0.display())]
    PathNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_message() {
        let err = Error::PathNotFound(PathBuf::from("/nope"));
        assert_eq!(err.to_string(), "path '/nope' does not exist");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = Error::io("/x", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(err.to_string().contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_write_error_names_path() {
        let err = Error::write("out.md", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "cannot write 'out.md': denied");
    }
}
