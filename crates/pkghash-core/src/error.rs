use std::io;
use std::path::PathBuf;

/// Errors that can occur while fingerprinting packages.
#[derive(Debug, thiserror::Error)]
pub enum PkgHashError {
    #[error("no such file or directory: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a package (missing manifest): {}", .dir.display())]
    NotAPackage {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("salt must be bytes, a string, an object or an array (got {kind})")]
    InvalidSaltType { kind: &'static str },

    #[error("salt serialization error: {0}")]
    Salt(#[from] serde_json::Error),

    #[error("runtime error: {0}")]
    Runtime(#[from] tokio::task::JoinError),
}

impl PkgHashError {
    /// Classify an I/O failure on a required path.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path, source }
        } else {
            Self::Io { path, source }
        }
    }

    /// Classify an I/O failure while reading a package manifest.
    pub fn from_manifest_io(dir: impl Into<PathBuf>, source: io::Error) -> Self {
        let dir = dir.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotAPackage { dir, source }
        } else {
            Self::Io { path: dir, source }
        }
    }

    /// True for a missing path and for a directory without a manifest.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NotAPackage { .. })
    }

    /// The underlying I/O error kind, if this error came from the filesystem.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::NotFound { source, .. }
            | Self::NotAPackage { source, .. }
            | Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PkgHashError>;
