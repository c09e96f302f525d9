use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    // Root validation
    #[error("root not found")]
    NotFound(PathBuf),

    #[error("root is not a directory")]
    InvalidRoot(PathBuf),

    // Config
    #[error("keyword must not be empty")]
    EmptyKeyword,

    // Per-file
    #[error("permission denied")]
    PermissionDenied(PathBuf),

    #[error("not valid UTF-8")]
    Decode(PathBuf),

    #[error("IO error")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Traversal errors the walker reports without a usable path
    #[error("walk error")]
    Walk(String),
}

impl ScanError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present "skipped: <path>" without pattern matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound(p)
            | Self::InvalidRoot(p)
            | Self::PermissionDenied(p)
            | Self::Decode(p)
            | Self::Io { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Whether the scan can continue after this error.
    ///
    /// Recoverable errors (permission denied, undecodable files, IO) are
    /// collected into [`ScanReport::errors`](crate::ScanReport) and the walk
    /// keeps going, unless `.fail_fast(true)` was set on the builder.
    ///
    /// Fatal errors (missing root, empty keyword) halt before any traversal.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied(_) | Self::Decode(_) | Self::Io { .. } | Self::Walk(_)
        )
    }
}
