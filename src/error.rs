use std::{io, path::PathBuf};

use thiserror::Error;

/// Anything that stops an indexing run. Parsing itself never fails.
#[derive(Debug, Error)]
pub(crate) enum IndexError {
    #[error("cannot list notes directory {path}: {source}")]
    Discover {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("notes path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("output path is a directory: {path}")]
    OutputIsDirectory { path: PathBuf },

    #[error("cannot read note {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot load title collation data: {reason}")]
    Collator { reason: String },

    #[error("cannot serialize index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot write index {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
