//! Error types for tmplgen-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from a generation run.
///
/// Every variant is fatal: the tool either completes the whole
/// resolve / encode / emit / write pass or aborts before touching the
/// output file.
#[derive(Debug, Error)]
pub enum GenError {
    /// Failed to open or read a template source file.
    #[error("failed to read input template file {path}: {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to list the input directory.
    #[error("failed to read input directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the generated artifact.
    #[error("failed to write generated file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`GenError::ReadTemplate`].
pub(crate) fn read_err(path: impl Into<PathBuf>, source: std::io::Error) -> GenError {
    GenError::ReadTemplate {
        path: path.into(),
        source,
    }
}
