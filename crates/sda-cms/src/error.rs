//! # Error Types

use std::path::PathBuf;

use thiserror::Error;

use sda_core::CatalogError;

/// Rendering or writing the configuration failed.
#[derive(Error, Debug)]
pub enum EmitError {
    /// YAML serialization or parsing failed.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The directory the configuration goes into does not exist.
    #[error("output directory does not exist: {}", path.display())]
    MissingDirectory {
        /// The missing directory.
        path: PathBuf,
    },

    /// The output path has no file name component.
    #[error("output path has no file name: {}", path.display())]
    InvalidPath {
        /// The rejected path.
        path: PathBuf,
    },

    /// Reading, writing or renaming a file failed.
    #[error("io error on {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Any failure of a full generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The catalog was rejected by the mapper.
    #[error("malformed catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// The configuration could not be rendered or written.
    #[error(transparent)]
    Emit(#[from] EmitError),
}
