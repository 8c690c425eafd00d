//! Error types for boxforge

use thiserror::Error;

/// Result type alias using boxforge's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, exporting or reading box meshes
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter (dimension, color, profile name)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// IO error while writing or reading an artifact
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Zip archive creation failed
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// An OBJ or MTL file could not be read
    #[error("OBJ load error: {0}")]
    Load(#[from] tobj::LoadError),
}
