use std::path::PathBuf;

use rap_core::RapError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Core(#[from] RapError),

    #[error("Failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, IoError>;
