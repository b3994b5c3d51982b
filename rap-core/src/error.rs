use thiserror::Error;

/// Common errors across the asset pipeline
#[derive(Error, Debug)]
pub enum RapError {
    #[error("Invalid icon spec: {0}")]
    InvalidSpec(#[from] SpecError),

    #[error("Render error: {0}")]
    Render(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("Canvas size must be positive")]
    ZeroCanvas,

    #[error("Output name is empty")]
    EmptyOutputName,

    #[error("Invalid color: {0:?} (expected #RRGGBB)")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, RapError>;
