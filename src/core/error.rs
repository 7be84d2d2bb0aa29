use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VenvRunError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("virtualenvs directory {0:?} not found")]
    BaseNotFound(PathBuf),

    #[error("virtualenv not found at {0:?}")]
    VenvNotFound(PathBuf),

    #[error("command not found: {0:?}")]
    CommandNotFound(String),

    #[error("no command given")]
    NoCommand,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VenvRunError>;
