use thiserror::Error as ThisError;

use crate::ports::errors::{SourceError, WinnerSinkError};

#[derive(Debug, Clone, Eq, PartialEq, ThisError)]
#[error("Config Error for variable={name} with reason={reason}")]
pub struct ConfigError {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, ThisError)]
pub enum JudgeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    WinnerSink(#[from] WinnerSinkError),
}
