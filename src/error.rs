use thiserror::Error;

use crate::registry::EngineId;

pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("no graph file type is registered for mime type `{0}`")]
    UnknownMimeType(String),

    #[error("invalid viewer config: {0}")]
    InvalidConfig(String),
}

/// Failure reported by an external layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("layout failed: {0}")]
    Layout(String),

    #[error("engine `{0}` is not available")]
    Unavailable(EngineId),
}
