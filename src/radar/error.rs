use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadarError {
    #[error("{0}")]
    Validation(String),

    #[error("Note not found: {0}")]
    NoteNotFound(u32),

    #[error("No note dialog is open")]
    DialogClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RadarError>;
