use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserlistError {
    #[error("{0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(serde_json::Error),

    #[error("Encode error: {0}")]
    Encode(serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl UserlistError {
    pub fn usage(message: impl Into<String>) -> Self {
        UserlistError::Usage(message.into())
    }
}

pub type Result<T> = std::result::Result<T, UserlistError>;
