use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Sheet request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Sheet endpoint returned HTTP {status}")]
    UpstreamStatusError { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
