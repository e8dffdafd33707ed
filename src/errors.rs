use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("Directory walk failed: {0}")]
    WalkError(String),

    #[error("File read failed: {0}")]
    FileReadError(String),

    #[error("Output write failed: {0}")]
    OutputWriteError(String),

    #[error("Path resolution failed: {0}")]
    PathError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for CollectorError {
    fn from(err: std::io::Error) -> Self {
        CollectorError::IoError(err.to_string())
    }
}
