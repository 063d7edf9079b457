use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to launch headless browser: {0}")]
    Launch(String),

    #[error("Browser protocol error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Navigation timed out after {0} seconds")]
    Timeout(u64),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ScanError>;
