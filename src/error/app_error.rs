use thiserror::Error;

/// Application error
#[derive(Error, Debug)]
pub enum AppError {
    /// Market data retrieval failed (network, non-200 status, bad payload)
    #[error("fetch error: {0}")]
    FetchError(String),

    /// Chart construction or write failed
    #[error("chart error: {0}")]
    ChartError(String),

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ChartError(err.to_string())
    }
}
