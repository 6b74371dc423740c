use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToneError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Unsupported channel count: {0} (expected 1 or 3)")]
    UnsupportedChannelCount(usize),

    #[error("Channel size mismatch: expected {expected} samples, got {actual}")]
    ChannelSizeMismatch { expected: usize, actual: usize },

    #[error("Pipeline error: {0}")]
    Pipeline(String),
}

impl ToneError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToneError>;
