use std::path::PathBuf;

/// Convenience result type used across layercomp.
pub type LayerResult<T> = Result<T, LayerError>;

/// Error taxonomy for layer construction, scene loading and output encoding.
///
/// Nothing in this crate retries or logs-and-swallows: every failure is handed back to the
/// immediate caller.
#[derive(thiserror::Error, Debug)]
pub enum LayerError {
    /// The destination file could not be created or opened.
    #[error("cannot create '{}': {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The codec rejected the image.
    #[error("encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Buffered bytes failed to reach the destination file.
    #[error("cannot flush '{}': {source}", path.display())]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An image source could not be read or decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid scene description data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Scene JSON could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayerError {
    /// Build a [`LayerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayerError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`LayerError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
