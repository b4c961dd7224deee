use std::path::PathBuf;

/// Convenience result type used throughout covergen.
pub type CoverResult<T> = Result<T, CoverError>;

/// Top-level error type for the cover pipeline.
///
/// Font load/parse, validation and output failures are fatal. `FaceConstruction` is returned by
/// the font layer but absorbed by the wrapping and drawing stages.
#[derive(thiserror::Error, Debug)]
pub enum CoverError {
    /// The font file could not be read.
    #[error("font load error: '{}': {source}", path.display())]
    FontLoad {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The font bytes are not a parseable outline font.
    #[error("font parse error: {0}")]
    FontParse(String),

    /// A sized face could not be instantiated from a loaded font.
    #[error("font face error: {0}")]
    FaceConstruction(String),

    /// Invalid configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// The output image could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Filesystem failure on the output side.
    #[error("io error: '{}': {source}", path.display())]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoverError {
    /// Build a [`CoverError::FontParse`].
    pub fn font_parse(msg: impl Into<String>) -> Self {
        Self::FontParse(msg.into())
    }

    /// Build a [`CoverError::FaceConstruction`].
    pub fn face(msg: impl Into<String>) -> Self {
        Self::FaceConstruction(msg.into())
    }

    /// Build a [`CoverError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
