/*!
    Error types for the deinterlacing crates.
*/

use thiserror::Error;

use crate::PixelFormat;

/**
    Error type for frame construction and format handling.
*/
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The four-character tag does not name any known pixel format
    #[error("unknown pixel format tag: {tag:?}")]
    UnknownFormat { tag: String },
    /// The format is known but has no planar layout we can address
    #[error("unsupported format: {format}")]
    UnsupportedFormat { format: PixelFormat },
    /// Plane or frame dimensions are inconsistent
    #[error("invalid geometry: {message}")]
    InvalidGeometry { message: String },
}

impl Error {
    /**
        Create an unknown format error for the given tag.
    */
    pub fn unknown_format(tag: impl Into<String>) -> Self {
        Self::UnknownFormat { tag: tag.into() }
    }

    /**
        Create an invalid geometry error with the given message.
    */
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }

    /**
        Returns true if this error reports a format without a planar layout.
    */
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }
}

/**
    Result type alias for the deinterlacing crates.
*/
pub type Result<T> = std::result::Result<T, Error>;
