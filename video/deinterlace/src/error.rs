/*!
    Error types for the deinterlacer.
*/

use thiserror::Error;
use video_types::AbortSignal;

use crate::sink::{OutputGeometry, SinkError};

/**
    Error type for deinterlacer setup and rendering.
*/
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The sink cannot provide the negotiated output at all
    #[error("cannot open output {geometry}")]
    SinkUnavailable {
        geometry: OutputGeometry,
        #[source]
        source: SinkError,
    },
    /// The host aborted while waiting for output buffers
    #[error("render cancelled by host ({signal})")]
    Cancelled { signal: AbortSignal },
    /// No output buffer became free within the retry limit
    #[error("output still busy after {attempts} attempts")]
    SinkBusy { attempts: u32 },
    /// The input frame does not match what the deinterlacer was set up for
    #[error("invalid input frame: {message}")]
    InvalidFrame { message: String },
    /// Frame construction error
    #[error(transparent)]
    Frame(#[from] video_types::Error),
}

impl Error {
    /**
        Create an invalid frame error with the given message.
    */
    pub fn invalid_frame(message: impl Into<String>) -> Self {
        Self::InvalidFrame {
            message: message.into(),
        }
    }

    /**
        Returns true if the host cancelled the render call.
    */
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/**
    Result type alias for the deinterlacer.
*/
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;

    use video_types::PixelFormat;

    use super::*;

    #[test]
    fn error_display() {
        let e = Error::Cancelled {
            signal: AbortSignal::Terminate,
        };
        assert_eq!(e.to_string(), "render cancelled by host (terminate)");

        let e = Error::SinkBusy { attempts: 3 };
        assert_eq!(e.to_string(), "output still busy after 3 attempts");

        let e = Error::invalid_frame("expected I420, got I422");
        assert_eq!(e.to_string(), "invalid input frame: expected I420, got I422");
    }

    #[test]
    fn sink_unavailable_keeps_source() {
        let e = Error::SinkUnavailable {
            geometry: OutputGeometry {
                width: 720,
                height: 576,
                format: PixelFormat::I420,
            },
            source: SinkError::Other("no display".to_owned()),
        };
        assert_eq!(e.to_string(), "cannot open output 720x576 I420");
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn error_is_cancelled() {
        assert!(
            Error::Cancelled {
                signal: AbortSignal::Error
            }
            .is_cancelled()
        );
        assert!(!Error::SinkBusy { attempts: 1 }.is_cancelled());
    }
}
