/*!
    The output side of a deinterlacer.
*/

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use video_types::{AbortSignal, PixelFormat, VideoFrame};

/**
    Dimensions and format of the frames a deinterlacer writes.

    Negotiated with the sink once, when the deinterlacer is created.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutputGeometry {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

impl fmt::Display for OutputGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} {}", self.width, self.height, self.format)
    }
}

/**
    Reason a sink refused to open an output.
*/
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("format {0} is not supported by the sink")]
    UnsupportedFormat(PixelFormat),
    #[error("{0}")]
    Other(String),
}

/**
    Destination for deinterlaced frames.

    The sink owns output buffers. The deinterlacer asks for a buffer per
    output frame, fills it, and hands it back through
    [`display_frame`](FrameSink::display_frame), or through
    [`destroy_frame`](FrameSink::destroy_frame) if the render call is
    abandoned before anything is shown.
*/
pub trait FrameSink {
    /**
        Prepare to receive frames of the given geometry.
    */
    fn open(&mut self, geometry: &OutputGeometry) -> Result<(), SinkError>;

    /**
        Hand out an empty frame, or None if no buffer is free right now.

        Must not block.
    */
    fn create_frame(&mut self, geometry: &OutputGeometry) -> Option<VideoFrame>;

    /// Queue a filled frame for display.
    fn display_frame(&mut self, frame: VideoFrame);

    /// Take back a frame that will not be displayed.
    fn destroy_frame(&mut self, frame: VideoFrame);

    /// Termination or error raised by the host, if any.
    fn abort_signal(&self) -> Option<AbortSignal>;

    /**
        Wait before asking for a buffer again.
    */
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    /**
        Release the output opened by [`open`](FrameSink::open).
    */
    fn close(&mut self) {}
}
