/*!
    Sink writing displayed frames to a raw file.
*/

use std::io::{self, Write};

use tracing::{debug, trace};
use video_deinterlace::{
    AbortSignal, FormatPlan, FrameSink, OutputGeometry, SinkError, Timestamp, VideoFrame,
};

use crate::raw::write_frame;

/**
    Frame sink backed by a writer.

    A write failure is remembered and reported to the deinterlacer as an
    error signal. No more buffers are handed out after that, so the next
    render call is cancelled.
*/
pub struct FileSink<W: Write> {
    out: W,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> FileSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            error: None,
        }
    }

    /**
        Returns the number of frames written so far.
    */
    pub fn written(&self) -> usize {
        self.written
    }

    /**
        Flush the writer and hand it back, or the first write error.
    */
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> FrameSink for FileSink<W> {
    fn open(&mut self, geometry: &OutputGeometry) -> Result<(), SinkError> {
        if FormatPlan::for_format(geometry.format).is_none() {
            return Err(SinkError::UnsupportedFormat(geometry.format));
        }
        debug!(%geometry, "writing raw frames");
        Ok(())
    }

    fn create_frame(&mut self, geometry: &OutputGeometry) -> Option<VideoFrame> {
        if self.error.is_some() {
            return None;
        }
        VideoFrame::alloc(
            geometry.format,
            geometry.width,
            geometry.height,
            Timestamp::UNSET,
        )
        .ok()
    }

    fn display_frame(&mut self, frame: VideoFrame) {
        if self.error.is_some() {
            return;
        }
        match write_frame(&mut self.out, &frame) {
            Ok(()) => {
                trace!(timestamp = %frame.timestamp, "frame written");
                self.written += 1;
            }
            Err(e) => self.error = Some(e),
        }
    }

    fn destroy_frame(&mut self, _frame: VideoFrame) {}

    fn abort_signal(&self) -> Option<AbortSignal> {
        self.error.as_ref().map(|_| AbortSignal::Error)
    }

    fn close(&mut self) {
        if let Err(e) = self.out.flush() {
            self.error.get_or_insert(e);
        }
    }
}
