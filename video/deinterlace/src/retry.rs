/*!
    Output buffer acquisition.
*/

use tracing::debug;
use video_types::VideoFrame;

use crate::config::RetryPolicy;
use crate::sink::{FrameSink, OutputGeometry};
use crate::{Error, Result};

/**
    Ask `sink` for a frame until it has one, the host aborts, or the
    policy's attempt limit is reached.

    The abort signal is checked after every failed attempt, before sleeping.
*/
pub(crate) fn acquire<S: FrameSink + ?Sized>(
    sink: &mut S,
    geometry: &OutputGeometry,
    policy: &RetryPolicy,
) -> Result<VideoFrame> {
    let mut attempts = 0u32;
    loop {
        if let Some(frame) = sink.create_frame(geometry) {
            return Ok(frame);
        }
        attempts += 1;

        if let Some(signal) = sink.abort_signal() {
            debug!(%signal, attempts, "output acquisition aborted");
            return Err(Error::Cancelled { signal });
        }
        if policy.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(Error::SinkBusy { attempts });
        }

        sink.sleep(policy.interval);
    }
}
