/*!
    Field-based deinterlacing of planar YUV frames.

    This crate turns an interlaced frame, two fields captured at different
    instants and woven together row by row, into one or two progressive
    frames. The host feeds input frames one at a time; output buffers come
    from a [`FrameSink`] the host implements.

    # Modes

    - **discard**: keep the top field, half height
    - **mean**: average each pair of rows, half height
    - **blend** (also `average`, `combine-fields`): average each row with
      the one above, full height
    - **bob** (also `progressive-scan`): both fields as separate frames,
      half height, double rate
    - **linear**: both fields, missing rows interpolated, full height,
      double rate

    Unknown mode values fall back to discard with a warning.

    # Usage

    ```ignore
    use video_deinterlace::{DeinterlaceConfig, Deinterlacer, InputDescriptor};

    let config = DeinterlaceConfig::new().with_mode("linear");
    let input = InputDescriptor { format, width, height };
    let mut deinterlacer = Deinterlacer::new(&config, input, &mut sink)?;

    for frame in frames {
        deinterlacer.render(&frame, &mut sink)?;
    }

    deinterlacer.close(&mut sink);
    ```

    # Formats

    I420 (also `IYUV`) and YV12 are written in their own format. I422 is
    written as I420 at full height, with luma rows repeated where a mode
    produces half-height output. Any other format leaves the deinterlacer
    inactive: it is created successfully but renders nothing.

    # Timestamps

    The first output frame carries the input timestamp. In double-rate
    modes the second is extrapolated from the previous input timestamp,
    or placed 20ms later for the very first frame.
*/

pub use video_types::{
    AbortSignal, ChromaFamily, Field, FormatPlan, PixelFormat, Plane, Timestamp, VideoFrame,
};

mod config;
mod engine;
mod error;
mod merge;
mod mode;
mod retry;
mod sink;
mod timing;

pub mod render;

pub use config::{
    DEFAULT_MODE, DEFAULT_RETRY_INTERVAL, DeinterlaceConfig, MODE_KEY, MODE_NAMES, RetryPolicy,
};
pub use engine::{Deinterlacer, InputDescriptor, RenderOutcome};
pub use error::{Error, Result};
pub use merge::merge;
pub use mode::{ConfigWarning, Mode, OutputHeight};
pub use sink::{FrameSink, OutputGeometry, SinkError};
pub use timing::{FIRST_FIELD_OFFSET_US, FieldTiming};
