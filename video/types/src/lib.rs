/*!
    Shared types for the deinterlacing crates.

    This crate defines the vocabulary that crosses crate boundaries: frames,
    planes, pixel formats and timestamps. It contains no pixel processing of
    its own, so hosts and sinks can depend on it without pulling in the
    deinterlacer.

    # Core Types

    - [`VideoFrame`] and [`Plane`] - Planar frame data with explicit pitch
    - [`Field`] - Row parity of an interlaced field
    - [`Timestamp`] - Presentation time in microseconds

    # Format Types

    - [`PixelFormat`] - Four-character pixel format tags
    - [`ChromaFamily`] - The 4:2:0 and 4:2:2 planar families
    - [`FormatPlan`] and [`PlaneLayout`] - Per-plane subsampling and addressing

    # Host Signals

    - [`AbortSignal`] - Termination or error raised by the host

    # Error Handling

    - [`Error`] and [`Result`] - Common error types
*/

mod error;
mod format;
mod frame;
mod signal;
mod timestamp;

pub use error::{Error, Result};
pub use format::{ChromaFamily, FormatPlan, PixelFormat, PlaneLayout};
pub use frame::{Field, Plane, VideoFrame};
pub use signal::AbortSignal;
pub use timestamp::Timestamp;
