/*!
    The deinterlacer: one render call per input frame.
*/

use tracing::{debug, error, trace, warn};
use video_types::{ChromaFamily, FormatPlan, PixelFormat, VideoFrame};

use crate::config::{DeinterlaceConfig, RetryPolicy};
use crate::mode::{ConfigWarning, Mode, OutputHeight};
use crate::render;
use crate::retry::acquire;
use crate::sink::{FrameSink, OutputGeometry};
use crate::timing::FieldTiming;
use crate::{Error, Result};

/**
    Format and dimensions of the frames the host will feed in.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputDescriptor {
    pub format: PixelFormat,
    pub width: u32,
    pub height: u32,
}

impl InputDescriptor {
    /**
        Describe the given frame.
    */
    pub fn of(frame: &VideoFrame) -> Self {
        Self {
            format: frame.format,
            width: frame.width,
            height: frame.height,
        }
    }

    fn matches(&self, frame: &VideoFrame) -> bool {
        *self == Self::of(frame)
    }
}

/**
    Result of a successful render call.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The input format is not supported; nothing was produced.
    Inactive,
    /// This many frames were handed to the sink for display.
    Displayed(usize),
}

/**
    Deinterlacer state for one input stream.

    Created once per stream and owned by the caller, which passes every
    input frame to [`render`](Deinterlacer::render) together with the sink.
    Only the previous input timestamp changes between calls.
*/
#[derive(Debug)]
pub struct Deinterlacer {
    mode: Mode,
    input: InputDescriptor,
    output: Option<OutputGeometry>,
    retry: RetryPolicy,
    timing: FieldTiming,
    warning: Option<ConfigWarning>,
}

impl Deinterlacer {
    /**
        Resolve the configured mode and negotiate the output with `sink`.

        An unsupported input format leaves the deinterlacer inactive rather
        than failing. A sink that refuses the output geometry is fatal.
    */
    pub fn new<S: FrameSink + ?Sized>(
        config: &DeinterlaceConfig,
        input: InputDescriptor,
        sink: &mut S,
    ) -> Result<Self> {
        let (mode, warning) = config.resolve_mode();
        if let Some(warning) = &warning {
            warn!("{warning}");
        }

        let output = match FormatPlan::for_format(input.format) {
            Some(plan) => {
                let geometry = output_geometry(&plan, mode, &input);
                debug!(%mode, %geometry, "opening output");
                if let Err(source) = sink.open(&geometry) {
                    error!(%geometry, "cannot open output: {source}");
                    return Err(Error::SinkUnavailable { geometry, source });
                }
                Some(geometry)
            }
            None => {
                warn!(format = %input.format, "unsupported input format, no active output");
                None
            }
        };

        Ok(Self {
            mode,
            input,
            output,
            retry: config.retry,
            timing: FieldTiming::new(),
            warning,
        })
    }

    /**
        Returns the resolved mode.
    */
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /**
        Returns true if two frames are produced per input frame.
    */
    pub fn is_double_rate(&self) -> bool {
        self.mode.is_double_rate()
    }

    /**
        Returns the negotiated output geometry, or None when inactive.
    */
    pub fn output(&self) -> Option<OutputGeometry> {
        self.output
    }

    /**
        Returns the configuration warning raised at creation, if any.
    */
    pub fn warning(&self) -> Option<&ConfigWarning> {
        self.warning.as_ref()
    }

    /**
        Returns the timing state used for double-rate timestamps.
    */
    pub fn timing(&self) -> &FieldTiming {
        &self.timing
    }

    /**
        Deinterlace one input frame into the sink.

        All output buffers for the call are acquired before any is filled.
        If the host aborts while waiting, or the sink hands out a buffer that
        does not match the negotiated output, buffers already acquired are
        destroyed and nothing is displayed.
    */
    pub fn render<S: FrameSink + ?Sized>(
        &mut self,
        input: &VideoFrame,
        sink: &mut S,
    ) -> Result<RenderOutcome> {
        let Some(geometry) = self.output else {
            return Ok(RenderOutcome::Inactive);
        };
        self.check_input(input)?;

        let passes = self.mode.passes();
        let mut frames = Vec::with_capacity(passes.len());
        for _ in passes {
            let acquired = match acquire(sink, &geometry, &self.retry) {
                Ok(frame) => {
                    let checked = check_output(&geometry, &frame);
                    frames.push(frame);
                    checked
                }
                Err(e) => Err(e),
            };
            if let Err(e) = acquired {
                for frame in frames {
                    sink.destroy_frame(frame);
                }
                return Err(e);
            }
        }

        let double_rate = self.is_double_rate();
        let stamps = self.timing.stamps(input.timestamp, double_rate);
        for ((pass, mut frame), timestamp) in passes.iter().zip(frames).zip(stamps) {
            frame.timestamp = timestamp;
            render::apply(*pass, input, &mut frame);
            trace!(?pass, %timestamp, "displaying frame");
            sink.display_frame(frame);
        }

        if double_rate {
            self.timing.record(input.timestamp);
        }

        Ok(RenderOutcome::Displayed(passes.len()))
    }

    /**
        Release the output negotiated at creation.

        Later render calls produce nothing.
    */
    pub fn close<S: FrameSink + ?Sized>(&mut self, sink: &mut S) {
        if self.output.take().is_some() {
            debug!("closing output");
            sink.close();
        }
    }

    fn check_input(&self, frame: &VideoFrame) -> Result<()> {
        if !self.input.matches(frame) {
            return Err(Error::invalid_frame(format!(
                "expected {}x{} {}, got {}x{} {}",
                self.input.width,
                self.input.height,
                self.input.format,
                frame.width,
                frame.height,
                frame.format
            )));
        }
        frame.validate()?;
        Ok(())
    }
}

fn check_output(geometry: &OutputGeometry, frame: &VideoFrame) -> Result<()> {
    if frame.format != geometry.format
        || frame.width != geometry.width
        || frame.height != geometry.height
    {
        return Err(Error::invalid_frame(format!(
            "sink returned a {}x{} {} frame for {geometry} output",
            frame.width, frame.height, frame.format
        )));
    }
    frame.validate()?;
    Ok(())
}

/**
    Output geometry for a supported input.

    4:2:0 input keeps its format and takes the mode's height. 4:2:2 input
    is written as I420 at the full input height.
*/
fn output_geometry(plan: &FormatPlan, mode: Mode, input: &InputDescriptor) -> OutputGeometry {
    let height = match plan.family() {
        ChromaFamily::Planar420 => mode.output_height(),
        ChromaFamily::Planar422 => OutputHeight::Full,
    };
    OutputGeometry {
        width: input.width,
        height: height.apply(input.height),
        format: plan.output_format(),
    }
}

// Engines are moved onto the host's processing thread
static_assertions::assert_impl_all!(Deinterlacer: Send, Sync);
