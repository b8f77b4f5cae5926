/*!
    Row reconstruction algorithms.

    Each algorithm fills an output frame from one interlaced input frame.
    They are plain functions over frames: the output frame is supplied by
    the caller and already has the negotiated geometry.

    Planes are walked through the input format's [`FormatPlan`]. Every
    algorithm produces either half as many rows as the input plane has
    (field extraction, mean) or the same number (blend, linear); when the
    output plane disagrees, which happens for 4:2:2 input written as 4:2:0,
    the [`LineFit`] of the plane says how to reconcile the two.
*/

use video_types::{Field, FormatPlan, Plane, PlaneLayout, VideoFrame};

use crate::merge::merge;
use crate::mode::OutputHeight;

mod blend;
mod field;
mod linear;
mod mean;

pub use blend::blend;
pub use field::extract_field;
pub use linear::linear;
pub use mean::mean;

/**
    One algorithm run producing one output frame.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pass {
    /// Copy the rows of one field
    Field(Field),
    /// Average each pair of rows
    Mean,
    /// Average each row with the one above it
    Blend,
    /// Keep one field and interpolate the other
    Linear(Field),
}

/**
    Run a single pass from `src` into `dst`.
*/
pub fn apply(pass: Pass, src: &VideoFrame, dst: &mut VideoFrame) {
    match pass {
        Pass::Field(field) => extract_field(src, dst, field),
        Pass::Mean => mean(src, dst),
        Pass::Blend => blend(src, dst),
        Pass::Linear(field) => linear(src, dst, field),
    }
}

/**
    How an algorithm's natural rows map onto an output plane.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineFit {
    /// One output row per natural row
    Exact,
    /// Every natural row is written twice
    Doubled,
    /// The output plane has half the natural rows
    Halved,
}

impl LineFit {
    fn new(layout: &PlaneLayout, natural: OutputHeight, output: OutputHeight) -> Self {
        let natural_shift = layout.y_shift + natural.shift();
        let output_shift = layout.output_y_shift + output.shift();
        match natural_shift.cmp(&output_shift) {
            std::cmp::Ordering::Equal => Self::Exact,
            std::cmp::Ordering::Greater => Self::Doubled,
            std::cmp::Ordering::Less => Self::Halved,
        }
    }

    /**
        Returns the natural row that lands on output row `line`.
    */
    #[inline]
    fn natural_row(self, line: usize) -> usize {
        match self {
            Self::Exact => line,
            Self::Doubled => line / 2,
            Self::Halved => line * 2,
        }
    }
}

/**
    Call `render` for every plane pair, with the fit between the
    algorithm's natural height and the output plane.
*/
fn for_each_plane(
    src: &VideoFrame,
    dst: &mut VideoFrame,
    natural: OutputHeight,
    mut render: impl FnMut(&Plane, &mut Plane, LineFit),
) {
    let Some(plan) = FormatPlan::for_format(src.format) else {
        return;
    };
    let output = if dst.height < src.height {
        OutputHeight::Half
    } else {
        OutputHeight::Full
    };

    let planes = plan.planes().iter().zip(&src.planes).zip(&mut dst.planes);
    for ((layout, src), dst) in planes {
        if src.lines == 0 || dst.lines == 0 {
            continue;
        }
        render(src, dst, LineFit::new(layout, natural, output));
    }
}

/**
    Returns source row `index`, clamped to the last row of the plane.
*/
#[inline]
fn source_row(src: &Plane, index: usize) -> &[u8] {
    src.row(index.min(src.lines - 1))
}

#[inline]
fn copy_row(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len(), "row width mismatch");
    let len = dst.len().min(src.len());
    dst[..len].copy_from_slice(&src[..len]);
}

#[inline]
fn merge_rows(dst: &mut [u8], a: &[u8], b: &[u8]) {
    debug_assert_eq!(dst.len(), a.len(), "row width mismatch");
    let len = dst.len().min(a.len()).min(b.len());
    merge(&mut dst[..len], &a[..len], &b[..len]);
}
