/*!
    Field extraction, used by the discard and bob modes.
*/

use video_types::{Field, Plane, VideoFrame};

use super::{LineFit, copy_row, for_each_plane, source_row};
use crate::mode::OutputHeight;

/**
    Copy the rows of `field` into consecutive output rows.

    Output row `i` is input row `2i + parity`. For 4:2:2 input the luma
    rows are each written twice, since the output keeps the full luma
    height while chroma is halved.
*/
pub fn extract_field(src: &VideoFrame, dst: &mut VideoFrame, field: Field) {
    for_each_plane(src, dst, OutputHeight::Half, |src, dst, fit| {
        field_plane(src, dst, fit, field)
    });
}

pub(super) fn field_plane(src: &Plane, dst: &mut Plane, fit: LineFit, field: Field) {
    for line in 0..dst.lines {
        let row = fit.natural_row(line);
        copy_row(dst.row_mut(line), source_row(src, 2 * row + field.parity()));
    }
}
