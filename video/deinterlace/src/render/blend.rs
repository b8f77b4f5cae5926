/*!
    Running blend of neighbouring rows.
*/

use video_types::{Plane, VideoFrame};

use super::mean::mean_plane;
use super::{LineFit, copy_row, for_each_plane, merge_rows, source_row};
use crate::mode::OutputHeight;

/**
    Average every row with the row above it, keeping the full height.

    The first row has nothing above it and is copied as is. 4:2:2 chroma,
    which the output halves, is reduced by averaging row pairs.
*/
pub fn blend(src: &VideoFrame, dst: &mut VideoFrame) {
    for_each_plane(src, dst, OutputHeight::Full, |src, dst, fit| match fit {
        LineFit::Halved => mean_plane(src, dst, LineFit::Exact),
        _ => blend_plane(src, dst, fit),
    });
}

fn blend_plane(src: &Plane, dst: &mut Plane, fit: LineFit) {
    for line in 0..dst.lines {
        let row = fit.natural_row(line);
        if row == 0 {
            copy_row(dst.row_mut(line), source_row(src, 0));
        } else {
            let above = source_row(src, row - 1);
            let current = source_row(src, row);
            merge_rows(dst.row_mut(line), above, current);
        }
    }
}
