/*!
    Mean of each row pair.
*/

use video_types::{Plane, VideoFrame};

use super::{LineFit, for_each_plane, merge_rows, source_row};
use crate::mode::OutputHeight;

/**
    Average input rows `2i` and `2i + 1` into output row `i`.
*/
pub fn mean(src: &VideoFrame, dst: &mut VideoFrame) {
    for_each_plane(src, dst, OutputHeight::Half, mean_plane);
}

pub(super) fn mean_plane(src: &Plane, dst: &mut Plane, fit: LineFit) {
    for line in 0..dst.lines {
        let row = fit.natural_row(line);
        let upper = source_row(src, 2 * row);
        let lower = source_row(src, 2 * row + 1);
        merge_rows(dst.row_mut(line), upper, lower);
    }
}

#[cfg(test)]
mod tests {
    use video_types::{PixelFormat, Timestamp};

    use super::*;
    use crate::render::testing::{blank_frame, column_frame, merged, patterned_frame, rows};

    #[test]
    fn mean_of_four_rows() {
        let src = column_frame(&[&[0], &[10], &[20], &[30]]);
        let mut dst = blank_frame(1, 2);
        mean(&src, &mut dst);
        assert_eq!(rows(&dst.planes[0]), vec![vec![5], vec![25]]);
    }

    #[test]
    fn mean_merges_row_pairs_in_every_plane() {
        let src = patterned_frame(PixelFormat::Yv12, 40, 20);
        let mut dst = VideoFrame::alloc(PixelFormat::Yv12, 40, 10, Timestamp(0)).unwrap();
        mean(&src, &mut dst);

        for (src, dst) in src.planes.iter().zip(&dst.planes) {
            assert_eq!(dst.lines, src.lines / 2);
            for i in 0..dst.lines {
                assert_eq!(dst.row(i), merged(src.row(2 * i), src.row(2 * i + 1)));
            }
        }
    }

    #[test]
    fn mean_of_422_doubles_merged_luma() {
        let src = patterned_frame(PixelFormat::I422, 8, 4);
        let mut dst = VideoFrame::alloc(PixelFormat::I420, 8, 4, Timestamp(0)).unwrap();
        mean(&src, &mut dst);

        let luma = &src.planes[0];
        let first = merged(luma.row(0), luma.row(1));
        let second = merged(luma.row(2), luma.row(3));
        assert_eq!(rows(&dst.planes[0]), vec![first.clone(), first, second.clone(), second]);

        let chroma = &src.planes[1];
        assert_eq!(
            rows(&dst.planes[1]),
            vec![merged(chroma.row(0), chroma.row(1)), merged(chroma.row(2), chroma.row(3))]
        );
    }

    #[test]
    fn mean_of_odd_height_pairs_last_row_with_itself() {
        let src = column_frame(&[&[0], &[10], &[20], &[30], &[40]]);
        let mut dst = blank_frame(1, 3);
        mean(&src, &mut dst);
        assert_eq!(rows(&dst.planes[0]), vec![vec![5], vec![25], vec![40]]);
    }

    #[test]
    fn mean_of_odd_height_frame() {
        let src = patterned_frame(PixelFormat::I420, 6, 7);
        let mut dst = VideoFrame::alloc(PixelFormat::I420, 6, 3, Timestamp(0)).unwrap();
        mean(&src, &mut dst);

        for (src, dst) in src.planes.iter().zip(&dst.planes) {
            for i in 0..dst.lines {
                let lower = (2 * i + 1).min(src.lines - 1);
                assert_eq!(dst.row(i), merged(src.row(2 * i), src.row(lower)));
            }
        }
    }
}
