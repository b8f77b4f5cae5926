/*!
    Linear interpolation of the missing field.
*/

use video_types::{Field, Plane, VideoFrame};

use super::field::field_plane;
use super::{LineFit, copy_row, for_each_plane, merge_rows, source_row};
use crate::mode::OutputHeight;

/**
    Rebuild a full-height frame from `field`.

    Rows of the kept field are copied. Every other row is the average of
    its neighbours above and below, which both belong to the kept field.
    A row at the top or bottom edge without both neighbours is copied from
    the input instead. 4:2:2 chroma, which the output halves, takes the
    kept field's own chroma rows.
*/
pub fn linear(src: &VideoFrame, dst: &mut VideoFrame, field: Field) {
    for_each_plane(src, dst, OutputHeight::Full, |src, dst, fit| match fit {
        LineFit::Halved => field_plane(src, dst, LineFit::Exact, field),
        _ => linear_plane(src, dst, fit, field),
    });
}

fn linear_plane(src: &Plane, dst: &mut Plane, fit: LineFit, field: Field) {
    for line in 0..dst.lines {
        let row = fit.natural_row(line);
        let interior = row >= 1 && row + 1 < src.lines;
        if field.contains(row) || !interior {
            copy_row(dst.row_mut(line), source_row(src, row));
        } else {
            let above = source_row(src, row - 1);
            let below = source_row(src, row + 1);
            merge_rows(dst.row_mut(line), above, below);
        }
    }
}

#[cfg(test)]
mod tests {
    use video_types::{PixelFormat, Timestamp};

    use super::*;
    use crate::render::testing::{blank_frame, column_frame, merged, patterned_frame, rows};

    #[test]
    fn linear_top_of_six_rows() {
        let src = column_frame(&[&[0], &[100], &[20], &[100], &[40], &[100]]);
        let mut dst = blank_frame(1, 6);
        linear(&src, &mut dst, Field::Top);
        assert_eq!(
            rows(&dst.planes[0]),
            vec![vec![0], vec![10], vec![20], vec![30], vec![40], vec![100]]
        );
    }

    #[test]
    fn linear_bottom_of_six_rows() {
        let src = column_frame(&[&[100], &[10], &[100], &[30], &[100], &[50]]);
        let mut dst = blank_frame(1, 6);
        linear(&src, &mut dst, Field::Bottom);
        assert_eq!(
            rows(&dst.planes[0]),
            vec![vec![100], vec![10], vec![20], vec![30], vec![40], vec![50]]
        );
    }

    #[test]
    fn linear_interior_rows_merge_same_parity_neighbours() {
        let src = patterned_frame(PixelFormat::I420, 32, 16);
        for field in [Field::Top, Field::Bottom] {
            let mut dst = VideoFrame::alloc(PixelFormat::I420, 32, 16, Timestamp(0)).unwrap();
            linear(&src, &mut dst, field);

            for (src, dst) in src.planes.iter().zip(&dst.planes) {
                let last = dst.lines - 1;
                assert_eq!(dst.lines, src.lines);
                assert_eq!(dst.row(0), src.row(0));
                assert_eq!(dst.row(last), src.row(last));
                for i in 1..last {
                    if field.contains(i) {
                        assert_eq!(dst.row(i), src.row(i));
                    } else {
                        assert_eq!(dst.row(i), merged(src.row(i - 1), src.row(i + 1)));
                    }
                }
            }
        }
    }

    #[test]
    fn linear_of_422_keeps_field_chroma() {
        let src = patterned_frame(PixelFormat::I422, 8, 8);
        let mut dst = VideoFrame::alloc(PixelFormat::I420, 8, 8, Timestamp(0)).unwrap();
        linear(&src, &mut dst, Field::Bottom);

        assert_eq!(dst.planes[0].lines, 8);
        assert_eq!(dst.planes[0].row(1), src.planes[0].row(1));

        let chroma = &dst.planes[1];
        assert_eq!(chroma.lines, 4);
        for i in 0..chroma.lines {
            assert_eq!(chroma.row(i), src.planes[1].row(2 * i + 1));
        }
    }

    #[test]
    fn linear_of_five_rows() {
        let src = column_frame(&[&[0], &[10], &[20], &[30], &[40]]);

        let mut dst = blank_frame(1, 5);
        linear(&src, &mut dst, Field::Top);
        assert_eq!(
            rows(&dst.planes[0]),
            vec![vec![0], vec![10], vec![20], vec![30], vec![40]]
        );

        let src = column_frame(&[&[100], &[10], &[100], &[30], &[100]]);
        let mut dst = blank_frame(1, 5);
        linear(&src, &mut dst, Field::Bottom);
        assert_eq!(
            rows(&dst.planes[0]),
            vec![vec![100], vec![10], vec![20], vec![30], vec![100]]
        );
    }

    #[test]
    fn linear_of_odd_height_frame() {
        let src = patterned_frame(PixelFormat::I420, 6, 7);
        for field in [Field::Top, Field::Bottom] {
            let mut dst = VideoFrame::alloc(PixelFormat::I420, 6, 7, Timestamp(0)).unwrap();
            linear(&src, &mut dst, field);

            for (src, dst) in src.planes.iter().zip(&dst.planes) {
                let last = dst.lines - 1;
                assert_eq!(dst.lines, src.lines);
                assert_eq!(dst.row(0), src.row(0));
                assert_eq!(dst.row(last), src.row(last));
                for i in 1..last {
                    if field.contains(i) {
                        assert_eq!(dst.row(i), src.row(i));
                    } else {
                        assert_eq!(dst.row(i), merged(src.row(i - 1), src.row(i + 1)));
                    }
                }
            }
        }
    }

    #[test]
    fn linear_of_422_interpolates_full_luma() {
        let src = patterned_frame(PixelFormat::I422, 8, 8);
        for field in [Field::Top, Field::Bottom] {
            let mut dst = VideoFrame::alloc(PixelFormat::I420, 8, 8, Timestamp(0)).unwrap();
            linear(&src, &mut dst, field);

            let (src, dst) = (&src.planes[0], &dst.planes[0]);
            assert_eq!(dst.lines, 8);
            for i in 0..dst.lines {
                if field.contains(i) || i == 0 || i == 7 {
                    assert_eq!(dst.row(i), src.row(i), "row {i}");
                } else {
                    assert_eq!(dst.row(i), merged(src.row(i - 1), src.row(i + 1)), "row {i}");
                }
            }
        }
    }
}
