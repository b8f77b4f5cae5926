/*!
    Raw planar YUV files: planes stored back to back, rows tightly packed.
*/

use std::io::{self, ErrorKind, Read, Write};

use anyhow::{Context, Result, bail};
use video_deinterlace::{FormatPlan, PixelFormat, Plane, Timestamp, VideoFrame};

/**
    Reads consecutive frames of a fixed format and size.
*/
pub struct RawReader<R> {
    inner: R,
    format: PixelFormat,
    width: u32,
    height: u32,
    planes: Vec<(usize, usize)>,
}

impl<R: Read> RawReader<R> {
    pub fn new(inner: R, format: PixelFormat, width: u32, height: u32) -> Result<Self> {
        let plan = FormatPlan::for_format(format)
            .with_context(|| format!("{format} is not a planar format"))?;
        let planes = plan
            .plane_dimensions(width as usize, height as usize)
            .collect();
        Ok(Self {
            inner,
            format,
            width,
            height,
            planes,
        })
    }

    /**
        Returns the number of bytes one frame occupies in the file.
    */
    pub fn frame_size(&self) -> usize {
        self.planes.iter().map(|(w, h)| w * h).sum()
    }

    /**
        Read the next frame, or None at the end of the file.

        A file ending partway through a frame is an error.
    */
    pub fn read_frame(&mut self, timestamp: Timestamp) -> Result<Option<VideoFrame>> {
        let size = self.frame_size();
        let mut buf = vec![0; size];
        let filled = read_full(&mut self.inner, &mut buf).context("reading input frame")?;
        if filled == 0 {
            return Ok(None);
        }
        if filled < size {
            bail!("truncated frame: {filled} of {size} bytes");
        }

        let mut planes = Vec::with_capacity(self.planes.len());
        let mut offset = 0;
        for &(width, lines) in &self.planes {
            let len = width * lines;
            planes.push(Plane::from_data(
                buf[offset..offset + len].to_vec(),
                width,
                lines,
                width,
            )?);
            offset += len;
        }

        Ok(Some(VideoFrame::new(
            planes,
            self.width,
            self.height,
            self.format,
            timestamp,
        )))
    }
}

/**
    Fill `buf` as far as the reader allows, returning the byte count.
*/
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/**
    Write the visible rows of every plane, dropping pitch padding.
*/
pub fn write_frame<W: Write>(out: &mut W, frame: &VideoFrame) -> io::Result<()> {
    for plane in &frame.planes {
        for row in plane.rows() {
            out.write_all(row)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_frames_until_end() {
        // 4x2 I420: 8 luma bytes, 2 + 2 chroma bytes
        let data: Vec<u8> = (0..24).collect();
        let mut reader = RawReader::new(Cursor::new(data), PixelFormat::I420, 4, 2).unwrap();
        assert_eq!(reader.frame_size(), 12);

        let first = reader.read_frame(Timestamp(1)).unwrap().unwrap();
        assert_eq!(first.planes[0].row(1), &[4, 5, 6, 7]);
        assert_eq!(first.planes[2].row(0), &[10, 11]);
        assert_eq!(first.timestamp, Timestamp(1));
        assert!(first.validate().is_ok());

        let second = reader.read_frame(Timestamp(2)).unwrap().unwrap();
        assert_eq!(second.planes[0].row(0), &[12, 13, 14, 15]);

        assert!(reader.read_frame(Timestamp(3)).unwrap().is_none());
    }

    #[test]
    fn truncated_frame_is_an_error() {
        let mut reader = RawReader::new(Cursor::new(vec![0u8; 7]), PixelFormat::I420, 4, 2).unwrap();
        let err = reader.read_frame(Timestamp(0)).unwrap_err();
        assert!(err.to_string().contains("truncated frame"));
    }

    #[test]
    fn packed_formats_are_rejected() {
        assert!(RawReader::new(Cursor::new(Vec::new()), PixelFormat::Yuy2, 4, 2).is_err());
    }

    #[test]
    fn write_frame_drops_padding() {
        let mut frame = VideoFrame::alloc(PixelFormat::I420, 2, 2, Timestamp(0)).unwrap();
        frame.planes[0].row_mut(1).copy_from_slice(&[7, 8]);
        assert!(frame.planes[0].pitch > 2);

        let mut out = Vec::new();
        write_frame(&mut out, &frame).unwrap();
        assert_eq!(out, vec![0, 0, 7, 8, 0, 0]);
    }
}
