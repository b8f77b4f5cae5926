/*!
    Planar frame types.
*/

use crate::{Error, FormatPlan, PixelFormat, Result, Timestamp};

/// Row pitch alignment used when allocating planes.
const PITCH_ALIGN: usize = 16;

/**
    One channel of a planar frame.

    Rows start every `pitch` bytes; only the first `width` bytes of each
    row carry pixels, the rest is padding.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane {
    /// Raw plane bytes, at least `pitch * lines` long.
    pub data: Vec<u8>,
    /// Bytes from the start of one row to the start of the next.
    pub pitch: usize,
    /// Visible bytes per row.
    pub width: usize,
    /// Number of rows.
    pub lines: usize,
}

impl Plane {
    /**
        Allocate a zeroed plane.

        Fails if `pitch` is smaller than `width`.
    */
    pub fn new(width: usize, lines: usize, pitch: usize) -> Result<Self> {
        Self::from_data(vec![0; pitch * lines], width, lines, pitch)
    }

    /**
        Allocate a zeroed plane with the pitch rounded up to the allocation
        alignment.
    */
    pub fn aligned(width: usize, lines: usize) -> Self {
        let pitch = width.next_multiple_of(PITCH_ALIGN);
        Self {
            data: vec![0; pitch * lines],
            pitch,
            width,
            lines,
        }
    }

    /**
        Wrap existing bytes as a plane.

        Fails if `pitch` is smaller than `width` or `data` cannot hold
        `lines` rows.
    */
    pub fn from_data(data: Vec<u8>, width: usize, lines: usize, pitch: usize) -> Result<Self> {
        if pitch < width {
            return Err(Error::invalid_geometry(format!(
                "pitch {pitch} is smaller than row width {width}"
            )));
        }
        if data.len() < pitch * lines {
            return Err(Error::invalid_geometry(format!(
                "{} bytes cannot hold {lines} rows of pitch {pitch}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            pitch,
            width,
            lines,
        })
    }

    /**
        Build a tightly packed plane from equal-length rows.
    */
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(width * rows.len());
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::invalid_geometry(format!(
                    "row of {} bytes in a plane {width} bytes wide",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Self::from_data(data, width, rows.len(), width)
    }

    /**
        Returns the visible bytes of row `index`.

        # Panics

        Panics if `index >= lines`.
    */
    #[inline]
    pub fn row(&self, index: usize) -> &[u8] {
        assert!(index < self.lines, "row {index} out of {}", self.lines);
        let start = index * self.pitch;
        &self.data[start..start + self.width]
    }

    /**
        Returns the visible bytes of row `index` for writing.

        # Panics

        Panics if `index >= lines`.
    */
    #[inline]
    pub fn row_mut(&mut self, index: usize) -> &mut [u8] {
        assert!(index < self.lines, "row {index} out of {}", self.lines);
        let start = index * self.pitch;
        &mut self.data[start..start + self.width]
    }

    /**
        Iterate over the visible bytes of every row.
    */
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.lines).map(move |index| self.row(index))
    }
}

/**
    Which row parity of an interlaced frame forms a field.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Even rows (0, 2, 4, ...)
    Top = 0,
    /// Odd rows (1, 3, 5, ...)
    Bottom = 1,
}

impl Field {
    /**
        Returns the row parity of this field, 0 or 1.
    */
    #[inline]
    pub const fn parity(self) -> usize {
        self as usize
    }

    /**
        Returns true if row `index` belongs to this field.
    */
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        index % 2 == self.parity()
    }
}

/**
    A planar video frame.

    Planes are stored luma first, in the order the format defines.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoFrame {
    /// Plane data.
    pub planes: Vec<Plane>,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel format of the planes.
    pub format: PixelFormat,
    /// Presentation timestamp.
    pub timestamp: Timestamp,
}

impl VideoFrame {
    /**
        Create a new video frame from existing planes.
    */
    pub fn new(
        planes: Vec<Plane>,
        width: u32,
        height: u32,
        format: PixelFormat,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            planes,
            width,
            height,
            format,
            timestamp,
        }
    }

    /**
        Allocate a zeroed frame laid out according to the format's plan.
    */
    pub fn alloc(format: PixelFormat, width: u32, height: u32, timestamp: Timestamp) -> Result<Self> {
        let plan = FormatPlan::for_format(format).ok_or(Error::UnsupportedFormat { format })?;
        let planes = plan
            .plane_dimensions(width as usize, height as usize)
            .map(|(w, h)| Plane::aligned(w, h))
            .collect();
        Ok(Self::new(planes, width, height, format, timestamp))
    }

    /**
        Check that the planes match what the declared format requires.
    */
    pub fn validate(&self) -> Result<()> {
        let format = self.format;
        let plan = FormatPlan::for_format(format).ok_or(Error::UnsupportedFormat { format })?;

        if self.planes.len() != plan.plane_count() {
            return Err(Error::invalid_geometry(format!(
                "{format} needs {} planes, frame has {}",
                plan.plane_count(),
                self.planes.len()
            )));
        }

        let dims = plan.plane_dimensions(self.width as usize, self.height as usize);
        for (index, (plane, (width, lines))) in self.planes.iter().zip(dims).enumerate() {
            if plane.width != width || plane.lines != lines {
                return Err(Error::invalid_geometry(format!(
                    "plane {index} is {}x{}, {format} at {}x{} needs {width}x{lines}",
                    plane.width, plane.lines, self.width, self.height
                )));
            }
            if plane.pitch < plane.width || plane.data.len() < plane.pitch * plane.lines {
                return Err(Error::invalid_geometry(format!(
                    "plane {index} buffer does not hold its rows"
                )));
            }
        }

        Ok(())
    }
}

// Frames are handed between the host thread and sinks
static_assertions::assert_impl_all!(VideoFrame: Send, Sync);
static_assertions::assert_impl_all!(Plane: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_rejects_short_pitch() {
        let err = Plane::new(8, 2, 4).unwrap_err();
        assert!(format!("{err}").contains("pitch 4"));
    }

    #[test]
    fn plane_rejects_short_buffer() {
        assert!(Plane::from_data(vec![0; 10], 4, 3, 4).is_err());
    }

    #[test]
    fn plane_rows_skip_padding() {
        let data = vec![1, 2, 0, 0, 3, 4, 0, 0];
        let plane = Plane::from_data(data, 2, 2, 4).unwrap();
        assert_eq!(plane.row(0), &[1, 2]);
        assert_eq!(plane.row(1), &[3, 4]);
        assert_eq!(plane.rows().count(), 2);
    }

    #[test]
    fn plane_from_rows() {
        let plane = Plane::from_rows(&[[0u8, 1], [2, 3], [4, 5]]).unwrap();
        assert_eq!(plane.width, 2);
        assert_eq!(plane.lines, 3);
        assert_eq!(plane.pitch, 2);
        assert_eq!(plane.row(2), &[4, 5]);
    }

    #[test]
    fn plane_from_ragged_rows_fails() {
        let rows: [&[u8]; 2] = [&[1, 2], &[3]];
        assert!(Plane::from_rows(&rows).is_err());
    }

    #[test]
    fn plane_aligned_pitch() {
        let plane = Plane::aligned(17, 2);
        assert_eq!(plane.pitch, 32);
        assert_eq!(plane.data.len(), 64);
    }

    #[test]
    fn field_parity() {
        assert_eq!(Field::Top.parity(), 0);
        assert_eq!(Field::Bottom.parity(), 1);
        assert!(Field::Top.contains(4));
        assert!(Field::Bottom.contains(3));
        assert!(!Field::Bottom.contains(0));
    }

    #[test]
    fn frame_alloc_matches_plan() {
        let frame = VideoFrame::alloc(PixelFormat::I422, 64, 48, Timestamp(5)).unwrap();
        assert_eq!(frame.planes.len(), 3);
        assert_eq!(frame.planes[0].lines, 48);
        assert_eq!(frame.planes[1].width, 32);
        assert_eq!(frame.planes[1].lines, 48);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn frame_alloc_unsupported_format() {
        let err = VideoFrame::alloc(PixelFormat::Nv12, 64, 48, Timestamp(0)).unwrap_err();
        assert!(err.is_unsupported_format());
    }

    #[test]
    fn frame_validate_catches_plane_mismatch() {
        let mut frame = VideoFrame::alloc(PixelFormat::I420, 16, 8, Timestamp(0)).unwrap();
        frame.planes[2] = Plane::aligned(8, 8);
        assert!(frame.validate().is_err());

        frame.planes.pop();
        assert!(frame.validate().is_err());
    }
}
