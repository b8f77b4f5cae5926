/*!
    Pixel formats and their plane layouts.
*/

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/**
    Video pixel formats, identified by their four-character tags.

    Only the planar YUV formats have a [`FormatPlan`]; the packed and
    semi-planar formats are listed so hosts can describe what they have
    and get a clean "unsupported" answer instead of a parse failure.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PixelFormat {
    /// Planar YUV 4:2:0, Y then U then V (also tagged `IYUV`)
    I420,
    /// Planar YUV 4:2:0, Y then V then U
    Yv12,
    /// Planar YUV 4:2:2
    I422,
    /// Semi-planar YUV 4:2:0 with interleaved chroma
    Nv12,
    /// Packed YUV 4:2:2
    Yuy2,
    /// Packed BGRA, 32bpp
    Bgra,
}

impl PixelFormat {
    /**
        Returns the canonical four-character tag.
    */
    pub const fn fourcc(self) -> &'static str {
        match self {
            Self::I420 => "I420",
            Self::Yv12 => "YV12",
            Self::I422 => "I422",
            Self::Nv12 => "NV12",
            Self::Yuy2 => "YUY2",
            Self::Bgra => "BGRA",
        }
    }

    /**
        Returns the planar chroma family, or None for formats we cannot
        address plane by plane.
    */
    pub const fn family(self) -> Option<ChromaFamily> {
        match self {
            Self::I420 | Self::Yv12 => Some(ChromaFamily::Planar420),
            Self::I422 => Some(ChromaFamily::Planar422),
            Self::Nv12 | Self::Yuy2 | Self::Bgra => None,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fourcc())
    }
}

impl FromStr for PixelFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "I420" | "IYUV" => Ok(Self::I420),
            "YV12" => Ok(Self::Yv12),
            "I422" => Ok(Self::I422),
            "NV12" => Ok(Self::Nv12),
            "YUY2" => Ok(Self::Yuy2),
            "BGRA" => Ok(Self::Bgra),
            _ => Err(Error::unknown_format(s)),
        }
    }
}

/**
    The two planar chroma subsampling families.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChromaFamily {
    /// Chroma halved horizontally and vertically
    Planar420,
    /// Chroma halved horizontally only
    Planar422,
}

impl ChromaFamily {
    /**
        Returns the (horizontal, vertical) chroma subsampling shifts.
    */
    pub const fn chroma_shift(self) -> (u32, u32) {
        match self {
            Self::Planar420 => (1, 1),
            Self::Planar422 => (1, 0),
        }
    }
}

/**
    Addressing rules for one plane of a planar format.

    Shifts are powers of two: a plane with `y_shift == 1` has half as many
    lines as the frame is tall, rounded up. `output_y_shift` is the vertical
    shift the same plane has in the format the deinterlacer writes, which
    differs from `y_shift` only for 4:2:2 chroma.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaneLayout {
    pub x_shift: u32,
    pub y_shift: u32,
    pub output_y_shift: u32,
}

impl PlaneLayout {
    /**
        Returns the row width in bytes for a frame of the given width.
    */
    pub const fn width(self, frame_width: usize) -> usize {
        subsample(frame_width, self.x_shift)
    }

    /**
        Returns the line count for a frame of the given height.
    */
    pub const fn lines(self, frame_height: usize) -> usize {
        subsample(frame_height, self.y_shift)
    }
}

const fn subsample(len: usize, shift: u32) -> usize {
    (len + (1 << shift) - 1) >> shift
}

/**
    Plane count and per-plane addressing for a planar pixel format.

    Every deinterlacing algorithm walks the planes listed here instead of
    matching on format tags itself.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatPlan {
    format: PixelFormat,
    family: ChromaFamily,
    planes: [PlaneLayout; 3],
}

impl FormatPlan {
    /**
        Build the plan for a format, or None if the format is not planar YUV.
    */
    pub fn for_format(format: PixelFormat) -> Option<Self> {
        let family = format.family()?;
        let (x_shift, y_shift) = family.chroma_shift();

        let luma = PlaneLayout {
            x_shift: 0,
            y_shift: 0,
            output_y_shift: 0,
        };
        // Output is always in the 4:2:0 family
        let chroma = PlaneLayout {
            x_shift,
            y_shift,
            output_y_shift: 1,
        };

        Some(Self {
            format,
            family,
            planes: [luma, chroma, chroma],
        })
    }

    /**
        Returns the chroma family of the format.
    */
    pub fn family(&self) -> ChromaFamily {
        self.family
    }

    /**
        Returns the layout of every plane, luma first.
    */
    pub fn planes(&self) -> &[PlaneLayout] {
        &self.planes
    }

    /**
        Returns the number of planes.
    */
    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    /**
        Returns the format the deinterlacer writes for this input format.

        4:2:0 formats are passed through; 4:2:2 is narrowed to I420.
    */
    pub fn output_format(&self) -> PixelFormat {
        match self.family {
            ChromaFamily::Planar420 => self.format,
            ChromaFamily::Planar422 => PixelFormat::I420,
        }
    }

    /**
        Returns (row width, line count) of every plane for a frame of the
        given dimensions.
    */
    pub fn plane_dimensions(
        &self,
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.planes
            .iter()
            .map(move |layout| (layout.width(width), layout.lines(height)))
    }
}
