//! Image descriptor and scanline serialization.
//!
//! Produces the raw, uncompressed byte stream the deflate stage consumes:
//! one filter-marker byte per row followed by the packed RGB pixels.

use crate::utils::error::{PngError, Result};
use log::debug;

/// Bytes per pixel for 8-bit truecolor without alpha.
pub const BYTES_PER_PIXEL: usize = 3;

/// Filter type 0 ("none"). This encoder never filters.
const FILTER_NONE: u8 = 0;

/// Describes the single solid-color image to encode.
///
/// Validated on construction; a descriptor that exists is always encodable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDescriptor {
    width: u32,
    height: u32,
    color: [u8; 3],
}

impl ImageDescriptor {
    /// Creates a descriptor, rejecting zero width or height before any
    /// pixel data is produced.
    pub fn new(width: u32, height: u32, color: [u8; 3]) -> Result<Self> {
        if width == 0 {
            return Err(PngError::InvalidDimension {
                axis: "width",
                value: width,
            });
        }
        if height == 0 {
            return Err(PngError::InvalidDimension {
                axis: "height",
                value: height,
            });
        }
        Ok(ImageDescriptor {
            width,
            height,
            color,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    /// Length of one serialized scanline: filter byte plus packed pixels.
    #[inline]
    pub fn scanline_len(&self) -> usize {
        1 + self.width as usize * BYTES_PER_PIXEL
    }

    /// Serializes the raw pixel stream: for each of `height` rows, one
    /// filter byte (0, "none") followed by `width` copies of the RGB color.
    ///
    /// Rows are emitted top to bottom. The decoder reconstructs rows in
    /// this order, so it must not change.
    pub fn raw_pixel_stream(&self) -> Vec<u8> {
        let mut stream = Vec::with_capacity(self.height as usize * self.scanline_len());
        for _ in 0..self.height {
            stream.push(FILTER_NONE);
            for _ in 0..self.width {
                stream.extend_from_slice(&self.color);
            }
        }
        debug!("serialized {} scanlines, {} bytes", self.height, stream.len());
        stream
    }
}
