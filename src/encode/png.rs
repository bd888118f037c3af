//! PNG container assembly.
//!
//! Serializes the fixed 8-byte signature followed by length-prefixed,
//! CRC-checksummed, typed chunks: IHDR, a single IDAT holding the
//! compressed pixel stream, and the empty IEND terminator. All multi-byte
//! fields are big-endian.

use crate::encode::deflate::{self, Strategy};
use crate::image::raster::ImageDescriptor;
use crate::utils::error::{PngError, Result};
use byteorder::{BigEndian, WriteBytesExt};
use log::{debug, info};
use std::io::Write;

/// The 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// 8 bits per sample.
const BIT_DEPTH: u8 = 8;
/// Color type 2, truecolor without alpha.
const COLOR_TYPE_RGB: u8 = 2;

/// A single typed, checksummed container chunk.
///
/// Chunks are immutable value objects; the length prefix and CRC are
/// derived at serialization time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    tag: [u8; 4],
    payload: Vec<u8>,
}

impl Chunk {
    #[inline]
    pub fn new(tag: [u8; 4], payload: Vec<u8>) -> Self {
        Chunk { tag, payload }
    }

    #[inline]
    pub fn tag(&self) -> [u8; 4] {
        self.tag
    }

    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// CRC-32 (IEEE polynomial, zlib conventions) over tag and payload.
    pub fn crc(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&self.tag);
        hasher.update(&self.payload);
        hasher.finalize()
    }

    /// Serializes the chunk as big-endian payload length, 4-byte tag,
    /// payload, big-endian CRC.
    ///
    /// Unreachable for supported image sizes, but a payload longer than the
    /// 32-bit length field can express is still rejected rather than
    /// silently truncated.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let len = u32::try_from(self.payload.len()).map_err(|_| PngError::ChunkTooLarge {
            tag: String::from_utf8_lossy(&self.tag).into_owned(),
            len: self.payload.len(),
        })?;

        writer.write_u32::<BigEndian>(len)?;
        writer.write_all(&self.tag)?;
        writer.write_all(&self.payload)?;
        writer.write_u32::<BigEndian>(self.crc())?;

        debug!(
            "wrote chunk {} with {} payload bytes",
            String::from_utf8_lossy(&self.tag),
            len
        );
        Ok(())
    }
}

/// Builds the 13-byte IHDR payload: width, height, bit depth, color type,
/// compression method, filter method, interlace method.
fn header_chunk(descriptor: &ImageDescriptor) -> Result<Chunk> {
    let mut payload = Vec::with_capacity(13);
    payload.write_u32::<BigEndian>(descriptor.width())?;
    payload.write_u32::<BigEndian>(descriptor.height())?;
    payload.write_u8(BIT_DEPTH)?;
    payload.write_u8(COLOR_TYPE_RGB)?;
    payload.write_u8(0)?; // compression method: deflate
    payload.write_u8(0)?; // filter method: adaptive per scanline
    payload.write_u8(0)?; // interlace method: none
    Ok(Chunk::new(*b"IHDR", payload))
}

/// Encodes the descriptor into a complete PNG byte stream.
///
/// The output is fully determined by the descriptor and strategy:
/// signature, IHDR, one IDAT carrying the raw-deflate payload, IEND.
pub fn encode(descriptor: &ImageDescriptor, strategy: Strategy) -> Result<Vec<u8>> {
    let raw = descriptor.raw_pixel_stream();
    let compressed = deflate::compress_stream(&raw, strategy)?;
    info!(
        "encoding {}x{} image, {} raw bytes, {} compressed",
        descriptor.width(),
        descriptor.height(),
        raw.len(),
        compressed.len()
    );

    // Signature plus three chunks, each with 12 bytes of framing.
    let mut out = Vec::with_capacity(8 + (13 + 12) + (compressed.len() + 12) + 12);
    out.write_all(&PNG_SIGNATURE)?;
    header_chunk(descriptor)?.write_to(&mut out)?;
    Chunk::new(*b"IDAT", compressed).write_to(&mut out)?;
    Chunk::new(*b"IEND", Vec::new()).write_to(&mut out)?;
    Ok(out)
}

/// Writes an encoded stream to its output sink as one scoped write.
pub fn write_to_sink<W: Write>(bytes: &[u8], mut sink: W) -> Result<()> {
    sink.write_all(bytes)?;
    sink.flush()?;
    Ok(())
}
