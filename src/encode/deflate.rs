//! Raw-deflate compression of the pixel stream.
//!
//! The container checksums each chunk itself, so the compressed payload is
//! embedded as a bare deflate bit stream with no zlib header or Adler-32
//! trailer (negative window bits).

use crate::utils::error::{PngError, Result};
use log::debug;
use miniz_oxide::deflate::core::deflate_flags::TDEFL_FORCE_ALL_STATIC_BLOCKS;
use miniz_oxide::deflate::core::{
    CompressionStrategy, CompressorOxide, TDEFLFlush, TDEFLStatus, compress,
    create_comp_flags_from_zip_params,
};

/// Raw deflate, no zlib wrapper.
const RAW_WINDOW_BITS: i32 = -15;

/// Deflate encoding strategy for the image-data payload.
///
/// Both strategies yield streams any raw-deflate decompressor accepts and
/// both reproduce the input exactly on inflation; their compressed bytes are
/// expected to differ for the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Entropy coding only, with the deflate format's predefined Huffman
    /// tables: no LZ77 match search and no dynamic code-table transmission.
    EntropyOnly,
    /// Full LZ77 matching with the compressor's own choice of fixed or
    /// dynamic Huffman tables per block.
    Adaptive,
}

impl Strategy {
    fn comp_flags(self) -> u32 {
        match self {
            // HuffmanOnly disables the match search; forcing static blocks
            // keeps the code tables fixed instead of per-block dynamic.
            Strategy::EntropyOnly => create_comp_flags_from_zip_params(
                9,
                RAW_WINDOW_BITS,
                CompressionStrategy::HuffmanOnly as i32,
            ) | TDEFL_FORCE_ALL_STATIC_BLOCKS,
            Strategy::Adaptive => create_comp_flags_from_zip_params(
                6,
                RAW_WINDOW_BITS,
                CompressionStrategy::Default as i32,
            ),
        }
    }
}

/// Compresses `data` into a raw deflate stream using the given strategy.
pub fn compress_stream(data: &[u8], strategy: Strategy) -> Result<Vec<u8>> {
    let mut compressor = CompressorOxide::new(strategy.comp_flags());
    let mut output = vec![0u8; data.len().max(64)];
    let mut in_pos = 0;
    let mut out_pos = 0;

    loop {
        let (status, bytes_in, bytes_out) = compress(
            &mut compressor,
            &data[in_pos..],
            &mut output[out_pos..],
            TDEFLFlush::Finish,
        );
        in_pos += bytes_in;
        out_pos += bytes_out;

        match status {
            TDEFLStatus::Done => {
                output.truncate(out_pos);
                debug!(
                    "deflated {} bytes to {} with {:?}",
                    data.len(),
                    output.len(),
                    strategy
                );
                return Ok(output);
            }
            TDEFLStatus::Okay => {
                // Output buffer filled before the stream finished; grow it.
                if output.len() - out_pos < 64 {
                    let new_len = output.len().saturating_mul(2);
                    output.resize(new_len, 0);
                }
            }
            status => {
                return Err(PngError::EncodingFailure(format!(
                    "compressor returned {status:?}"
                )));
            }
        }
    }
}
