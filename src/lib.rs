//! # PNG Encoder Library
//!
//! A minimal encoder that builds a valid truecolor PNG for a single solid
//! color from first principles: scanline serialization, raw-deflate
//! compression of the pixel stream, and chunked container assembly with
//! per-chunk CRC-32 checksums.
//!
//! This library is organized into several modules:
//! - `utils`: Error handling
//! - `image`: Image descriptor and scanline serialization
//! - `encode`: Deflate compression and PNG container assembly
//!
//! The whole encode is one pure computation: descriptor in, bytes out.
//! Writing those bytes anywhere is left to [`write_to_sink`].

// Re-export commonly used types at the crate root
pub use encode::deflate::Strategy;
pub use encode::png::{PNG_SIGNATURE, encode, write_to_sink};
pub use image::raster::ImageDescriptor;
pub use utils::error::{PngError, Result};

pub mod utils {
    pub mod error;
}

pub mod image {
    pub mod raster;
}

pub mod encode {
    pub mod deflate;
    pub mod png;
}
