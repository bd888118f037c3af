use thiserror::Error;

/// Main error type for the PNG encoder library.
///
/// Every variant carries enough context to diagnose the failure without
/// inspecting output bytes: the offending dimension value, the offending
/// chunk tag, or the underlying I/O error.
#[derive(Error, Debug)]
pub enum PngError {
    /// A zero width or height was provided.
    #[error("invalid {axis}: {value} (must be at least 1)")]
    InvalidDimension { axis: &'static str, value: u32 },

    /// The deflate compressor could not complete.
    #[error("deflate encoding failed: {0}")]
    EncodingFailure(String),

    /// A chunk payload does not fit the 32-bit length field.
    #[error("chunk '{tag}' payload of {len} bytes overflows the 32-bit length field")]
    ChunkTooLarge { tag: String, len: usize },

    /// The output sink rejected the write.
    #[error("failed to write to output sink: {0}")]
    SinkWriteFailure(#[from] std::io::Error),
}

/// A specialized `Result` type for PNG encoding operations.
pub type Result<T> = std::result::Result<T, PngError>;
