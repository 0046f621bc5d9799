//! # PackLab LZ77
//!
//! LZ77 sliding-window compression: repeated runs are replaced by
//! back-references into a fixed-size window of recently emitted bytes.
//!
//! ## Stream format
//!
//! ```text
//! [up to WINDOW_SIZE raw seed bytes]
//! [(u8 back_offset, u8 length, u8 next_byte) x N]
//! ```
//!
//! The first window of input is stored verbatim so encoder and decoder start
//! from the same state. Each triple encodes the longest look-ahead run that
//! repeats a window run (greedy-longest, first offset wins), then the next
//! literal byte; `(0, 0, byte)` is a bare literal. Inputs no longer than one
//! window are stored verbatim with no triples at all.
//!
//! ## Example
//!
//! ```rust
//! use packlab_lz77::{compress, decompress};
//!
//! let original = b"abcabcabcabc".repeat(20);
//! let compressed = compress(&original).unwrap();
//! assert!(compressed.len() < original.len());
//! assert_eq!(decompress(&compressed).unwrap(), original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decode;
mod encode;

pub use decode::{decompress, decompress_file};
pub use encode::{compress, compress_file};
pub use packlab_core::error::{CodecError, Result};

/// Size of the sliding window of already-emitted bytes.
pub const WINDOW_SIZE: usize = 100;

/// Size of the look-ahead buffer of upcoming bytes.
pub const LOOK_AHEAD_SIZE: usize = 120;

/// Combined buffer size; the window immediately precedes the look-ahead.
pub(crate) const BUFFER_SIZE: usize = WINDOW_SIZE + LOOK_AHEAD_SIZE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_repetitive() {
        let original = b"abcabcabcabc".repeat(100);
        let compressed = compress(&original).unwrap();
        assert!(compressed.len() < original.len());
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_empty_and_short() {
        for input in [&b""[..], b"A", b"AB", b"ABABABABAB"] {
            let compressed = compress(input).unwrap();
            assert_eq!(decompress(&compressed).unwrap(), input);
        }
    }

    #[test]
    fn test_roundtrip_window_boundary_sizes() {
        for size in [
            WINDOW_SIZE - 1,
            WINDOW_SIZE,
            WINDOW_SIZE + 1,
            BUFFER_SIZE - 1,
            BUFFER_SIZE,
            BUFFER_SIZE + 1,
        ] {
            let original: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
            let compressed = compress(&original).unwrap();
            assert_eq!(decompress(&compressed).unwrap(), original, "size {size}");
        }
    }

    #[test]
    fn test_roundtrip_no_matches() {
        // 256 distinct values, longer than one buffer: mostly literals.
        let original: Vec<u8> = (0..=255u8).collect();
        let compressed = compress(&original).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), original);
    }
}
