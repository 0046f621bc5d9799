//! # PackLab Huffman
//!
//! Huffman coding over byte symbols: an optimal prefix code is built from
//! the input's frequency table, the table is serialized as a stream header,
//! and the payload is the input with every byte replaced by its code word.
//!
//! ## Stream format
//!
//! All integers little-endian, code bits packed MSB-first:
//!
//! ```text
//! [u32 symbol_count]
//! [(u8 symbol, u32 frequency) x symbol_count]
//! [payload bits, zero-padded in the final byte]
//! ```
//!
//! The decoder rebuilds the identical tree from the header (ties between
//! equal frequencies are broken by creation order, so construction is
//! deterministic) and derives the exact output length from the frequency
//! sums, which makes the trailing zero padding unambiguous.
//!
//! ## Example
//!
//! ```rust
//! use packlab_huffman::{compress, decompress};
//!
//! let original = b"so much words wow many compression";
//! let compressed = compress(original).unwrap();
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decode;
mod encode;
pub mod tree;

pub use decode::{decompress, decompress_file};
pub use encode::{compress, compress_file};
pub use packlab_core::error::{CodecError, Result};
