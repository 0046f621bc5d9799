//! # PackLab LZ78
//!
//! LZ78 dictionary compression: the input is parsed into phrases, each
//! phrase extending a previously seen one by a single symbol. The growing
//! phrase dictionary lives in a trie whose node ids are dense insertion-order
//! integers; the decoder replays the same insertions and therefore rebuilds
//! the identical dictionary without it ever being transmitted.
//!
//! ## Stream format
//!
//! All integers little-endian:
//!
//! ```text
//! [u32 dictionary_size]
//! [(u32 parent_id, u8 symbol) x N]
//! [u32 pending_phrase_id]            (optional, 4-byte tail)
//! ```
//!
//! Id 0 is the root (the empty phrase). The header count is written as a
//! placeholder and patched via a seek once encoding finishes; the decoder
//! uses it as an integrity check against the rebuilt dictionary.
//!
//! ## Example
//!
//! ```rust
//! use packlab_lz78::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = compress(original).unwrap();
//! assert_eq!(decompress(&compressed).unwrap(), original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod encoder;

pub use decoder::{decompress, decompress_file};
pub use encoder::{compress, compress_file, compress_to};
pub use packlab_core::error::{CodecError, Result};
