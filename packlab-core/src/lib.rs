//! # PackLab Core
//!
//! Core components for the PackLab compression studies.
//!
//! This crate provides the building blocks shared by the codec crates:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for variable-length codes
//! - [`heap`]: fixed-capacity binary min/max heap (Huffman tree building)
//! - [`trie`]: arena trie with dense insertion-order ids (LZ78 dictionary)
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Codecs                                                  │
//! │     packlab-huffman, packlab-lz77, packlab-lz78        │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     BitReader/BitWriter, Heap, Trie, CodecError        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The codecs are independent of each other; each owns its own heap, trie
//! and buffers per call. Everything is single-threaded and synchronous.
//!
//! ## Example
//!
//! ```rust
//! use packlab_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut buf = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut buf);
//!     writer.write_bits(0b1011, 4).unwrap();
//!     writer.flush().unwrap();
//! }
//! let mut reader = BitReader::new(Cursor::new(&buf));
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1011);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;
pub mod heap;
pub mod trie;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{CodecError, Result};
pub use heap::{Heap, HeapMode};
pub use trie::{ROOT_ID, Trie};
