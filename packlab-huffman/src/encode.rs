//! Huffman encoding.

use crate::tree::{Code, HuffmanTree, count_frequencies};
use packlab_core::bitstream::BitWriter;
use packlab_core::error::Result;
use std::fs;
use std::path::Path;

/// Compress `input` with Huffman coding.
///
/// Stream layout (integers little-endian):
///
/// ```text
/// [u32 symbol_count][(u8 symbol, u32 frequency) x symbol_count][code bits]
/// ```
///
/// Code bits are packed MSB-first, and the final partial byte is padded with
/// zero bits. The header alone lets a decoder rebuild the identical tree and
/// derive the exact payload length, so padding never decodes as data.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let freq = count_frequencies(input)?;
    let tree = HuffmanTree::from_frequencies(&freq)?;
    let codes = tree.codes();

    let mut writer = BitWriter::new(Vec::new());

    // Header: distinct symbol count, then (symbol, frequency) pairs in
    // ascending symbol order.
    let distinct = freq.iter().filter(|&&f| f > 0).count() as u32;
    writer.write_bytes(&distinct.to_le_bytes())?;
    for (symbol, &f) in freq.iter().enumerate() {
        if f > 0 {
            writer.write_bytes(&[symbol as u8])?;
            writer.write_bytes(&f.to_le_bytes())?;
        }
    }

    // Payload: replace each byte with its code word.
    for &byte in input {
        let code = codes[byte as usize]
            .expect("BUG: every scanned symbol has a non-zero frequency and therefore a code");
        write_code(&mut writer, code)?;
    }

    // into_inner flushes the final partial byte.
    writer.into_inner()
}

/// Write one code word MSB-first, splitting words longer than 32 bits.
///
/// Code length is bounded by ~59 bits for 32-bit frequencies (Fibonacci-like
/// worst case), which exceeds a single `write_bits` call's limit only in the
/// upper half.
fn write_code<W: std::io::Write>(writer: &mut BitWriter<W>, code: Code) -> Result<()> {
    if code.len > 32 {
        writer.write_bits(code.bits >> 32, code.len - 32)?;
        writer.write_bits(code.bits & 0xFFFF_FFFF, 32)
    } else {
        writer.write_bits(code.bits, code.len)
    }
}

/// Compress the file at `input_path` into `output_path`.
///
/// Files are read and written whole; handles are released on every exit
/// path.
pub fn compress_file(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<()> {
    let input = fs::read(input_path)?;
    let compressed = compress(&input)?;
    fs::write(output_path, compressed)?;
    Ok(())
}
