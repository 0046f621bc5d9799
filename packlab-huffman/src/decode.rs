//! Huffman decoding.

use crate::tree::{FrequencyTable, HuffmanTree, SYMBOL_COUNT, total_symbols};
use packlab_core::bitstream::BitReader;
use packlab_core::error::{CodecError, Result};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Decompress a Huffman stream produced by [`crate::compress`].
///
/// The frequency table from the header rebuilds the identical tree (the
/// tie-break rule makes construction a pure function of the table), and the
/// sum of the frequencies gives the exact output length. Decoding walks the
/// tree bit by bit (`0` descends left, `1` right), emitting a symbol and
/// resetting to the root at each leaf, and stops once the expected length is
/// reached, so the final byte's zero padding is never interpreted as data.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(Cursor::new(data));

    let freq = read_header(&mut reader)?;
    let total = total_symbols(&freq);
    if total == 0 {
        return Ok(Vec::new());
    }

    let tree = HuffmanTree::from_frequencies(&freq)?;
    let root = tree
        .root()
        .ok_or_else(|| CodecError::invalid_header("no symbols in frequency table"))?;

    // The header is untrusted: cap the preallocation by what the payload
    // could possibly encode (every symbol costs at least one bit), so an
    // overstated frequency sum cannot demand a huge reservation up front.
    let mut output = Vec::with_capacity(total.min(8 * data.len() as u64) as usize);

    // Degenerate single-symbol tree: the encoder wrote one bit per symbol.
    if let Some(symbol) = tree.leaf_symbol(root) {
        for _ in 0..total {
            reader.read_bit()?;
            output.push(symbol);
        }
        return Ok(output);
    }

    let mut node = root;
    while (output.len() as u64) < total {
        let bit = reader.read_bit()?;
        node = tree.step(node, bit).ok_or_else(|| {
            CodecError::corrupted(reader.bit_position() / 8, "dangling Huffman tree walk")
        })?;

        if let Some(symbol) = tree.leaf_symbol(node) {
            output.push(symbol);
            node = root;
        }
    }

    Ok(output)
}

/// Read the `[u32 count][(u8 symbol, u32 frequency) x count]` header.
fn read_header<R: std::io::Read>(reader: &mut BitReader<R>) -> Result<FrequencyTable> {
    let mut count_bytes = [0u8; 4];
    reader.read_bytes(&mut count_bytes)?;
    let count = u32::from_le_bytes(count_bytes);

    if count as usize > SYMBOL_COUNT {
        return Err(CodecError::invalid_header(format!(
            "symbol count {count} exceeds alphabet size {SYMBOL_COUNT}"
        )));
    }

    let mut freq = [0u32; SYMBOL_COUNT];
    for _ in 0..count {
        let mut entry = [0u8; 5];
        reader.read_bytes(&mut entry)?;
        let symbol = entry[0];
        let f = u32::from_le_bytes([entry[1], entry[2], entry[3], entry[4]]);

        if f == 0 {
            return Err(CodecError::invalid_header(format!(
                "zero frequency for symbol {symbol}"
            )));
        }
        if freq[symbol as usize] != 0 {
            return Err(CodecError::invalid_header(format!(
                "duplicate header entry for symbol {symbol}"
            )));
        }
        freq[symbol as usize] = f;
    }

    Ok(freq)
}

/// Decompress the file at `input_path` into `output_path`.
pub fn decompress_file(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<()> {
    let input = fs::read(input_path)?;
    let decompressed = decompress(&input)?;
    fs::write(output_path, decompressed)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::compress;

    #[test]
    fn test_truncated_header() {
        let compressed = compress(b"hello world").unwrap();
        let result = decompress(&compressed[..3]);
        assert!(matches!(result, Err(CodecError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_truncated_payload() {
        let compressed = compress(b"the quick brown fox jumps over the lazy dog").unwrap();
        let cut = compressed.len() - 2;
        let result = decompress(&compressed[..cut]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overstated_frequencies_fail_without_allocating() {
        // A ~1.3 KB header can claim 256 * u32::MAX symbols; the decoder must
        // run out of payload bits, not reserve terabytes for the output.
        let mut data = Vec::new();
        data.extend_from_slice(&256u32.to_le_bytes());
        for symbol in 0..=255u8 {
            data.push(symbol);
            data.extend_from_slice(&u32::MAX.to_le_bytes());
        }
        let result = decompress(&data);
        assert!(matches!(result, Err(CodecError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_overstated_single_symbol_frequency_rejected() {
        // Same attack through the degenerate one-leaf path.
        let mut data = Vec::new();
        data.extend_from_slice(&1u32.to_le_bytes());
        data.push(b'A');
        data.extend_from_slice(&u32::MAX.to_le_bytes());
        let result = decompress(&data);
        assert!(matches!(result, Err(CodecError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_oversized_symbol_count_rejected() {
        let mut data = Vec::new();
        data.extend_from_slice(&300u32.to_le_bytes());
        let result = decompress(&data);
        assert!(matches!(result, Err(CodecError::InvalidHeader { .. })));
    }

    #[test]
    fn test_zero_frequency_entry_rejected() {
        let mut data = Vec::new();
        data.extend_from_slice(&1u32.to_le_bytes());
        data.push(b'A');
        data.extend_from_slice(&0u32.to_le_bytes());
        let result = decompress(&data);
        assert!(matches!(result, Err(CodecError::InvalidHeader { .. })));
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let mut data = Vec::new();
        data.extend_from_slice(&2u32.to_le_bytes());
        for _ in 0..2 {
            data.push(b'A');
            data.extend_from_slice(&7u32.to_le_bytes());
        }
        let result = decompress(&data);
        assert!(matches!(result, Err(CodecError::InvalidHeader { .. })));
    }
}
