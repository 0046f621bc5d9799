//! LZ78 decoding.

use packlab_core::error::{CodecError, Result};
use packlab_core::trie::{ROOT_ID, Trie};
use std::fs;
use std::path::Path;

/// Decompress an LZ78 stream produced by [`crate::compress`].
///
/// The decoder mirrors the encoder's dictionary growth exactly: each
/// `(parent_id, symbol)` pair appends the parent's phrase plus the symbol to
/// the output and inserts the same child the encoder inserted, so ids stay
/// dense and identical on both sides. A trailing 4-byte record names a
/// pending phrase that is emitted as-is.
///
/// Integrity checks:
/// - a pair's parent id must already be assigned,
/// - the (parent, symbol) child must not already exist,
/// - record framing must be whole 5-byte pairs plus an optional 4-byte tail,
/// - the rebuilt dictionary size must equal the header's count.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < 4 {
        return Err(CodecError::unexpected_eof(4 - data.len()));
    }
    let dict_size =
        u32::from_le_bytes(data[0..4].try_into().expect("slice is four bytes")) as usize;
    if dict_size == 0 {
        return Err(CodecError::invalid_header("dictionary size is zero"));
    }

    let payload = &data[4..];
    let remainder = payload.len() % 5;
    if remainder != 0 && remainder != 4 {
        return Err(CodecError::corrupted(
            (4 + payload.len() - remainder) as u64,
            "truncated dictionary pair at end of stream",
        ));
    }

    let mut trie = Trie::new();
    let mut output = Vec::new();

    for (i, pair) in payload.chunks_exact(5).enumerate() {
        let offset = (4 + i * 5) as u64;
        let parent =
            u32::from_le_bytes(pair[0..4].try_into().expect("slice is four bytes")) as usize;
        let symbol = pair[4];

        if parent >= trie.len() {
            return Err(CodecError::corrupted(
                offset,
                format!("pair references unassigned dictionary id {parent}"),
            ));
        }
        if trie.child(parent, symbol).is_some() {
            return Err(CodecError::corrupted(
                offset,
                format!("duplicate dictionary entry under id {parent}"),
            ));
        }

        trie.phrase_into(parent, &mut output);
        output.push(symbol);
        trie.insert_child(parent, symbol);
    }

    if remainder == 4 {
        let tail_offset = (4 + payload.len() - 4) as u64;
        let pending = u32::from_le_bytes(
            payload[payload.len() - 4..]
                .try_into()
                .expect("slice is four bytes"),
        ) as usize;

        if pending == ROOT_ID || pending >= trie.len() {
            return Err(CodecError::corrupted(
                tail_offset,
                format!("invalid pending phrase id {pending}"),
            ));
        }
        trie.phrase_into(pending, &mut output);
    }

    if trie.len() != dict_size {
        return Err(CodecError::invalid_header(format!(
            "dictionary size mismatch: header says {dict_size}, stream builds {}",
            trie.len()
        )));
    }

    Ok(output)
}

/// Decompress the file at `input_path` into `output_path`.
pub fn decompress_file(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<()> {
    let input = fs::read(input_path)?;
    let decompressed = decompress(&input)?;
    fs::write(output_path, decompressed)?;
    Ok(())
}
