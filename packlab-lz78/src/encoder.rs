//! LZ78 encoding.

use packlab_core::error::{CodecError, Result};
use packlab_core::trie::{ROOT_ID, Trie};
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, SeekFrom, Write};
use std::path::Path;

/// Compress `input` into any seekable writer.
///
/// Stream layout (integers little-endian):
///
/// ```text
/// [u32 dictionary_size][(u32 parent_id, u8 symbol) x N][u32 pending_id]?
/// ```
///
/// The encoder walks the input from the trie root, descending while the next
/// symbol is a known child. On a miss it grows the dictionary by one node,
/// emits the pair `(current_id, symbol)` and resets to the root. If the
/// input ends mid-phrase the pending node's id is flushed as a trailing
/// 4-byte record; the phrase is by construction already in the dictionary,
/// so no in-band end-of-stream sentinel is needed.
///
/// The dictionary size is written as a placeholder up front and rewritten
/// via a seek once the final count is known.
pub fn compress_to<W: Write + Seek>(input: &[u8], writer: &mut W) -> Result<()> {
    writer.write_all(&0u32.to_le_bytes())?;

    let mut trie = Trie::new();
    let mut node = ROOT_ID;

    for &byte in input {
        match trie.child(node, byte) {
            Some(next) => node = next,
            None => {
                if trie.len() >= u32::MAX as usize {
                    return Err(CodecError::capacity_exceeded(u32::MAX as usize));
                }
                trie.insert_child(node, byte);
                writer.write_all(&(node as u32).to_le_bytes())?;
                writer.write_all(&[byte])?;
                node = ROOT_ID;
            }
        }
    }

    // Flush a pending partial phrase as a 4-byte record.
    if node != ROOT_ID {
        writer.write_all(&(node as u32).to_le_bytes())?;
    }

    // Rewrite the header with the final dictionary size (root included).
    let count = trie.len() as u32;
    writer.seek(SeekFrom::Start(0))?;
    writer.write_all(&count.to_le_bytes())?;
    writer.seek(SeekFrom::End(0))?;

    Ok(())
}

/// Compress `input` with LZ78, returning the stream as a byte vector.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    compress_to(input, &mut cursor)?;
    Ok(cursor.into_inner())
}

/// Compress the file at `input_path` into `output_path`.
pub fn compress_file(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<()> {
    let input = std::fs::read(input_path)?;
    let mut writer = BufWriter::new(File::create(output_path)?);
    compress_to(&input, &mut writer)?;
    writer.flush()?;
    Ok(())
}
