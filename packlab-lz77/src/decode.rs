//! LZ77 decoding.

use crate::WINDOW_SIZE;
use packlab_core::error::{CodecError, Result};
use std::fs;
use std::path::Path;

/// Decompress an LZ77 stream produced by [`crate::compress`].
///
/// The seed window is echoed verbatim, then every `(back_offset, length,
/// next_byte)` triple copies `length` bytes starting `back_offset` bytes
/// behind the end of the output, followed by the literal byte. The window is
/// simply the trailing `WINDOW_SIZE` bytes of the output, so copies read
/// from `output.len() - back_offset`.
///
/// Malformed streams fail loudly: a trailing partial triple or a
/// back-reference that leaves the window is a [`CodecError::CorruptedData`],
/// never silently truncated output.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    // A stream no longer than one window is a verbatim short file.
    if data.len() <= WINDOW_SIZE {
        return Ok(data.to_vec());
    }

    let triples = &data[WINDOW_SIZE..];
    if triples.len() % 3 != 0 {
        return Err(CodecError::corrupted(
            (WINDOW_SIZE + triples.len() / 3 * 3) as u64,
            "truncated triple at end of stream",
        ));
    }

    let mut output = Vec::with_capacity(data.len() * 2);
    output.extend_from_slice(&data[..WINDOW_SIZE]);

    for (i, triple) in triples.chunks_exact(3).enumerate() {
        let offset = triple[0] as usize;
        let length = triple[1] as usize;
        let next_byte = triple[2];

        if length > 0 {
            // The encoder guarantees 1 <= offset <= WINDOW_SIZE and
            // length < offset, so the copied run lies strictly inside the
            // pre-triple window.
            if offset == 0 || offset > WINDOW_SIZE || length >= offset {
                return Err(CodecError::corrupted(
                    (WINDOW_SIZE + i * 3) as u64,
                    format!("invalid back-reference: offset {offset}, length {length}"),
                ));
            }
            let start = output.len() - offset;
            output.extend_from_within(start..start + length);
        }

        output.push(next_byte);
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
