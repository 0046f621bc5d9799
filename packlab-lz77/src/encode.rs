//! LZ77 encoding.

use crate::{BUFFER_SIZE, LOOK_AHEAD_SIZE, WINDOW_SIZE};
use packlab_core::error::Result;
use std::fs;
use std::path::Path;

/// Compress `input` with the LZ77 sliding-window algorithm.
///
/// Stream layout:
///
/// ```text
/// [seed window, raw bytes][(u8 back_offset, u8 length, u8 next_byte) x N]
/// ```
///
/// The first `WINDOW_SIZE` bytes are written verbatim to seed the decoder's
/// window. Each triple then encodes the longest run of look-ahead bytes that
/// repeats a run inside the window (`length == 0` and `back_offset == 0`
/// when nothing matches), followed by the first byte after the run.
///
/// Inputs of at most `WINDOW_SIZE` bytes are stored verbatim; the whole file
/// is its own seed window and the decoder echoes it back unchanged.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() <= WINDOW_SIZE {
        return Ok(input.to_vec());
    }

    let mut output = Vec::with_capacity(input.len() / 2 + WINDOW_SIZE);
    output.extend_from_slice(&input[..WINDOW_SIZE]);

    // Combined window + look-ahead buffer, refilled as it slides.
    let mut buf = input[..input.len().min(BUFFER_SIZE)].to_vec();
    let mut next_input = buf.len();

    while buf.len() > WINDOW_SIZE {
        let (window, look_ahead) = buf.split_at(WINDOW_SIZE);

        // Greedy-longest: try candidate lengths in decreasing order, the
        // first length with any window match wins. A literal byte always
        // remains after the run.
        let max_len = look_ahead.len() - 1;
        let mut best = None;
        for len in (1..=max_len).rev() {
            if let Some(pos) = find_window_match(window, &look_ahead[..len]) {
                best = Some((pos, len));
                break;
            }
        }

        let shift = match best {
            None => {
                output.extend_from_slice(&[0, 0, look_ahead[0]]);
                1
            }
            Some((pos, len)) => {
                output.push((WINDOW_SIZE - pos) as u8);
                output.push(len as u8);
                output.push(look_ahead[len]);
                len + 1
            }
        };

        // Slide by the consumed run plus its literal, refilling from input.
        buf.drain(..shift);
        let refill_end = (next_input + shift).min(input.len());
        buf.extend_from_slice(&input[next_input..refill_end]);
        next_input = refill_end;
    }

    Ok(output)
}

/// Find the leftmost window position whose run equals `pattern`.
///
/// Matches must lie fully inside the window and may not touch its final
/// byte, mirroring the emitted `length < back_offset` relation the decoder
/// relies on. Returns `None` for patterns as long as the window or longer.
fn find_window_match(window: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() || pattern.len() >= window.len() {
        return None;
    }
    window
        .windows(pattern.len())
        .take(window.len() - pattern.len())
        .position(|run| run == pattern)
}

/// Compress the file at `input_path` into `output_path`.
pub fn compress_file(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<()> {
    let input = fs::read(input_path)?;
    let compressed = compress(&input)?;
    fs::write(output_path, compressed)?;
    Ok(())
}
