//! Bit-level I/O operations for the PackLab codecs.
//!
//! This module provides `BitReader` and `BitWriter` for reading and writing
//! data at the bit level, which is essential for the variable-length prefix
//! codes produced by Huffman coding.
//!
//! # Bit Ordering
//!
//! PackLab streams are MSB-first: bits are packed starting from the most
//! significant bit of each byte, and the final partial byte is padded with
//! zero bits on the low end.
//!
//! # Example
//!
//! ```
//! use packlab_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! // Writing bits
//! let mut output = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut output);
//!     writer.write_bits(0b101, 3).unwrap();
//!     writer.write_bits(0b1100, 4).unwrap();
//!     writer.flush().unwrap();
//! }
//!
//! // Reading bits
//! let mut reader = BitReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

use crate::error::{CodecError, Result};
use std::io::{Read, Write};

/// A bit-level reader that wraps any `Read` implementation.
///
/// `BitReader` maintains an internal 64-bit buffer so reads can cross byte
/// boundaries without extra I/O calls. Bits come out MSB-first.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer; valid bits occupy the low `bits_in_buffer` positions.
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Consume this `BitReader` and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the current bit position (for error reporting).
    pub fn bit_position(&self) -> u64 {
        self.total_bits_read
    }

    /// Ensure at least `count` bits are available in the buffer.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        debug_assert!(count <= 57, "Cannot fill more than 57 bits at once");

        while self.bits_in_buffer < count {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    let missing = count - self.bits_in_buffer;
                    return Err(CodecError::unexpected_eof(missing.div_ceil(8) as usize));
                }
                Ok(_) => {
                    self.buffer = (self.buffer << 8) | byte[0] as u64;
                    self.bits_in_buffer += 8;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    /// Read up to 57 bits from the stream, MSB-first.
    ///
    /// The first bit read ends up in the most significant position of the
    /// returned value.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> Result<u64> {
        debug_assert!(count <= 57, "Cannot read more than 57 bits at once");

        if count == 0 {
            return Ok(0);
        }

        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let mask = (1u64 << count).wrapping_sub(1);
        let result = (self.buffer >> shift) & mask;

        self.bits_in_buffer -= count;
        self.total_bits_read += count as u64;

        Ok(result)
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Read bytes directly, bypassing the bit buffer.
    ///
    /// The bit buffer must be byte-aligned before calling this method.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        debug_assert!(self.bits_in_buffer % 8 == 0, "read_bytes requires byte alignment");

        let mut offset = 0;
        while self.bits_in_buffer >= 8 && offset < buf.len() {
            let shift = self.bits_in_buffer - 8;
            buf[offset] = ((self.buffer >> shift) & 0xFF) as u8;
            self.bits_in_buffer -= 8;
            self.total_bits_read += 8;
            offset += 1;
        }

        if offset < buf.len() {
            let remaining = buf.len() - offset;
            self.reader.read_exact(&mut buf[offset..]).map_err(|e| {
                if e.kind() == std::io::ErrorKind::UnexpectedEof {
                    CodecError::unexpected_eof(remaining)
                } else {
                    CodecError::from(e)
                }
            })?;
            self.total_bits_read += remaining as u64 * 8;
        }

        Ok(())
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits MSB-first in an internal buffer and flushes
/// complete bytes to the underlying writer. Call `flush()` when done to write
/// any remaining partial byte, zero-padded on the low end.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit buffer; valid bits occupy the low `bits_in_buffer` positions.
    buffer: u64,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Consume this `BitWriter` and return the underlying writer.
    ///
    /// This flushes any remaining bits before returning the writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        let this = std::mem::ManuallyDrop::new(self);
        // SAFETY: self is consumed and never dropped, so moving the writer
        // out of it cannot lead to a double free.
        Ok(unsafe { std::ptr::read(&this.writer) })
    }

    /// Flush complete bytes from the buffer to the writer.
    #[inline]
    fn flush_bytes(&mut self) -> Result<()> {
        while self.bits_in_buffer >= 8 {
            let shift = self.bits_in_buffer - 8;
            let byte = ((self.buffer >> shift) & 0xFF) as u8;
            self.writer.write_all(&[byte])?;
            self.bits_in_buffer -= 8;
        }
        // Drop bits already flushed so the left shift in write_bits cannot
        // overflow.
        if self.bits_in_buffer == 0 {
            self.buffer = 0;
        } else {
            self.buffer &= (1u64 << self.bits_in_buffer) - 1;
        }
        Ok(())
    }

    /// Write up to 57 bits to the stream, MSB-first.
    ///
    /// The most significant of the `count` low bits of `value` is written
    /// first.
    #[inline]
    pub fn write_bits(&mut self, value: u64, count: u8) -> Result<()> {
        debug_assert!(count <= 57, "Cannot write more than 57 bits at once");

        if count == 0 {
            return Ok(());
        }

        let mask = (1u64 << count).wrapping_sub(1);
        self.buffer = (self.buffer << count) | (value & mask);
        self.bits_in_buffer += count;

        self.flush_bytes()
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write_bits(bit as u64, 1)
    }

    /// Write bytes directly to the stream.
    ///
    /// The bit buffer must be byte-aligned before calling this method.
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        debug_assert!(self.bits_in_buffer % 8 == 0, "write_bytes requires byte alignment");

        self.flush_bytes()?;
        self.writer.write_all(buf)?;
        Ok(())
    }

    /// Flush any remaining bits to the underlying writer.
    ///
    /// A partial final byte is padded with zero bits on the low end.
    pub fn flush(&mut self) -> Result<()> {
        if self.bits_in_buffer % 8 != 0 {
            let padding = 8 - (self.bits_in_buffer % 8);
            self.buffer <<= padding;
            self.bits_in_buffer += padding;
        }
        self.flush_bytes()?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        // Best-effort flush on drop
        let _ = self.flush();
    }
}
