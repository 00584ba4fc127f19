//! Native byte reading utilities for BLP parsing
//!
//! Little-endian values are assembled from single bytes with shift-and-or, so
//! nothing depends on the endianness of the host. The cursor is used for the
//! header, the free functions for fixed size DXT block fields.

use super::error::Error;
use super::types::ParseResult;

/// Trait for reading binary data from a byte slice
pub trait ByteReader {
    /// Read a single unsigned 8-bit integer
    fn read_u8(&mut self) -> ParseResult<u8>;

    /// Read a single unsigned 32-bit integer in little-endian format
    fn read_u32_le(&mut self) -> ParseResult<u32>;

    /// Read exactly `buf.len()` bytes into a pre-allocated buffer
    fn read_into(&mut self, buf: &mut [u8]) -> ParseResult<()>;
}

/// A cursor for reading binary data from a byte slice
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the beginning of the data
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    fn take(&mut self, n: usize) -> ParseResult<&'a [u8]> {
        let data = self.data;
        let end = self
            .position
            .checked_add(n)
            .filter(|&end| end <= data.len())
            .ok_or(Error::UnexpectedEof)?;
        let bytes = &data[self.position..end];
        self.position = end;
        Ok(bytes)
    }
}

impl ByteReader for Cursor<'_> {
    fn read_u8(&mut self) -> ParseResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_u32_le(&mut self) -> ParseResult<u32> {
        Ok(u32_le(self.take(4)?, 0))
    }

    fn read_into(&mut self, buf: &mut [u8]) -> ParseResult<()> {
        buf.copy_from_slice(self.take(buf.len())?);
        Ok(())
    }
}

/// Helper function to read a fixed size table of u32 values
pub fn read_u32_array<const N: usize>(reader: &mut impl ByteReader) -> ParseResult<[u32; N]> {
    let mut values = [0; N];
    for value in values.iter_mut() {
        *value = reader.read_u32_le()?;
    }
    Ok(values)
}

/// Little-endian u16 at `at`. The caller guarantees two bytes are available.
pub fn u16_le(bytes: &[u8], at: usize) -> u16 {
    u16::from(bytes[at]) | (u16::from(bytes[at + 1]) << 8)
}

/// Little-endian u32 at `at`. The caller guarantees four bytes are available.
pub fn u32_le(bytes: &[u8], at: usize) -> u32 {
    u32::from(bytes[at])
        | (u32::from(bytes[at + 1]) << 8)
        | (u32::from(bytes[at + 2]) << 16)
        | (u32::from(bytes[at + 3]) << 24)
}

/// Little-endian u64 at `at`. The caller guarantees eight bytes are available.
pub fn u64_le(bytes: &[u8], at: usize) -> u64 {
    u64::from(u32_le(bytes, at)) | (u64::from(u32_le(bytes, at + 4)) << 32)
}

/// Extract `count` (at most 8) bits starting at `bit_offset`, counting from
/// the least significant bit of `bytes[0]`.
///
/// The window is `(B[p/8] | B[p/8+1] << 8) >> (p % 8)` masked to `count`
/// bits. The second byte is only touched when the window crosses into it, so
/// a window ending exactly at the last byte never reads past the slice.
pub fn read_bits(bytes: &[u8], bit_offset: usize, count: u32) -> u8 {
    debug_assert!(count <= 8);
    let index = bit_offset / 8;
    let shift = bit_offset % 8;

    let mut window = u16::from(bytes[index]);
    if shift + count as usize > 8 {
        window |= u16::from(bytes[index + 1]) << 8;
    }
    ((window >> shift) & ((1u16 << count) - 1)) as u8
}
