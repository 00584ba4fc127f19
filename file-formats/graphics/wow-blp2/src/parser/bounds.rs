//! Bounds checking utilities for BLP parsers

use super::error::Error;
use super::types::ParseResult;
use log::debug;

/// Check if a given offset and size are within the bounds of input data.
///
/// The end of the range is computed in `u64` so huge header values cannot
/// wrap around and pass the check.
pub fn check_bounds(input: &[u8], offset: u32, size: u32, mipmap_index: usize) -> ParseResult<()> {
    if offset as usize >= input.len() {
        debug!(
            "Offset of mipmap {} is out of bounds! {} >= {}",
            mipmap_index,
            offset,
            input.len()
        );
        return Err(Error::OutOfBounds {
            offset: offset as usize,
            size: 0,
        });
    }

    let end = u64::from(offset) + u64::from(size);
    if end > input.len() as u64 {
        debug!(
            "Offset+size of mipmap {} is out of bounds! {} > {}",
            mipmap_index,
            end,
            input.len()
        );
        return Err(Error::OutOfBounds {
            offset: offset as usize,
            size: size as usize,
        });
    }

    Ok(())
}

/// Get a slice from input data after bounds checking
pub fn get_bounded_slice(
    input: &[u8],
    offset: u32,
    size: u32,
    mipmap_index: usize,
) -> ParseResult<&[u8]> {
    check_bounds(input, offset, size, mipmap_index)?;
    let start = offset as usize;
    Ok(&input[start..start + size as usize])
}
