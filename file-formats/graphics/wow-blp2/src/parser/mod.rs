/// Bounds checking helpers for mipmap ranges
mod bounds;
/// Error types for BLP parsing operations
pub mod error;
mod header;
/// Native byte and bit reading utilities
pub(crate) mod reader;
/// Type definitions used by the BLP parser
pub mod types;

use crate::dxtn::decode_blocks;
use crate::types::*;
use bounds::get_bounded_slice;
pub use error::{Error, ErrorKind, LoadError};
pub use header::parse_header;
use log::*;
use std::path::Path;
use types::ParseResult;

/// Read a BLP2 file from the file system and decode its full resolution image.
pub fn load_blp<Q>(path: Q) -> Result<DecodedImage, LoadError>
where
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let input = std::fs::read(path).map_err(|e| LoadError::FileSystem(path.to_owned(), e))?;
    decode(&input).map_err(|e| LoadError::Parsing(path.to_owned(), e))
}

/// Decode the full resolution image of a BLP2 file held in memory.
///
/// The returned buffer holds exactly `width * height * 4` RGBA8 bytes.
pub fn decode(input: &[u8]) -> ParseResult<DecodedImage> {
    let header = parse_header(input).map_err(|e| e.with_context("header"))?;
    decode_content(&header, input)
}

/// Decode the full resolution image described by an already parsed header.
///
/// `input` is the whole file, since mipmap offsets are absolute.
pub fn decode_content(header: &BlpHeader, input: &[u8]) -> ParseResult<DecodedImage> {
    let format = header.dxtn_format()?;
    let blocks = mipmap_bytes(header, format, input)?;

    trace!(
        "Decoding {format:?} image of {}x{} ({} pixels)",
        header.width,
        header.height,
        header.pixel_count()
    );
    let pixels = decode_blocks(blocks, header.width, header.height, format)
        .map_err(|e| e.with_context("dxtn blocks"))?;

    Ok(DecodedImage::new(header.width, header.height, pixels))
}

/// Locate the block data of mipmap 0 and check it against the image size.
pub fn mipmap_bytes<'a>(
    header: &BlpHeader,
    format: DxtnFormat,
    input: &'a [u8],
) -> ParseResult<&'a [u8]> {
    let offset = header.mip_offsets[0];
    let length = header.mip_lengths[0];
    if offset == 0 || length == 0 {
        debug!("No image data found for mipmap 0 (offset {offset}, size {length})");
        return Err(Error::NoMipLevel { offset, length });
    }

    trace!("Reading image data at offset {offset}, size {length} bytes");
    let image_bytes = get_bounded_slice(input, offset, length, 0)?;

    let expected = format.compressed_size(header.width, header.height);
    trace!(
        "Dxtn format: {format:?}, block size: {}, expected size: {expected}",
        format.block_size()
    );
    if image_bytes.len() != expected {
        debug!(
            "Mipmap 0 has {} bytes, but {}x{} {format:?} needs {expected}",
            image_bytes.len(),
            header.width,
            header.height
        );
        return Err(Error::BlockCountMismatch {
            width: header.width,
            height: header.height,
            expected,
            actual: image_bytes.len(),
        });
    }

    Ok(image_bytes)
}
