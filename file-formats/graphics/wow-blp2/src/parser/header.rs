use super::error::Error;
use super::reader::{ByteReader, Cursor, read_u32_array};
use super::types::ParseResult;
use crate::types::*;
use log::*;
use std::str;

/// Parse the fixed size BLP2 header at the start of `input`.
///
/// Only the layout is validated here: the magic and the presence of all
/// 1172 bytes. Whether the content can be decoded is decided later.
pub fn parse_header(input: &[u8]) -> ParseResult<BlpHeader> {
    let mut reader = Cursor::new(input);

    parse_magic(&mut reader).map_err(|e| e.with_context("magic"))?;
    let content_type = reader
        .read_u32_le()
        .map_err(|e| e.with_context("content_type field"))?;
    let compression = reader
        .read_u8()
        .map_err(|e| e.with_context("compression field"))?;
    let alpha_depth = reader
        .read_u8()
        .map_err(|e| e.with_context("alpha_depth field"))?;
    let alpha_kind = reader
        .read_u8()
        .map_err(|e| e.with_context("alpha_kind field"))?;
    let has_mips = reader
        .read_u8()
        .map_err(|e| e.with_context("has_mips field"))?;
    let width = reader
        .read_u32_le()
        .map_err(|e| e.with_context("width field"))?;
    let height = reader
        .read_u32_le()
        .map_err(|e| e.with_context("height field"))?;

    let mip_offsets = read_u32_array::<MAX_MIPS>(&mut reader)
        .map_err(|e| e.with_context("mipmap offsets"))?;
    let mip_lengths = read_u32_array::<MAX_MIPS>(&mut reader)
        .map_err(|e| e.with_context("mipmap lengths"))?;
    let palette = read_u32_array::<PALETTE_SIZE>(&mut reader)
        .map_err(|e| e.with_context("color palette"))?;

    trace!("Header ends at byte {}", reader.position());
    if !matches!(alpha_depth, 0 | 1 | 4 | 8) {
        warn!("Non standard alpha depth {alpha_depth}, expected 0, 1, 4 or 8");
    }
    debug!(
        "Header: content {content_type}, compression {compression}, alpha depth {alpha_depth}, alpha kind {alpha_kind}, {width}x{height}"
    );

    Ok(BlpHeader {
        content_type,
        compression,
        alpha_depth,
        alpha_kind,
        has_mips,
        width,
        height,
        mip_offsets,
        mip_lengths,
        palette,
    })
}

fn parse_magic(reader: &mut impl ByteReader) -> ParseResult<()> {
    let mut magic = [0u8; 4];
    reader.read_into(&mut magic)?;

    if magic != BLP2_MAGIC {
        return Err(Error::WrongMagic(
            str::from_utf8(&magic)
                .map(|s| s.to_owned())
                .unwrap_or_else(|_| format!("{magic:?}")),
        ));
    }
    Ok(())
}
