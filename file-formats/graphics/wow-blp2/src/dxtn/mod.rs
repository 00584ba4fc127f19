//! DXT1/DXT3/DXT5 block codec.
//!
//! Every block covers 4x4 pixels. The color half is shared by all three
//! variants; DXT3 and DXT5 prepend an 8 byte alpha half that overwrites the
//! alpha channel the color half produced.

/// DXT3 explicit and DXT5 interpolated alpha
pub mod alpha;
/// DXT1 color block
pub mod color;

use crate::parser::error::Error;
use crate::parser::types::ParseResult;
use crate::types::{DxtnFormat, RGBA_CHANNELS};
use alpha::{apply_explicit_alpha, apply_interpolated_alpha};
use color::decode_color_block;
use log::*;

/// A decoded 4x4 block: sixteen RGBA pixels in row-major order
pub type Tile = [[u8; 4]; 16];

/// Pixels along one edge of a block
const BLOCK_DIM: usize = 4;

type Half = [u8; 8];

fn decode_dxt1(block: &Half) -> Tile {
    decode_color_block(block)
}

fn decode_dxt3([alpha, color]: &[Half; 2]) -> Tile {
    let mut tile = decode_color_block(color);
    apply_explicit_alpha(&mut tile, alpha);
    tile
}

fn decode_dxt5([alpha, color]: &[Half; 2]) -> Tile {
    let mut tile = decode_color_block(color);
    apply_interpolated_alpha(&mut tile, alpha);
    tile
}

impl DxtnFormat {
    /// Decode a single block of this format.
    ///
    /// Returns `None` when `block` is not exactly [`DxtnFormat::block_size`]
    /// bytes long.
    pub fn decode_block(&self, block: &[u8]) -> Option<Tile> {
        let (halves, rest) = block.as_chunks::<8>();
        if !rest.is_empty() {
            return None;
        }
        match (self, halves) {
            (DxtnFormat::Dxt1, [color]) => Some(decode_dxt1(color)),
            (DxtnFormat::Dxt3, [alpha, color]) => Some(decode_dxt3(&[*alpha, *color])),
            (DxtnFormat::Dxt5, [alpha, color]) => Some(decode_dxt5(&[*alpha, *color])),
            _ => None,
        }
    }
}

/// Decode a stream of blocks into a tightly packed RGBA8 image.
///
/// Blocks are laid out row-major, `ceil(width / 4)` per row. Blocks on the
/// right and bottom edges are decoded whole and only the pixels inside the
/// image are copied. The result is exactly `width * height * 4` bytes; extra
/// trailing block data is ignored.
pub fn decode_blocks(
    data: &[u8],
    width: u32,
    height: u32,
    format: DxtnFormat,
) -> ParseResult<Vec<u8>> {
    let (blocks_x, blocks_y) = DxtnFormat::block_grid(width, height);
    let expected = format.compressed_size(width, height);
    trace!("Dxtn blocks: {blocks_x}x{blocks_y}, {expected} bytes for {format:?}");
    if data.len() < expected {
        return Err(Error::BlockCountMismatch {
            width,
            height,
            expected,
            actual: data.len(),
        });
    }

    let width = width as usize;
    let mut output = vec![0u8; width * height as usize * RGBA_CHANNELS];
    if output.is_empty() {
        return Ok(output);
    }

    let (halves, _) = data[..expected].as_chunks::<8>();
    match format {
        DxtnFormat::Dxt1 => fill_grid(&mut output, halves, width, blocks_x, decode_dxt1),
        DxtnFormat::Dxt3 => {
            fill_grid(&mut output, halves.as_chunks::<2>().0, width, blocks_x, decode_dxt3)
        }
        DxtnFormat::Dxt5 => {
            fill_grid(&mut output, halves.as_chunks::<2>().0, width, blocks_x, decode_dxt5)
        }
    }
    Ok(output)
}

/// Split the output into bands of four pixel rows, one per block row.
#[cfg(not(feature = "parallel"))]
fn fill_grid<B>(
    output: &mut [u8],
    blocks: &[B],
    width: usize,
    blocks_x: usize,
    decode: fn(&B) -> Tile,
) {
    let band_len = width * BLOCK_DIM * RGBA_CHANNELS;
    for (band, row) in output.chunks_mut(band_len).zip(blocks.chunks(blocks_x)) {
        write_band(band, row, width, decode);
    }
}

/// Block rows write to disjoint bands, so they are decoded concurrently.
#[cfg(feature = "parallel")]
fn fill_grid<B: Sync>(
    output: &mut [u8],
    blocks: &[B],
    width: usize,
    blocks_x: usize,
    decode: fn(&B) -> Tile,
) {
    use rayon::prelude::*;

    let band_len = width * BLOCK_DIM * RGBA_CHANNELS;
    output
        .par_chunks_mut(band_len)
        .zip(blocks.par_chunks(blocks_x))
        .for_each(|(band, row)| write_band(band, row, width, decode));
}

/// Decode one row of blocks into a band of up to four pixel rows, clipping
/// columns past `width`. The band is shorter than four rows at the bottom
/// edge of images whose height is not a multiple of four.
fn write_band<B>(band: &mut [u8], row: &[B], width: usize, decode: fn(&B) -> Tile) {
    let stride = width * RGBA_CHANNELS;
    let rows = band.len() / stride;

    for (bx, block) in row.iter().enumerate() {
        let tile = decode(block);
        let x = bx * BLOCK_DIM;
        let columns = BLOCK_DIM.min(width - x);

        for py in 0..rows {
            let src = tile[py * BLOCK_DIM..py * BLOCK_DIM + columns].as_flattened();
            let dst = py * stride + x * RGBA_CHANNELS;
            band[dst..dst + src.len()].copy_from_slice(src);
        }
    }
}
