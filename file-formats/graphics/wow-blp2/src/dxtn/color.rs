//! DXT1 color block: two RGB565 endpoints and sixteen 2-bit palette indices.

use super::Tile;
use crate::parser::reader::{u16_le, u32_le};

/// Four RGBA entries reconstructed from the two endpoints of a block
pub type Palette = [[u8; 4]; 4];

/// Expand an RGB565 value to RGB8 by shifting the fields into the high bits.
///
/// The low bits are left zero, so pure white `0xFFFF` becomes
/// `(248, 252, 248)`. Existing BLP converters emit exactly these values;
/// replicating the high bits into the low ones would change every output byte.
pub fn expand_rgb565(value: u16) -> [u8; 3] {
    [
        (((value >> 11) & 0x1F) << 3) as u8,
        (((value >> 5) & 0x3F) << 2) as u8,
        ((value & 0x1F) << 3) as u8,
    ]
}

/// Build the block palette from the two raw endpoints.
///
/// With `c0 > c1` the block has four opaque colors, otherwise three colors
/// and transparent black in slot 3.
pub fn build_palette(c0: u16, c1: u16) -> Palette {
    let [r0, g0, b0] = expand_rgb565(c0).map(u16::from);
    let [r1, g1, b1] = expand_rgb565(c1).map(u16::from);

    let mut palette = [[0; 4]; 4];
    palette[0] = [r0 as u8, g0 as u8, b0 as u8, 255];
    palette[1] = [r1 as u8, g1 as u8, b1 as u8, 255];

    if c0 > c1 {
        palette[2] = [
            ((2 * r0 + r1) / 3) as u8,
            ((2 * g0 + g1) / 3) as u8,
            ((2 * b0 + b1) / 3) as u8,
            255,
        ];
        palette[3] = [
            ((r0 + 2 * r1) / 3) as u8,
            ((g0 + 2 * g1) / 3) as u8,
            ((b0 + 2 * b1) / 3) as u8,
            255,
        ];
    } else {
        palette[2] = [
            ((r0 + r1) / 2) as u8,
            ((g0 + g1) / 2) as u8,
            ((b0 + b1) / 2) as u8,
            255,
        ];
        palette[3] = [0, 0, 0, 0];
    }
    palette
}

/// Decode an 8 byte color block into a 4x4 RGBA tile in row-major order.
pub fn decode_color_block(block: &[u8; 8]) -> Tile {
    let palette = build_palette(u16_le(block, 0), u16_le(block, 2));
    let indices = u32_le(block, 4);

    let mut tile = [[0; 4]; 16];
    for (i, pixel) in tile.iter_mut().enumerate() {
        let index = (indices >> (i * 2)) & 0x3;
        *pixel = palette[index as usize];
    }
    tile
}
