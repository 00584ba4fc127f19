//! Alpha halves of DXT3 and DXT5 blocks. Both overwrite the alpha channel of
//! a tile already filled by the color decoder.

use super::Tile;
use crate::parser::reader::{read_bits, u64_le};

/// DXT3: sixteen explicit 4-bit alpha values, pixel 0 in the low nibble.
/// Each nibble `n` widens to `(n << 4) | n`.
pub fn apply_explicit_alpha(tile: &mut Tile, block: &[u8; 8]) {
    let bits = u64_le(block, 0);
    for (i, pixel) in tile.iter_mut().enumerate() {
        let nibble = ((bits >> (i * 4)) & 0xF) as u8;
        pixel[3] = (nibble << 4) | nibble;
    }
}

/// Constructs the DXT5 alpha lookup table from the two endpoints.
///
/// With `a0 > a1` the six remaining entries interpolate between the
/// endpoints in sevenths. Otherwise four entries interpolate in fifths and
/// the last two are fixed to 0 and 255.
pub fn alpha_table(a0: u8, a1: u8) -> [u8; 8] {
    let (a0w, a1w) = (u16::from(a0), u16::from(a1));
    let mut table = [a0, a1, 0, 0, 0, 0, 0, 255];
    if a0 > a1 {
        for k in 2..8u16 {
            table[k as usize] = (((8 - k) * a0w + (k - 1) * a1w) / 7) as u8;
        }
    } else {
        for k in 2..6u16 {
            table[k as usize] = (((6 - k) * a0w + (k - 1) * a1w) / 5) as u8;
        }
    }
    table
}

/// DXT5: two alpha endpoints followed by sixteen 3-bit table indices packed
/// LSB first into six bytes.
pub fn apply_interpolated_alpha(tile: &mut Tile, block: &[u8; 8]) {
    let table = alpha_table(block[0], block[1]);
    let indices = &block[2..8];
    for (i, pixel) in tile.iter_mut().enumerate() {
        let index = read_bits(indices, i * 3, 3);
        pixel[3] = table[index as usize];
    }
}
