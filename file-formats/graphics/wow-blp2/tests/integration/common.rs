//! Synthetic BLP2 files assembled in memory

use wow_blp2::types::{BlpHeader, MAX_MIPS, PALETTE_SIZE};

pub const SOLID_RED: [u8; 8] = [0x00, 0xF8, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00];
pub const TRANSPARENT_MODE: [u8; 8] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0xFF];

/// Byte level description of a BLP2 file. The mip 0 table entries default to
/// the block data placed right after the header.
#[derive(Clone)]
pub struct BlpBuilder {
    pub magic: [u8; 4],
    pub content_type: u32,
    pub compression: u8,
    pub alpha_depth: u8,
    pub alpha_kind: u8,
    pub has_mips: u8,
    pub width: u32,
    pub height: u32,
    pub blocks: Vec<u8>,
    pub mip_offset: Option<u32>,
    pub mip_length: Option<u32>,
}

impl BlpBuilder {
    pub fn dxt1(width: u32, height: u32, blocks: Vec<u8>) -> Self {
        Self::new(0, 0, width, height, blocks)
    }

    pub fn dxt3(width: u32, height: u32, blocks: Vec<u8>) -> Self {
        Self::new(8, 1, width, height, blocks)
    }

    pub fn dxt5(width: u32, height: u32, blocks: Vec<u8>) -> Self {
        Self::new(8, 7, width, height, blocks)
    }

    fn new(alpha_depth: u8, alpha_kind: u8, width: u32, height: u32, blocks: Vec<u8>) -> Self {
        Self {
            magic: *b"BLP2",
            content_type: 1,
            compression: 2,
            alpha_depth,
            alpha_kind,
            has_mips: 0,
            width,
            height,
            blocks,
            mip_offset: None,
            mip_length: None,
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(BlpHeader::SIZE + self.blocks.len());
        out.extend_from_slice(&self.magic);
        out.extend_from_slice(&self.content_type.to_le_bytes());
        out.extend_from_slice(&[
            self.compression,
            self.alpha_depth,
            self.alpha_kind,
            self.has_mips,
        ]);
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());

        let offset = self.mip_offset.unwrap_or(BlpHeader::SIZE as u32);
        let length = self.mip_length.unwrap_or(self.blocks.len() as u32);
        let mut offsets = [0u32; MAX_MIPS];
        let mut lengths = [0u32; MAX_MIPS];
        offsets[0] = offset;
        lengths[0] = length;
        for value in offsets.iter().chain(lengths.iter()) {
            out.extend_from_slice(&value.to_le_bytes());
        }
        out.resize(out.len() + PALETTE_SIZE * 4, 0);
        assert_eq!(out.len(), BlpHeader::SIZE);

        out.extend_from_slice(&self.blocks);
        out
    }
}

/// Read pixel `(x, y)` of a decoded image, panicking when out of range.
pub fn pixel(image: &wow_blp2::DecodedImage, x: u32, y: u32) -> [u8; 4] {
    image.pixel(x, y).expect("pixel inside the image")
}

/// Pack sixteen 3-bit DXT5 alpha indices into six bytes.
pub fn pack_alpha_indices(indices: [u8; 16]) -> [u8; 6] {
    let bits = indices
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &index)| acc | (u64::from(index) << (i * 3)));
    let bytes = bits.to_le_bytes();
    [bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]]
}
