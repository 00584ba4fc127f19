/// Which block compression algorithm encodes the image.
///
/// Carried through the block grid decoder to pick the per-block routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DxtnFormat {
    /// DXT1 compression (BC1), 8 bytes per block
    Dxt1,
    /// DXT3 compression (BC2), explicit 4-bit alpha, 16 bytes per block
    Dxt3,
    /// DXT5 compression (BC3), interpolated alpha, 16 bytes per block
    Dxt5,
}

impl DxtnFormat {
    /// Map the header `alpha_kind` byte of a DXT compressed BLP2 to the variant.
    pub fn from_alpha_kind(alpha_kind: u8) -> Option<Self> {
        match alpha_kind {
            0 => Some(DxtnFormat::Dxt1),
            1 => Some(DxtnFormat::Dxt3),
            7 => Some(DxtnFormat::Dxt5),
            _ => None,
        }
    }

    /// The header `alpha_kind` byte that selects this variant
    pub fn alpha_kind(&self) -> u8 {
        match self {
            DxtnFormat::Dxt1 => 0,
            DxtnFormat::Dxt3 => 1,
            DxtnFormat::Dxt5 => 7,
        }
    }

    /// Returns the block size in bytes for this DXT format
    pub fn block_size(&self) -> usize {
        match self {
            DxtnFormat::Dxt1 => 8,
            DxtnFormat::Dxt3 | DxtnFormat::Dxt5 => 16,
        }
    }

    /// Number of blocks along each axis for an image of the given size
    pub fn block_grid(width: u32, height: u32) -> (usize, usize) {
        (width.div_ceil(4) as usize, height.div_ceil(4) as usize)
    }

    /// Bytes of block data required to cover an image of the given size.
    /// Saturates instead of overflowing for absurd header dimensions.
    pub fn compressed_size(&self, width: u32, height: u32) -> usize {
        let (blocks_x, blocks_y) = Self::block_grid(width, height);
        blocks_x
            .saturating_mul(blocks_y)
            .saturating_mul(self.block_size())
    }
}
