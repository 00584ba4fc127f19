use super::dxtn::DxtnFormat;
use crate::debug::trimmed_collection_fmt;
use crate::parser::error::Error;
use crate::parser::types::ParseResult;
use custom_debug::Debug;
use std::fmt;

/// Magic bytes at the start of every BLP2 file
pub const BLP2_MAGIC: [u8; 4] = *b"BLP2";

/// Number of mipmap slots in the header tables
pub const MAX_MIPS: usize = 16;

/// Number of entries in the header palette
pub const PALETTE_SIZE: usize = 256;

/// Kind of body stored after the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentType {
    /// JPEG compressed body
    Jpeg,
    /// Palettized, DXT or uncompressed body
    Direct,
}

impl ContentType {
    /// Human readable name of the content type
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Jpeg => "JPG",
            ContentType::Direct => "BLP/DXTC/Uncompressed",
        }
    }
}

impl TryFrom<u32> for ContentType {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ContentType::Jpeg),
            1 => Ok(ContentType::Direct),
            _ => Err(value),
        }
    }
}

/// Compression of a direct content body
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Compression {
    /// 256 color palette with separate alpha
    Palettized,
    /// DXT1, DXT3 or DXT5 blocks
    Dxtc,
    /// Uncompressed BGRA pixels
    Uncompressed,
}

impl Compression {
    /// Human readable name of the compression
    pub fn label(&self) -> &'static str {
        match self {
            Compression::Palettized => "BLP",
            Compression::Dxtc => "DXTC",
            Compression::Uncompressed => "Uncompressed",
        }
    }
}

impl TryFrom<u8> for Compression {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Compression::Palettized),
            2 => Ok(Compression::Dxtc),
            3 => Ok(Compression::Uncompressed),
            _ => Err(value),
        }
    }
}

/// Location and dimensions of a mipmap level stored in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MipLevel {
    /// Level index, 0 is the full resolution image
    pub level: usize,
    /// Byte offset of the level in the file
    pub offset: u32,
    /// Byte length of the level
    pub length: u32,
    /// Width of the level in pixels
    pub width: u32,
    /// Height of the level in pixels
    pub height: u32,
}

/// Fixed size header at the start of a BLP2 file.
///
/// Fields are kept as they are stored on disk, so unsupported files can
/// still be described. Typed views are provided by the accessor methods.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlpHeader {
    /// Raw content type, 0 is JPEG and 1 is direct
    pub content_type: u32,
    /// Raw compression, 1 palettized, 2 DXT, 3 uncompressed
    pub compression: u8,
    /// Alpha channel depth in bits: 0, 1, 4 or 8
    pub alpha_depth: u8,
    /// Selects the DXT flavor when the compression is DXT
    pub alpha_kind: u8,
    /// Non zero when the file carries mipmaps
    pub has_mips: u8,
    /// Width of the full resolution image
    pub width: u32,
    /// Height of the full resolution image
    pub height: u32,
    /// File offsets of each mipmap level
    #[debug(with = trimmed_collection_fmt)]
    pub mip_offsets: [u32; MAX_MIPS],
    /// Byte lengths of each mipmap level, 0 marks an absent level
    #[debug(with = trimmed_collection_fmt)]
    pub mip_lengths: [u32; MAX_MIPS],
    /// ARGB palette, unused by DXT content
    #[debug(with = trimmed_collection_fmt)]
    pub palette: [u32; PALETTE_SIZE],
}

impl BlpHeader {
    /// Size of the serialized header in bytes.
    ///
    /// magic + content type + four flag bytes + dimensions + two mipmap
    /// tables + palette.
    pub const SIZE: usize = 4 + 4 + 4 + 8 + MAX_MIPS * 4 * 2 + PALETTE_SIZE * 4;

    /// Typed content type, `None` for unknown values
    pub fn content(&self) -> Option<ContentType> {
        ContentType::try_from(self.content_type).ok()
    }

    /// Typed compression, `None` for unknown values
    pub fn compression_kind(&self) -> Option<Compression> {
        Compression::try_from(self.compression).ok()
    }

    /// Whether the header announces mipmaps
    pub fn has_mipmaps(&self) -> bool {
        self.has_mips != 0
    }

    /// Number of pixels of the full resolution image
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Resolve the DXT variant of the body.
    ///
    /// Fails for JPEG content, for non DXT compressions and for alpha kinds
    /// outside of 0, 1 and 7.
    pub fn dxtn_format(&self) -> ParseResult<DxtnFormat> {
        match self.content() {
            Some(ContentType::Direct) => {}
            _ => return Err(Error::UnsupportedContentType(self.content_type)),
        }
        match self.compression_kind() {
            Some(Compression::Dxtc) => {}
            _ => return Err(Error::UnsupportedCompression(self.compression)),
        }
        DxtnFormat::from_alpha_kind(self.alpha_kind)
            .ok_or(Error::UnsupportedAlphaKind(self.alpha_kind))
    }

    /// Dimensions of the given mipmap level
    pub fn mipmap_size(&self, level: usize) -> (u32, u32) {
        let shift = level.min(31) as u32;
        ((self.width >> shift).max(1), (self.height >> shift).max(1))
    }

    /// Levels that are present in the file, in ascending order
    pub fn mip_levels(&self) -> impl Iterator<Item = MipLevel> + '_ {
        self.mip_offsets
            .iter()
            .zip(self.mip_lengths.iter())
            .enumerate()
            .filter(|(_, (_, length))| **length != 0)
            .map(|(level, (&offset, &length))| {
                let (width, height) = self.mipmap_size(level);
                MipLevel {
                    level,
                    offset,
                    length,
                    width,
                    height,
                }
            })
    }
}

impl fmt::Display for BlpHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compression = self.compression_kind().map_or("Unknown", |c| c.label());
        write!(
            f,
            "BLP2 Texture ({}x{}, {}, alpha kind {})",
            self.width, self.height, compression, self.alpha_kind
        )
    }
}
