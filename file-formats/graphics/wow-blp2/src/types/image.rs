use crate::debug::trimmed_collection_fmt;
use custom_debug::Debug;

/// Bytes per RGBA8 pixel
pub const RGBA_CHANNELS: usize = 4;

/// Decoded full resolution image.
///
/// Pixels are RGBA8, row-major from top to bottom and left to right, with no
/// padding between rows. The row stride is `width * 4`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    #[debug(with = trimmed_collection_fmt)]
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// Wrap a buffer the block decoder produced for these dimensions.
    pub(crate) fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * RGBA_CHANNELS
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap an RGBA8 buffer, returning `None` when its length does not
    /// match `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize * RGBA_CHANNELS {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Length of one row in bytes
    pub fn stride(&self) -> usize {
        self.width as usize * RGBA_CHANNELS
    }

    /// The tightly packed RGBA8 buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the RGBA8 buffer
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA value at the given coordinate, `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = y as usize * self.stride() + x as usize * RGBA_CHANNELS;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[at..at + RGBA_CHANNELS]);
        Some(rgba)
    }
}
