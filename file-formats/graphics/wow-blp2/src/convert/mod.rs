//! Export of decoded textures through the `image` crate encoders.

mod error;

pub use error::Error;

use crate::types::DecodedImage;
use ::image::{DynamicImage, ImageFormat, RgbaImage};
use log::*;
use std::path::Path;
use std::str::FromStr;

/// Raster formats a decoded texture can be saved as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Portable Network Graphics, RGBA
    #[default]
    Png,
    /// Windows bitmap, RGBA
    Bmp,
    /// Truevision TGA, RGBA
    Tga,
    /// JPEG at quality 100. Alpha is dropped.
    Jpg,
}

impl OutputFormat {
    /// All supported formats
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Png,
        OutputFormat::Bmp,
        OutputFormat::Tga,
        OutputFormat::Jpg,
    ];

    /// File extension written for this format, lowercase and without a dot
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tga => "tga",
            OutputFormat::Jpg => "jpg",
        }
    }
}

impl From<OutputFormat> for ImageFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Tga => ImageFormat::Tga,
            OutputFormat::Jpg => ImageFormat::Jpeg,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown output format '{s}', expected png, bmp, tga or jpg"))
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Copy the decoded pixels into an [`RgbaImage`].
pub fn to_rgba_image(image: &DecodedImage) -> Result<RgbaImage, Error> {
    into_rgba_image(image.clone())
}

/// Move the decoded pixels into an [`RgbaImage`] without copying them.
pub fn into_rgba_image(image: DecodedImage) -> Result<RgbaImage, Error> {
    let (width, height) = (image.width(), image.height());
    let pixels = image.into_pixels();
    let len = pixels.len();
    RgbaImage::from_raw(width, height, pixels).ok_or(Error::BufferSize(width, height, len))
}

/// Encode `image` in the given format and write it to `path`.
///
/// PNG, BMP and TGA keep the alpha channel. JPEG has none, so the image is
/// flattened to RGB by dropping alpha and written at quality 100.
pub fn save_image<Q>(image: &DecodedImage, path: Q, format: OutputFormat) -> Result<(), Error>
where
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let rgba = to_rgba_image(image)?;
    debug!(
        "Saving {}x{} image as {format} to {}",
        image.width(),
        image.height(),
        path.display()
    );

    let write_failed = |e| Error::WriteFailed(path.to_owned(), e);
    match format {
        OutputFormat::Jpg => write_jpeg(DynamicImage::ImageRgba8(rgba), path).map_err(write_failed),
        _ => rgba
            .save_with_format(path, format.into())
            .map_err(write_failed),
    }
}

fn write_jpeg(image: DynamicImage, path: &Path) -> Result<(), ::image::ImageError> {
    use ::image::codecs::jpeg::JpegEncoder;
    use std::io::BufWriter;

    let rgb = image.to_rgb8();
    let file = std::fs::File::create(path)?;
    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), 100);
    encoder.encode_image(&rgb)
}
